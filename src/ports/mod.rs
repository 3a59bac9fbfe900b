mod template_source;
mod tool_runner;

pub use template_source::{FetchOptions, TemplateSource};
pub use tool_runner::ToolRunner;
