mod http_template_source;
mod shell_tool_runner;

pub use http_template_source::HttpTemplateSource;
pub use shell_tool_runner::ShellToolRunner;
