use crate::ports::{TemplateSource, ToolRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TemplateSource, T: ToolRunner> {
    templates: S,
    tools: T,
}

impl<S: TemplateSource, T: ToolRunner> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(templates: S, tools: T) -> Self {
        Self { templates, tools }
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the tool runner.
    pub fn tools(&self) -> &T {
        &self.tools
    }
}
