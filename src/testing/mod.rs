//! Test doubles for the template source and tool runner ports.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, Language};
use crate::ports::{FetchOptions, TemplateSource, ToolRunner};

/// Tool runner that records invocations instead of spawning processes.
pub(crate) struct RecordingToolRunner {
    installed: Vec<String>,
    failing: Vec<String>,
    invocations: RefCell<Vec<String>>,
}

impl RecordingToolRunner {
    pub(crate) fn with_installed(tools: &[&str]) -> Self {
        Self {
            installed: tools.iter().map(|t| t.to_string()).collect(),
            failing: Vec::new(),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Make every invocation of `program` fail.
    pub(crate) fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Recorded invocations as `program arg1 arg2 ...` strings.
    pub(crate) fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        self.invocations.borrow_mut().push(format!("{} {}", program, args.join(" ")));
        if self.failing.iter().any(|f| f == program) {
            return Err(AppError::tool_error(program, "simulated failure"));
        }
        Ok(())
    }
}

impl ToolRunner for RecordingToolRunner {
    fn is_installed(&self, tool: &str) -> bool {
        self.installed.iter().any(|t| t == tool)
    }

    fn run_streamed(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<(), AppError> {
        self.record(program, args)
    }

    fn run_captured(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<String, AppError> {
        self.record(program, args).map(|_| String::new())
    }
}

/// Template source with a fixed outcome.
pub(crate) enum StaticTemplateSource {
    /// Writes a `template.marker` file into the destination.
    Succeed,
    /// Fails with the given message.
    Fail(String),
}

impl StaticTemplateSource {
    pub(crate) fn succeeding() -> Self {
        StaticTemplateSource::Succeed
    }

    pub(crate) fn failing(message: &str) -> Self {
        StaticTemplateSource::Fail(message.to_string())
    }
}

impl TemplateSource for StaticTemplateSource {
    fn fetch(
        &self,
        _language: Language,
        _template: &str,
        destination: &Path,
        _options: &FetchOptions,
    ) -> Result<(), AppError> {
        match self {
            StaticTemplateSource::Succeed => {
                fs::create_dir_all(destination)?;
                fs::write(destination.join("template.marker"), "fetched")?;
                Ok(())
            }
            StaticTemplateSource::Fail(message) => Err(AppError::fetch_error(message.clone())),
        }
    }
}
