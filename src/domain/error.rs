use std::io;

use thiserror::Error;

/// Library-wide error type for create-chronicals-app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template is not offered by the resolved language.
    #[error("Invalid template: {template}. Must be one of {available}.")]
    InvalidTemplate { template: String, available: String },

    /// Template download failed.
    #[error("{message}")]
    TemplateFetch { message: String },

    /// An external tool invocation failed.
    #[error("{tool}: {error}")]
    ExternalTool { tool: String, error: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn fetch_error<S: Into<String>>(message: S) -> Self {
        AppError::TemplateFetch { message: message.into() }
    }

    pub(crate) fn tool_error<T: Into<String>, E: Into<String>>(tool: T, error: E) -> Self {
        AppError::ExternalTool { tool: tool.into(), error: error.into() }
    }
}
