//! create-chronicals-app: scaffold a new Chronicals application from a remote
//! template, write its local secrets, install dependencies, and initialize
//! version control.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::AppContext;
use app::commands::create;
use services::{HttpTemplateSource, ShellToolRunner};

pub use app::commands::create::CreateOutcome;
pub use domain::{AppError, Language, PackageManager, ProjectConfig};

/// Run the full scaffolding pipeline with the real HTTP and shell adapters.
///
/// Returns the outcome whose `exit_code` the caller should propagate; an
/// `Err` means an internal failure outside the pipeline's own
/// fatal/recoverable classification.
pub fn create(config: &ProjectConfig) -> Result<CreateOutcome, AppError> {
    let templates = HttpTemplateSource::from_env()?;
    let ctx = AppContext::new(templates, ShellToolRunner::new());

    create::execute(&ctx, config)
}
