use std::path::Path;

use crate::domain::{AppError, Language};

/// Options controlling a template fetch.
///
/// Field names surface verbatim in adapter diagnostics as `options.<field>`;
/// the CLI layer rewrites them to flag syntax before printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Overwrite a pre-existing destination.
    pub force: bool,
    /// Relay per-file progress.
    pub verbose: bool,
}

/// Remote template hosting service, addressed by (language, template name).
pub trait TemplateSource {
    /// Copy the template content into the destination directory.
    fn fetch(
        &self,
        language: Language,
        template: &str,
        destination: &Path,
        options: &FetchOptions,
    ) -> Result<(), AppError>;
}
