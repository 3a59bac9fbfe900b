use std::path::{Path, PathBuf};

use crate::domain::Language;

/// Fully-resolved configuration for a single scaffolding run.
///
/// Built incrementally by the CLI resolver and threaded by reference through
/// the orchestrator; every field is final before the fetch stage runs.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Where the app is created.
    pub destination: PathBuf,
    /// Output-language flavor.
    pub language: Language,
    /// Template name, a member of `language`'s template set.
    pub template: String,
    /// Personal Development API key, empty when none was provided.
    pub development_key: String,
    /// Overwrite a pre-existing destination.
    pub force: bool,
    /// Relay fine-grained progress.
    pub verbose: bool,
}

impl ProjectConfig {
    /// Destination as a path.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
