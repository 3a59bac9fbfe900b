//! Secrets persistence for the generated app.

use std::fs;

use crate::domain::{AppError, ProjectConfig, credential};

/// Overwrite `<destination>/.env` with the single `CHRONICALS_KEY=<value>`
/// line. Pre-existing content is not merged.
pub fn write_env_file(config: &ProjectConfig) -> Result<(), AppError> {
    let path = config.destination().join(credential::ENV_FILE);
    fs::write(path, credential::render_env_line(&config.development_key))?;
    Ok(())
}
