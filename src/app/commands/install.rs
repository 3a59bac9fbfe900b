//! Dependency installation stage.

use std::fs;

use crate::app::AppContext;
use crate::domain::{AppError, PackageManager, ProjectConfig};
use crate::ports::{TemplateSource, ToolRunner};

/// Pick the manager for this run by probing the host. Yarn is preferred when
/// installed, npm is the fallback default.
pub fn select_manager<T: ToolRunner>(tools: &T) -> PackageManager {
    if tools.is_installed(PackageManager::Yarn.executable()) {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    }
}

/// Run the selected manager's install command inside the destination, with
/// the subprocess streams connected to the parent's.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    config: &ProjectConfig,
    manager: PackageManager,
) -> Result<(), AppError>
where
    S: TemplateSource,
    T: ToolRunner,
{
    ctx.tools().run_streamed(
        manager.executable(),
        manager.install_args(),
        config.destination(),
    )?;

    // Templates ship a yarn.lock; after an npm install it is stale.
    if manager == PackageManager::Npm {
        let _ = fs::remove_file(config.destination().join("yarn.lock"));
    }

    Ok(())
}
