//! Git repository initialization stage.

use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig};
use crate::ports::{TemplateSource, ToolRunner};

/// Message used for the generated repository's first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-chronicals-app";

/// Initialize a repository in the destination and commit its current state.
pub fn execute<S, T>(ctx: &AppContext<S, T>, config: &ProjectConfig) -> Result<(), AppError>
where
    S: TemplateSource,
    T: ToolRunner,
{
    let dest = config.destination();
    let tools = ctx.tools();

    tools.run_captured("git", &["init"], dest)?;
    tools.run_captured("git", &["add", "-A"], dest)?;
    tools.run_captured("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], dest)?;

    Ok(())
}
