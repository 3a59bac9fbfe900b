use std::path::Path;

use crate::domain::AppError;

/// Synchronous external-command interface for the installer and VCS stages.
///
/// Kept behind a trait so host probing and subprocess execution can be faked
/// in tests without touching the real host.
pub trait ToolRunner {
    /// Whether the named executable is present on the host.
    fn is_installed(&self, tool: &str) -> bool;

    /// Run a tool with its standard streams connected to the parent's.
    fn run_streamed(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError>;

    /// Run a tool capturing its output, returning trimmed stdout.
    fn run_captured(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError>;
}
