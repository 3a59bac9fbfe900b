use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ToolRunner;

/// `std::process::Command`-backed tool runner.
#[derive(Debug, Clone, Default)]
pub struct ShellToolRunner;

impl ShellToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ShellToolRunner {
    fn is_installed(&self, tool: &str) -> bool {
        Command::new(tool)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run_streamed(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| AppError::tool_error(program, e.to_string()))?;

        if !status.success() {
            return Err(AppError::tool_error(
                program,
                format!("`{} {}` exited with {}", program, args.join(" "), status),
            ));
        }

        Ok(())
    }

    fn run_captured(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| AppError::tool_error(program, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::tool_error(
                program,
                if stderr.is_empty() {
                    format!("`{} {}` exited with {}", program, args.join(" "), output.status)
                } else {
                    stderr
                },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
