//! Shared testing utilities for create-chronicals-app CLI tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises: a
/// sandboxed work directory, a private `PATH` populated with fake tool
/// scripts, and a template host URL override.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
    template_host: Option<String>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no fake tools installed.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");
        let log_file = root.path().join("tools.log");

        Self { root, work_dir, bin_dir, log_file, template_host: None }
    }

    /// Point the binary at a mock template host.
    pub fn with_template_host(mut self, url: &str) -> Self {
        self.template_host = Some(url.to_string());
        self
    }

    /// Install a fake tool on the private PATH that logs its arguments and
    /// exits with the given status (except for `--version` probes, which
    /// always succeed).
    pub fn install_fake_tool(&self, name: &str, exit_code: i32) {
        let script_path = self.bin_dir.join(name);
        let script = format!(
            r#"#!/bin/sh
echo "{name} $@" >> "{log}"
if [ "$1" = "--version" ]; then
    echo "{name} 0.0.0-fake"
    exit 0
fi
exit {exit_code}
"#,
            name = name,
            log = self.log_file.to_string_lossy(),
            exit_code = exit_code,
        );
        fs::write(&script_path, script).expect("Failed to write fake tool script");

        let mut perms =
            fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");
    }

    /// Arguments logged by the fake tools, one invocation per line.
    pub fn tool_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Destination directory inside the workspace.
    pub fn destination(&self) -> PathBuf {
        self.work_dir.join("app")
    }

    /// Build a command for invoking the compiled binary inside the sandbox.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-chronicals-app")
            .expect("Failed to locate create-chronicals-app binary");
        cmd.current_dir(&self.work_dir);
        cmd.env("HOME", self.root.path());
        cmd.env("PATH", &self.bin_dir);
        if let Some(host) = &self.template_host {
            cmd.env("CHRONICALS_TEMPLATE_HOST", host);
        }
        cmd
    }

    /// Assert the destination holds the fetched template content.
    pub fn assert_template_cloned(&self) {
        assert!(
            self.destination().join("package.json").exists(),
            "template content should exist in the destination"
        );
    }

    /// Assert the env file holds exactly the given line.
    pub fn assert_env_file(&self, expected: &str) {
        let content = fs::read_to_string(self.destination().join(".env"))
            .expect(".env should exist in the destination");
        assert_eq!(content, expected);
    }

    /// Assert the env file was never written.
    pub fn assert_no_env_file(&self) {
        assert!(!self.destination().join(".env").exists(), ".env should not exist");
    }
}

/// Register the standard mocks for a (language, template) pair on the given
/// server and return them so they stay alive for the test's duration.
#[allow(dead_code)]
pub fn mock_template(server: &mut mockito::Server, language: &str, template: &str) -> Vec<mockito::Mock> {
    let prefix = format!("/{language}/{template}");
    vec![
        server
            .mock("GET", format!("{prefix}/manifest.json").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"files": ["package.json", "src/index.ts"]}"#)
            .create(),
        server
            .mock("GET", format!("{prefix}/package.json").as_str())
            .with_status(200)
            .with_body(r#"{"name": "chronicals-app"}"#)
            .create(),
        server
            .mock("GET", format!("{prefix}/src/index.ts").as_str())
            .with_status(200)
            .with_body("export {};")
            .create(),
    ]
}
