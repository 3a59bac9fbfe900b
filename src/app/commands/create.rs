//! The scaffolding orchestrator.
//!
//! Stages run strictly in sequence: fetch, key validation, `.env` write,
//! dependency install, git init, final report. A fetch failure aborts the
//! remainder; an invalid key fails the run with exit 1; install and git
//! failures are logged and bypassed so the user still ends up with a usable
//! project.

use std::io::{self, Write};

use crate::app::AppContext;
use crate::domain::{AppError, PackageManager, ProjectConfig, credential};
use crate::ports::{FetchOptions, TemplateSource, ToolRunner};

use super::{install, secrets, vcs};

/// Result of a scaffolding run that completed without an internal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Process exit status the CLI should use.
    pub exit_code: i32,
}

impl CreateOutcome {
    fn success() -> Self {
        Self { exit_code: 0 }
    }

    fn failed() -> Self {
        Self { exit_code: 1 }
    }

    /// An aborted fetch exits 0; only credential and report failures are
    /// non-zero.
    fn aborted() -> Self {
        Self { exit_code: 0 }
    }
}

/// Rewrite internal option naming in fetch diagnostics to the user-facing
/// flag syntax (`options.force` -> `--force`).
pub(crate) fn sanitize_fetch_message(message: &str) -> String {
    message.replace("options.", "--")
}

/// Drive the full pipeline for a resolved configuration.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    config: &ProjectConfig,
) -> Result<CreateOutcome, AppError>
where
    S: TemplateSource,
    T: ToolRunner,
{
    println!();
    println!(
        "Creating a {} Chronicals app with the {} template...",
        config.language, config.template
    );
    println!();
    println!("Fetching app template...");

    let options = FetchOptions { force: config.force, verbose: config.verbose };
    if let Err(err) =
        ctx.templates().fetch(config.language, &config.template, config.destination(), &options)
    {
        let raw = err.to_string();
        let message = sanitize_fetch_message(&raw);
        eprintln!("Failed to clone Chronicals app template: {message}");
        if config.verbose && message != raw {
            eprintln!("{raw}");
        }
        return Ok(CreateOutcome::aborted());
    }

    let key = &config.development_key;
    if !credential::is_development_key(key) {
        eprintln!("Invalid Personal Development API key: {key}");
        return Ok(CreateOutcome::failed());
    }

    secrets::write_env_file(config)?;

    println!("Installing dependencies...");
    let manager = install::select_manager(ctx.tools());
    if let Err(err) = install::execute(ctx, config, manager) {
        eprintln!("Failed installing dependencies: {err}");
    }

    println!("Initializing git repository...");
    // Git init runs after install and the .env write so that lock files and
    // the environment file land in the initial commit.
    if let Err(err) = vcs::execute(ctx, config) {
        eprintln!("Failed to initialize git repository: {err}");
        if config.verbose {
            eprintln!("{err:?}");
        }
    }

    println!();
    println!("✨ Created new {} Chronicals app.", config.language);
    println!();

    if let Err(err) = write_run_instructions(&mut io::stdout().lock(), config, manager) {
        eprintln!("Failed generating start steps: {err}");
        return Ok(CreateOutcome::failed());
    }

    Ok(CreateOutcome::success())
}

fn write_run_instructions(
    out: &mut impl Write,
    config: &ProjectConfig,
    manager: PackageManager,
) -> io::Result<()> {
    writeln!(out, "To run your app:")?;
    writeln!(out, "1. cd {}", config.destination.display())?;
    for (index, command) in manager.start_commands(config.language).iter().enumerate() {
        writeln!(out, "{}. {}", index + 2, command)?;
    }
    writeln!(out)?;
    Ok(())
}
