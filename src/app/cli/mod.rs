//! CLI Adapter.

mod resolve;

use clap::Parser;
use clap::builder::PossibleValuesParser;

use crate::domain::{AppError, all_templates};

#[derive(Parser)]
#[command(name = "create-chronicals-app")]
#[command(version)]
#[command(about = "Create Chronicals App", long_about = None)]
pub(super) struct Cli {
    /// Path where the Chronicals app should be created
    pub(super) destination: Option<String>,

    /// The Chronicals app template to use
    #[arg(short, long, value_parser = template_choices())]
    pub(super) template: Option<String>,

    /// JavaScript or TypeScript
    #[arg(short, long, value_parser = language_choices())]
    pub(super) language: Option<String>,

    /// Your Personal Development API Key. For security reasons, Live mode
    /// keys may not be passed using this option.
    #[arg(long, visible_alias = "pdk")]
    pub(super) personal_development_key: Option<String>,

    /// Overwrite the destination if it already exists
    #[arg(long, default_value_t = false)]
    pub(super) force: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub(super) verbose: bool,
}

fn template_choices() -> PossibleValuesParser {
    PossibleValuesParser::new(all_templates())
}

fn language_choices() -> PossibleValuesParser {
    PossibleValuesParser::new(["javascript", "typescript", "js", "ts"])
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = resolve::resolve_config(cli)
        .and_then(|config| crate::create(&config))
        .map(|outcome| outcome.exit_code);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
