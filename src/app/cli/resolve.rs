//! Configuration Resolver: merges flags and interactive answers into one
//! fully-specified `ProjectConfig`.

use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::domain::{AppError, Language, ProjectConfig};

use super::Cli;

const DEFAULT_DESTINATION: &str = "./chronicals";
const DEFAULT_TEMPLATE: &str = "basic";

pub(super) fn resolve_config(cli: Cli) -> Result<ProjectConfig, AppError> {
    let destination = match cli.destination {
        Some(value) => value,
        None => prompt_destination()?,
    };
    if destination.trim().is_empty() {
        return Err(AppError::config_error("Destination path must not be empty"));
    }

    let language = resolve_language(cli.language.as_deref(), cli.template.as_deref())?;

    let template = match cli.template {
        Some(value) => value,
        None => prompt_template(language)?,
    };

    if !language.offers_template(&template) {
        return Err(AppError::InvalidTemplate {
            template,
            available: language.templates().join(", "),
        });
    }

    Ok(ProjectConfig {
        destination: PathBuf::from(destination),
        language,
        template,
        development_key: cli.personal_development_key.unwrap_or_default(),
        force: cli.force,
        verbose: cli.verbose,
    })
}

/// Resolve the language from the flag, the template's candidate set, or a
/// prompt. A template offered by exactly one language selects that language
/// without prompting.
fn resolve_language(flag: Option<&str>, template: Option<&str>) -> Result<Language, AppError> {
    if let Some(value) = flag {
        return Language::parse(value)
            .ok_or_else(|| AppError::config_error(format!("Unknown language '{value}'")));
    }

    let candidates = Language::candidates_for(template);
    match candidates.as_slice() {
        [] => Err(AppError::config_error(format!(
            "No language offers the template '{}'",
            template.unwrap_or_default()
        ))),
        [only] => Ok(*only),
        _ => prompt_language(&candidates),
    }
}

fn prompt_destination() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Where would you like to create your app?")
        .default(DEFAULT_DESTINATION.to_string())
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Destination prompt failed: {e}")))
}

fn prompt_language(candidates: &[Language]) -> Result<Language, AppError> {
    let items: Vec<&str> = candidates.iter().map(|lang| lang.display_name()).collect();
    let default = candidates.iter().position(|lang| *lang == Language::TypeScript).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What language would you like to use?")
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| AppError::config_error(format!("Language selection failed: {e}")))?;

    Ok(candidates[selection])
}

fn prompt_template(language: Language) -> Result<String, AppError> {
    let templates = language.templates();
    let default = templates.iter().position(|t| *t == DEFAULT_TEMPLATE).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What template would you like to use?")
        .items(templates)
        .default(default)
        .interact()
        .map_err(|e| AppError::config_error(format!("Template selection failed: {e}")))?;

    Ok(templates[selection].to_string())
}
