//! Template host client implementation using reqwest.

use std::fs;
use std::path::{Component, Path};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Language, TemplateHostConfig};
use crate::ports::{FetchOptions, TemplateSource};

/// HTTP transport for the Chronicals template host.
///
/// Templates are addressed as `{base}/{language}/{template}/`; the host
/// serves a `manifest.json` listing relative file paths, each fetchable under
/// the same prefix.
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    base_url: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TemplateManifest {
    files: Vec<String>,
}

impl HttpTemplateSource {
    /// Create a new client for the given host configuration.
    pub fn new(config: &TemplateHostConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::fetch_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    /// Create from the environment, falling back to the default host.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&TemplateHostConfig::from_env()?)
    }

    fn resource_url(&self, language: Language, template: &str, file: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::fetch_error(format!("Template host URL '{}' cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.push(language.id());
            segments.push(template);
            for part in file.split('/') {
                segments.push(part);
            }
        }
        Ok(url)
    }

    fn get_bytes(&self, url: Url, what: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::fetch_error(format!("could not fetch {what}: {e}")))?;

        match response.status() {
            StatusCode::OK => {
                let bytes = response
                    .bytes()
                    .map_err(|e| AppError::fetch_error(format!("could not read {what}: {e}")))?;
                Ok(bytes.to_vec())
            }
            StatusCode::NOT_FOUND => {
                Err(AppError::fetch_error(format!("{what} not found on template host")))
            }
            status => Err(AppError::fetch_error(format!(
                "template host returned {status} for {what}"
            ))),
        }
    }

    fn fetch_manifest(&self, language: Language, template: &str) -> Result<TemplateManifest, AppError> {
        let url = self.resource_url(language, template, "manifest.json")?;
        let what = format!("template '{}/{}'", template, language.id());
        let bytes = self.get_bytes(url, &what)?;

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::fetch_error(format!("malformed manifest for {what}: {e}")))
    }

    fn ensure_destination(&self, destination: &Path, options: &FetchOptions) -> Result<(), AppError> {
        if destination.exists() {
            let mut entries = fs::read_dir(destination)?;
            if entries.next().is_some() && !options.force {
                return Err(AppError::fetch_error(format!(
                    "destination directory '{}' is not empty, use options.force to overwrite",
                    destination.display()
                )));
            }
        } else {
            fs::create_dir_all(destination)?;
        }
        Ok(())
    }
}

/// Relative manifest entries must stay inside the destination.
fn is_safe_relative(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}

impl TemplateSource for HttpTemplateSource {
    fn fetch(
        &self,
        language: Language,
        template: &str,
        destination: &Path,
        options: &FetchOptions,
    ) -> Result<(), AppError> {
        self.ensure_destination(destination, options)?;

        let manifest = self.fetch_manifest(language, template)?;

        for file in &manifest.files {
            if !is_safe_relative(file) {
                return Err(AppError::fetch_error(format!(
                    "manifest entry '{file}' escapes the destination"
                )));
            }

            let url = self.resource_url(language, template, file)?;
            let bytes = self.get_bytes(url, &format!("template file '{file}'"))?;

            let target = destination.join(file);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, bytes)?;

            if options.verbose {
                println!("  fetched {file}");
            }
        }

        Ok(())
    }
}
