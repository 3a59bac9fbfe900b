use url::Url;

use crate::domain::AppError;

/// Environment variable overriding the template host base URL.
pub const TEMPLATE_HOST_ENV: &str = "CHRONICALS_TEMPLATE_HOST";

/// Template host endpoint configuration.
#[derive(Debug, Clone)]
pub struct TemplateHostConfig {
    /// Base URL of the template hosting service.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TemplateHostConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl TemplateHostConfig {
    /// Build the configuration, honoring the env override when set.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(TEMPLATE_HOST_ENV) {
            Ok(value) => {
                let base_url = Url::parse(&value).map_err(|e| {
                    AppError::config_error(format!("Invalid {TEMPLATE_HOST_ENV} '{value}': {e}"))
                })?;
                Ok(Self { base_url, timeout_secs: default_timeout() })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://templates.chronicals.dev").expect("default template host URL is valid")
}

fn default_timeout() -> u64 {
    30
}
