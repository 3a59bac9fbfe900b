//! Personal Development API key validation and `.env` rendering.

/// Name of the environment file written at the destination root.
pub const ENV_FILE: &str = ".env";

/// Environment variable persisted for the generated app.
pub const ENV_KEY: &str = "CHRONICALS_KEY";

/// Marker distinguishing development keys from Live mode keys.
const DEV_MARKER: &str = "_dev_";

/// Whether the key may be persisted. Empty keys are always accepted; a
/// non-empty key must carry the development marker so Live mode secrets never
/// end up in a scaffolded project.
pub fn is_development_key(key: &str) -> bool {
    key.is_empty() || key.contains(DEV_MARKER)
}

/// Render the single `KEY=value` line stored in the environment file.
pub fn render_env_line(key: &str) -> String {
    format!("{ENV_KEY}={key}")
}
