pub mod config;
pub mod credential;
pub mod error;
pub mod language;
pub mod package_manager;
pub mod project;

pub use config::{TEMPLATE_HOST_ENV, TemplateHostConfig};
pub use error::AppError;
pub use language::{Language, all_templates};
pub use package_manager::PackageManager;
pub use project::ProjectConfig;
