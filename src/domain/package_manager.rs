use std::fmt;

use crate::domain::Language;

/// Package managers considered for dependency installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name on the host.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments for the install command.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--no-fund"],
            PackageManager::Yarn => &["install"],
        }
    }

    /// Commands the user runs to start the generated app.
    pub fn start_commands(&self, language: Language) -> Vec<&'static str> {
        match (language, self) {
            (Language::JavaScript, PackageManager::Npm) => vec!["npm start"],
            (Language::JavaScript, PackageManager::Yarn) => vec!["yarn start"],
            (Language::TypeScript, PackageManager::Npm) => vec!["npm run dev"],
            (Language::TypeScript, PackageManager::Yarn) => vec!["yarn dev"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable())
    }
}
