use std::fmt;

/// Output-language flavors a generated Chronicals app can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
}

/// Templates offered for every language.
///
/// Both languages currently ship the same catalog, but membership is always
/// checked per language so the sets can diverge.
const COMMON_TEMPLATES: [&str; 8] = [
    "basic",
    "account-migration",
    "github-issue-editor",
    "metrics-notifier",
    "refund-charges",
    "user-settings",
    "web-screenshot-comparison",
    "qr-codes",
];

impl Language {
    /// All supported languages in prompt order.
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    /// Canonical identifier used in flags and template paths.
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    /// Parse a language from its canonical id or shorthand alias.
    pub fn parse(value: &str) -> Option<Language> {
        match value.to_lowercase().as_str() {
            "javascript" | "js" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    /// Templates registered for this language.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &COMMON_TEMPLATES,
            Language::TypeScript => &COMMON_TEMPLATES,
        }
    }

    /// Whether this language offers the named template.
    pub fn offers_template(&self, template: &str) -> bool {
        self.templates().contains(&template)
    }

    /// Languages whose template set contains the given template, or all
    /// languages when no template was specified.
    pub fn candidates_for(template: Option<&str>) -> Vec<Language> {
        match template {
            Some(name) => {
                Language::ALL.into_iter().filter(|lang| lang.offers_template(name)).collect()
            }
            None => Language::ALL.to_vec(),
        }
    }
}

/// Union of every language's template set, for flag validation.
pub fn all_templates() -> Vec<&'static str> {
    let mut templates: Vec<&'static str> = Vec::new();
    for language in Language::ALL {
        for template in language.templates() {
            if !templates.contains(template) {
                templates.push(template);
            }
        }
    }
    templates
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
