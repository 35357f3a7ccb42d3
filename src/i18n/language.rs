use serde::{Deserialize, Serialize};
use std::fmt;

/// The languages the site is translated into.
///
/// `En` is the primary language and the default for a fresh context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Language; 2] = [Language::En, Language::Pl];

    /// The short language code used as the catalog name.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }

    /// The other supported language.
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Pl,
            Language::Pl => Language::En,
        }
    }

    /// Parses a language code, ignoring case and any region suffix (`pl-PL`, `en_US`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Language::En),
            "pl" => Some(Language::Pl),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
