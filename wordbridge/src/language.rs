use std::fmt;

use serde::{Deserialize, Serialize};

/// A source/target language combination and its display metadata
///
/// `code` names the dictionary directory for the pair, e.g. `en-uk`. The
/// remaining fields are only used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguagePair {
    pub code: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
    #[serde(default)]
    pub source_flag: String,
    #[serde(default)]
    pub target_flag: String,
}

impl LanguagePair {
    pub fn new(code: &str, source_language: &str, target_language: &str) -> Self {
        LanguagePair {
            code: code.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, source_flag: &str, target_flag: &str) -> Self {
        self.source_flag = source_flag.to_string();
        self.target_flag = target_flag.to_string();
        self
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} → {} {}",
            self.source_flag, self.source_language, self.target_flag, self.target_language
        )
    }
}

/// The catalog of language pairs offered for selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageConfig {
    #[serde(default)]
    pub available_languages: Vec<LanguagePair>,
}
