//! Loading dictionaries and the language catalog from disk
//!
//! Expected layout under a base directory:
//!
//! ```text
//! <base>/Languages/languages.json
//! <base>/Languages/<code>/words.json
//! <base>/Languages/<code>/phrases.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::language::{LanguageConfig, LanguagePair};
use crate::term_map::TermMap;

pub const LANGUAGES_DIR: &str = "Languages";
pub const LANGUAGES_CONFIG_FILE: &str = "languages.json";
pub const WORDS_FILE: &str = "words.json";
pub const PHRASES_FILE: &str = "phrases.json";

pub fn language_dir(base_path: &Path, code: &str) -> PathBuf {
    base_path.join(LANGUAGES_DIR).join(code)
}

pub fn languages_config_path(base_path: &Path) -> PathBuf {
    base_path.join(LANGUAGES_DIR).join(LANGUAGES_CONFIG_FILE)
}

/// Load terms from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "hello": "привіт",
///     "good morning": "добрий ранок"
/// }
/// ```
///
/// Entries whose value is not a string are skipped with a warning.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::Parse` if the content is not a JSON object
pub fn load_terms_from_file(path: &Path) -> Result<TermMap> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let obj = json.as_object().ok_or_else(|| Error::Parse {
        path: path.to_path_buf(),
        message: "root must be an object".to_string(),
    })?;

    let mut terms = TermMap::new();
    for (key, value) in obj {
        if let Some(translation) = value.as_str() {
            terms.insert(key, translation);
        } else {
            warn!(
                "Term '{}' in '{}' is not a string, skipping",
                key,
                path.display()
            );
        }
    }

    debug!("Loaded {} terms from '{}'", terms.len(), path.display());
    Ok(terms)
}

/// Like `load_terms_from_file`, but a missing file yields `None`
fn load_optional_terms(path: &Path) -> Result<Option<TermMap>> {
    match load_terms_from_file(path) {
        Ok(terms) => Ok(Some(terms)),
        Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("No dictionary file at '{}'", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load and merge the word and phrase dictionaries for a language pair
///
/// Words are loaded first and phrases second, so a phrase file entry
/// overrides a word file entry with the same key. Either file may be absent.
///
/// # Errors
/// - `Error::NotFound` if `<base>/Languages/<code>` is not a directory
/// - `Error::Io` / `Error::Parse` if a present file cannot be read or parsed
pub fn load_term_map(language_code: &str, base_path: &Path) -> Result<TermMap> {
    let dir = language_dir(base_path, language_code);
    if !dir.is_dir() {
        return Err(Error::NotFound { path: dir });
    }

    let mut terms = TermMap::new();
    for file in [WORDS_FILE, PHRASES_FILE] {
        if let Some(loaded) = load_optional_terms(&dir.join(file))? {
            terms.merge(loaded);
        }
    }

    debug!(
        "Dictionary for '{}' has {} entries",
        language_code,
        terms.len()
    );
    Ok(terms)
}

/// Load the catalog of available language pairs
///
/// # Errors
/// - `Error::NotFound` if `languages.json` does not exist
/// - `Error::Io` / `Error::Parse` if it cannot be read or parsed
pub fn load_language_config(base_path: &Path) -> Result<Vec<LanguagePair>> {
    let path = languages_config_path(base_path);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound { path });
        }
        Err(source) => return Err(Error::Io { path, source }),
    };

    let config: LanguageConfig = serde_json::from_str(&content).map_err(|e| Error::Parse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    if config.available_languages.is_empty() {
        warn!("No language pairs listed in '{}'", path.display());
    }
    Ok(config.available_languages)
}

/// Where the menu gets its language catalog and dictionaries from
pub trait DictionarySource {
    fn load_languages(&self) -> Result<Vec<LanguagePair>>;

    fn load_term_map(&self, language: &LanguagePair) -> Result<TermMap>;
}

/// Dictionaries stored as JSON files under a base directory
#[derive(Debug, Clone)]
pub struct FsDictionary {
    base_path: PathBuf,
}

impl FsDictionary {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        FsDictionary {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl DictionarySource for FsDictionary {
    fn load_languages(&self) -> Result<Vec<LanguagePair>> {
        load_language_config(&self.base_path)
    }

    fn load_term_map(&self, language: &LanguagePair) -> Result<TermMap> {
        load_term_map(&language.code, &self.base_path)
    }
}
