//! Dictionary-driven text translation
//!
//! `wordbridge` translates text between a pair of languages by substituting
//! dictionary terms: multi-word phrases first (longest match wins), then single
//! words. Unknown words, trailing punctuation and word order are preserved and
//! the first letter of the result is capitalized.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wordbridge::{TranslationEngine, load_language_config, load_term_map};
//!
//! fn main() -> wordbridge::Result<()> {
//!     let base = Path::new("data");
//!     let languages = load_language_config(base)?;
//!     let language = languages[0].clone();
//!     let terms = load_term_map(&language.code, base)?;
//!
//!     let engine = TranslationEngine::new(terms, language);
//!     println!("{}", engine.translate("good morning, world!")?);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod loader;
pub mod term_map;
pub mod text;

#[cfg(test)]
mod integration_tests;

pub use engine::TranslationEngine;
pub use error::{Error, Result};
pub use language::{LanguageConfig, LanguagePair};
pub use loader::{DictionarySource, FsDictionary, load_language_config, load_term_map};
pub use term_map::TermMap;
