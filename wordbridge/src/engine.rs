//! Dictionary-driven translation engine
//!
//! Translation happens in two passes over the input:
//!
//! 1. **Phrase pass** - every multi-word key is replaced wherever it occurs,
//!    longest key first, ignoring case. Matching is plain substring matching,
//!    so a phrase can also match inside a longer word.
//! 2. **Word pass** - the result is split on whitespace and each token is
//!    looked up with its trailing punctuation removed. Unknown tokens are kept
//!    as they are.
//!
//! Finally the first character of the sentence is uppercased.
//!
//! # Example
//!
//! ```
//! use wordbridge::{LanguagePair, TermMap, TranslationEngine};
//!
//! let terms: TermMap = [("hello", "привіт"), ("good morning", "добрий ранок")]
//!     .into_iter()
//!     .collect();
//! let engine = TranslationEngine::new(terms, LanguagePair::new("en-uk", "English", "Ukrainian"));
//!
//! assert_eq!(engine.translate("hello world!").unwrap(), "Привіт world!");
//! assert_eq!(engine.translate("Good morning").unwrap(), "Добрий ранок");
//! ```

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::Result;
use crate::language::LanguagePair;
use crate::term_map::TermMap;
use crate::text::{normalize_input, split_word_from_punctuation, uppercase_first};

/// A multi-word key with its precompiled matcher
#[derive(Debug)]
struct PhraseRule {
    pattern: Regex,
    replacement: String,
}

/// Translates text with a fixed dictionary for one language pair
///
/// The engine owns its term map and never mutates it, so a single instance
/// can be shared between threads.
#[derive(Debug)]
pub struct TranslationEngine {
    terms: TermMap,
    language: LanguagePair,
    phrases: Vec<PhraseRule>,
}

impl TranslationEngine {
    pub fn new(terms: TermMap, language: LanguagePair) -> Self {
        let phrases = compile_phrases(&terms);
        debug!(
            "Translation engine ready for '{}': {} terms, {} phrases",
            language.code,
            terms.len(),
            phrases.len()
        );
        TranslationEngine {
            terms,
            language,
            phrases,
        }
    }

    /// The language pair this engine translates
    pub fn current_language(&self) -> &LanguagePair {
        &self.language
    }

    /// Translate a line of text
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `input` is empty or whitespace only.
    pub fn translate(&self, input: &str) -> Result<String> {
        let input = normalize_input(input)?;

        let mut working = input.to_string();
        for phrase in &self.phrases {
            if phrase.pattern.is_match(&working) {
                working = phrase
                    .pattern
                    .replace_all(&working, NoExpand(&phrase.replacement))
                    .into_owned();
            }
        }

        let translated: Vec<String> = working
            .split_whitespace()
            .map(|token| self.translate_token(token))
            .collect();

        Ok(uppercase_first(translated.join(" ").trim()))
    }

    fn translate_token(&self, token: &str) -> String {
        let (word, punctuation) = split_word_from_punctuation(token);
        if word.is_empty() {
            return token.to_string();
        }
        match self.terms.get(word) {
            Some(translation) => format!("{}{}", translation, punctuation),
            None => token.to_string(),
        }
    }
}

/// Build matchers for every phrase key, longest first
///
/// Matchers are built from the key as written, since lowercasing can change
/// a key into a form that case-insensitive matching no longer maps back
/// (e.g. "İ"). Length is counted in characters. Equal lengths are ordered by
/// key so the replacement order does not depend on hash map iteration.
fn compile_phrases(terms: &TermMap) -> Vec<PhraseRule> {
    let mut phrases: Vec<(&str, &str)> = terms.phrases().collect();
    phrases.sort_by(|(a, _), (b, _)| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    phrases
        .into_iter()
        .filter_map(|(key, value)| {
            match RegexBuilder::new(&regex::escape(key))
                .case_insensitive(true)
                .build()
            {
                Ok(pattern) => Some(PhraseRule {
                    pattern,
                    replacement: value.to_string(),
                }),
                Err(e) => {
                    warn!("Skipping phrase '{}': {}", key, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn engine(entries: &[(&str, &str)]) -> TranslationEngine {
        let terms: TermMap = entries.iter().copied().collect();
        TranslationEngine::new(terms, LanguagePair::new("en-uk", "English", "Ukrainian"))
    }

    #[test]
    fn test_known_word() {
        let engine = engine(&[("hello", "hi")]);
        assert_eq!(engine.translate("hello").unwrap(), "Hi");
    }

    #[test]
    fn test_value_is_verbatim_except_first_char() {
        let engine = engine(&[("nasa", "nASA agency")]);
        assert_eq!(engine.translate("nasa").unwrap(), "NASA agency");
    }

    #[test]
    fn test_unknown_word_passes_through() {
        let engine = engine(&[("hello", "hi")]);
        assert_eq!(engine.translate("unknownword").unwrap(), "Unknownword");
        assert_eq!(engine.translate("wHAT?!").unwrap(), "WHAT?!");
    }

    #[test]
    fn test_trailing_punctuation_is_kept() {
        let engine = engine(&[("hello", "hi")]);
        assert_eq!(engine.translate("hello!").unwrap(), "Hi!");
        assert_eq!(engine.translate("hello...").unwrap(), "Hi...");
    }

    #[test]
    fn test_phrase_beats_single_words() {
        let engine = engine(&[("good morning", "добрий ранок"), ("morning", "ранок")]);
        assert_eq!(engine.translate("good morning").unwrap(), "Добрий ранок");
    }

    #[test]
    fn test_longest_phrase_first() {
        let engine = engine(&[
            ("thank you", "дякую"),
            ("thank you very much", "щиро дякую"),
        ]);
        assert_eq!(
            engine.translate("thank you very much").unwrap(),
            "Щиро дякую"
        );
        assert_eq!(engine.translate("thank you").unwrap(), "Дякую");
    }

    #[test]
    fn test_phrase_is_case_insensitive() {
        let engine = engine(&[("good morning", "добрий ранок")]);
        assert_eq!(engine.translate("GOOD Morning!").unwrap(), "Добрий ранок!");
    }

    #[test]
    fn test_phrase_replaces_every_occurrence() {
        let engine = engine(&[("good night", "на добраніч")]);
        assert_eq!(
            engine.translate("good night and good night").unwrap(),
            "На добраніч and на добраніч"
        );
    }

    #[test]
    fn test_phrase_matches_inside_larger_words() {
        let engine = engine(&[("a b", "X")]);
        assert_eq!(engine.translate("aa bb").unwrap(), "AXb");
    }

    #[test]
    fn test_phrase_with_special_casing_key() {
        let engine = engine(&[
            ("İstanbul airport", "Стамбульський аеропорт"),
            ("İstanbul", "Стамбул"),
        ]);
        assert_eq!(
            engine.translate("İstanbul airport").unwrap(),
            "Стамбульський аеропорт"
        );
        assert_eq!(engine.translate("İstanbul!").unwrap(), "Стамбул!");
    }

    #[test]
    fn test_replacement_is_literal() {
        let engine = engine(&[("big money", "$1 $$ ${x}")]);
        assert_eq!(engine.translate("big money").unwrap(), "$1 $$ ${x}");
    }

    #[test]
    fn test_mixed_known_and_unknown() {
        let engine = engine(&[("hello", "привіт")]);
        assert_eq!(engine.translate("hello world").unwrap(), "Привіт world");
        assert_eq!(engine.translate("world hello").unwrap(), "World привіт");
    }

    #[test]
    fn test_case_insensitive_word_lookup() {
        let engine = engine(&[("hello", "hi")]);
        assert_eq!(engine.translate("HELLO").unwrap(), "Hi");
        assert_eq!(engine.translate("HeLLo, there").unwrap(), "Hi, there");
    }

    #[test]
    fn test_whitespace_is_collapsed_between_tokens() {
        let engine = engine(&[("hello", "привіт"), ("world", "світ")]);
        assert_eq!(
            engine.translate("  hello \t  world  ").unwrap(),
            "Привіт світ"
        );
    }

    #[test]
    fn test_punctuation_only_token() {
        let engine = engine(&[("hello", "hi")]);
        assert_eq!(engine.translate("hello - hello").unwrap(), "Hi - hi");
        assert_eq!(engine.translate("?!").unwrap(), "?!");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let engine = engine(&[("hello", "hi")]);
        assert!(matches!(engine.translate(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            engine.translate("   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let engine = engine(&[("good morning", "добрий ранок"), ("hello", "привіт")]);
        let first = engine.translate("hello, good morning").unwrap();
        let second = engine.translate("hello, good morning").unwrap();
        assert_eq!(first, "Привіт, добрий ранок");
        assert_eq!(first, second);
    }

    #[test]
    fn test_current_language() {
        let engine = engine(&[]);
        assert_eq!(engine.current_language().code, "en-uk");
        assert_eq!(engine.current_language().target_language, "Ukrainian");
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationEngine>();

        let engine = std::sync::Arc::new(engine(&[("hello", "hi")]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.translate("hello!").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Hi!");
        }
    }
}
