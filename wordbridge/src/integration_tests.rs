//! End-to-end tests: dictionaries on disk through to translated text

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Error;
use crate::loader::{
    DictionarySource, FsDictionary, PHRASES_FILE, WORDS_FILE, language_dir,
    languages_config_path, load_language_config, load_term_map,
};
use crate::{LanguagePair, TranslationEngine};

fn fixture() -> (TempDir, TranslationEngine) {
    let tmp = TempDir::new().unwrap();
    let dir = language_dir(tmp.path(), "en-uk");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(WORDS_FILE),
        r#"{"hello": "привіт", "world": "світ", "morning": "ранок"}"#,
    )
    .unwrap();
    fs::write(dir.join(PHRASES_FILE), r#"{"good morning": "добрий ранок"}"#).unwrap();

    let language = LanguagePair::new("en-uk", "English", "Ukrainian");
    let terms = load_term_map(&language.code, tmp.path()).unwrap();
    (tmp, TranslationEngine::new(terms, language))
}

fn sample_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("data")
}

#[test]
fn test_translate_simple_word() {
    let (_tmp, engine) = fixture();
    assert_eq!(engine.translate("hello").unwrap(), "Привіт");
}

#[test]
fn test_translate_phrase() {
    let (_tmp, engine) = fixture();
    assert_eq!(engine.translate("good morning").unwrap(), "Добрий ранок");
}

#[test]
fn test_translate_unknown_word() {
    let (_tmp, engine) = fixture();
    assert_eq!(engine.translate("unknownword").unwrap(), "Unknownword");
}

#[test]
fn test_translate_text_with_punctuation() {
    let (_tmp, engine) = fixture();
    assert_eq!(engine.translate("hello, world!").unwrap(), "Привіт, світ!");
}

#[test]
fn test_translate_text_with_capitalization() {
    let (_tmp, engine) = fixture();
    assert_eq!(engine.translate("Hello world").unwrap(), "Привіт світ");
}

#[test]
fn test_translate_blank_input() {
    let (_tmp, engine) = fixture();
    for input in ["", "   ", "\n"] {
        assert!(matches!(
            engine.translate(input),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_missing_language_directory() {
    let tmp = TempDir::new().unwrap();
    let source = FsDictionary::new(tmp.path());
    let language = LanguagePair::new("xx-yy", "Nowhere", "Nothing");
    assert!(matches!(
        source.load_term_map(&language),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_catalog_without_dictionaries() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(languages_config_path(tmp.path()).parent().unwrap()).unwrap();
    fs::write(
        languages_config_path(tmp.path()),
        r#"{"AvailableLanguages": [{"Code": "en-uk"}]}"#,
    )
    .unwrap();

    let source = FsDictionary::new(tmp.path());
    let languages = source.load_languages().unwrap();
    assert!(matches!(
        source.load_term_map(&languages[0]),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_sample_data_round_trip() {
    let base = sample_data();
    let languages = load_language_config(&base).unwrap();
    assert!(languages.iter().any(|l| l.code == "en-uk"));
    assert!(languages.iter().any(|l| l.code == "uk-en"));

    for language in languages {
        let terms = load_term_map(&language.code, &base).unwrap();
        assert!(!terms.is_empty(), "{} has no terms", language.code);
    }
}

#[test]
fn test_sample_data_english_to_ukrainian() {
    let base = sample_data();
    let language = LanguagePair::new("en-uk", "English", "Ukrainian");
    let engine = TranslationEngine::new(load_term_map("en-uk", &base).unwrap(), language);

    assert_eq!(
        engine.translate("Good morning, my friend!").unwrap(),
        "Добрий ранок, мій друг!"
    );
    assert_eq!(
        engine.translate("thank you very much").unwrap(),
        "Щиро дякую"
    );
    assert_eq!(engine.translate("I love Kyiv.").unwrap(), "Я люблю Київ.");
}

#[test]
fn test_sample_data_ukrainian_to_english() {
    let base = sample_data();
    let language = LanguagePair::new("uk-en", "Ukrainian", "English");
    let engine = TranslationEngine::new(load_term_map("uk-en", &base).unwrap(), language);

    assert_eq!(engine.translate("Привіт, світ!").unwrap(), "Hello, world!");
    assert_eq!(engine.translate("ДОБРИЙ РАНОК").unwrap(), "Good morning");
    assert_eq!(engine.translate("я люблю Київ").unwrap(), "I love Kyiv");
}
