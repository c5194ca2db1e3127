//! Command line definition and the non-interactive commands

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use tracing::debug;
use wordbridge::{DictionarySource, LanguagePair, TranslationEngine};

pub fn build_command() -> Command {
    Command::new("wordbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dictionary-based translator for word and phrase substitution")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .short('d')
                .help("Directory containing Languages/ (default: $WORDBRIDGE_DATA_DIR or ./data)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("languages").about("List available language pairs"))
        .subcommand(
            Command::new("translate")
                .about("Translate text once and print the result")
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .short('l')
                        .help("Language pair code (e.g., en-uk)")
                        .required(true),
                )
                .arg(
                    Arg::new("text")
                        .help("Text to translate")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true),
                ),
        )
}

/// One line per language pair, numbered from 1
pub fn format_language_list(languages: &[LanguagePair]) -> String {
    languages
        .iter()
        .enumerate()
        .map(|(i, language)| format!("{}. [{}] {}", i + 1, language.code, language))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Translate `words` (joined with spaces) with the dictionary for `code`
///
/// Display metadata comes from the catalog when it lists `code`; a missing
/// catalog does not prevent translation.
pub fn translate_once<S: DictionarySource>(
    source: &S,
    code: &str,
    words: &[String],
) -> wordbridge::Result<String> {
    let language = source
        .load_languages()
        .ok()
        .and_then(|languages| languages.into_iter().find(|l| l.code == code))
        .unwrap_or_else(|| {
            debug!("Language pair '{}' not in catalog", code);
            LanguagePair::new(code, "", "")
        });

    let terms = source.load_term_map(&language)?;
    let engine = TranslationEngine::new(terms, language);
    engine.translate(&words.join(" "))
}
