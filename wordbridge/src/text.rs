//! Text processing helpers
//!
//! Stateless utilities shared by the translation engine: input validation,
//! capitalization and splitting a token from its trailing punctuation.

use crate::error::{Error, Result};

/// Validate and trim raw user input
///
/// Leading and trailing whitespace is removed. Internal whitespace is left
/// untouched.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if the input is empty or whitespace only.
///
/// # Example
///
/// ```
/// use wordbridge::text::normalize_input;
///
/// assert_eq!(normalize_input("  hello  ").unwrap(), "hello");
/// assert!(normalize_input("   ").is_err());
/// ```
pub fn normalize_input(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "Input cannot be empty or whitespace".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Uppercase the first character and lowercase the rest
///
/// ```
/// use wordbridge::text::capitalize_first;
///
/// assert_eq!(capitalize_first("hELLO"), "Hello");
/// ```
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leaving the rest verbatim
///
/// Used for sentence-level capitalization, where the casing of dictionary
/// values after the first character must survive.
pub fn uppercase_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a token into its word part and trailing punctuation
///
/// The word part ends at the last letter or digit (Unicode aware). Everything
/// after it is punctuation. A token without any letter or digit is returned
/// entirely as punctuation.
///
/// # Example
///
/// ```
/// use wordbridge::text::split_word_from_punctuation;
///
/// assert_eq!(split_word_from_punctuation("hello!"), ("hello", "!"));
/// assert_eq!(split_word_from_punctuation("?!"), ("", "?!"));
/// ```
pub fn split_word_from_punctuation(token: &str) -> (&str, &str) {
    match token.char_indices().rev().find(|(_, c)| c.is_alphanumeric()) {
        Some((idx, c)) => token.split_at(idx + c.len_utf8()),
        None => ("", token),
    }
}
