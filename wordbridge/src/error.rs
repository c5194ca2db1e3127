use std::path::PathBuf;

use thiserror::Error;

/// Error types for dictionary loading and translation
#[derive(Debug, Error)]
pub enum Error {
    /// Input text was empty or consisted only of whitespace
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A language directory or the language catalog could not be located
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// A dictionary file exists but could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A dictionary file is not valid JSON or has the wrong shape
    #[error("Failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl Error {
    /// True when the caller should simply re-prompt for input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Result type for wordbridge operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidArgument("Input cannot be empty or whitespace".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Input cannot be empty or whitespace"
        );

        let err = Error::NotFound {
            path: PathBuf::from("data/Languages/xx-yy"),
        };
        assert_eq!(err.to_string(), "Not found: data/Languages/xx-yy");

        let err = Error::Parse {
            path: PathBuf::from("words.json"),
            message: "root must be an object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse 'words.json': root must be an object"
        );
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(Error::InvalidArgument(String::new()).is_invalid_argument());
        assert!(
            !Error::NotFound {
                path: PathBuf::new()
            }
            .is_invalid_argument()
        );
    }
}
