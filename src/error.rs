//! Error types for regiontoc.
//!
//! Scanning itself never fails: unsupported languages and unbalanced markers
//! are data, not errors. These variants cover the outer layers (configuration
//! loading, file access, CLI lookups) and carry user-actionable messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for regiontoc operations.
#[derive(Error, Debug)]
pub enum RegionError {
    /// Configuration could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),

    /// A document could not be read.
    #[error("{0}")]
    Io(String),

    /// No marker patterns exist for the requested language.
    #[error("no region markers configured for language '{0}'")]
    UnsupportedLanguage(String),

    /// A region number could not be parsed.
    #[error("invalid region number '{0}': expected numbers joined by '-', like 1-2")]
    InvalidRegionPath(String),

    /// No region carries the requested number.
    #[error("no region numbered '{0}'")]
    RegionNotFound(String),

    /// `check` found unbalanced markers.
    #[error("unbalanced region markers: {0}")]
    Mismatch(String),
}

impl RegionError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RegionError::Config(_) => exit_codes::USER_ERROR,
            RegionError::Io(_) => exit_codes::USER_ERROR,
            RegionError::UnsupportedLanguage(_) => exit_codes::USER_ERROR,
            RegionError::InvalidRegionPath(_) => exit_codes::USER_ERROR,
            RegionError::RegionNotFound(_) => exit_codes::USER_ERROR,
            RegionError::Mismatch(_) => exit_codes::MISMATCH,
        }
    }
}

/// Result type alias for regiontoc operations.
pub type Result<T> = std::result::Result<T, RegionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = RegionError::Config("bad pattern".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = RegionError::Io("missing file".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn mismatch_error_has_correct_exit_code() {
        let err = RegionError::Mismatch("line 3".to_string());
        assert_eq!(err.exit_code(), exit_codes::MISMATCH);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = RegionError::UnsupportedLanguage("cobol".to_string());
        assert_eq!(
            err.to_string(),
            "no region markers configured for language 'cobol'"
        );

        let err = RegionError::RegionNotFound("2-1".to_string());
        assert_eq!(err.to_string(), "no region numbered '2-1'");
    }
}
