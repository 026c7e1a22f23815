//! Document snapshots and language detection.
//!
//! A scan always works on a full snapshot of the text: there is no
//! incremental state. The host usually knows the language id already; the
//! CLI derives it from the file path instead.

mod language;


pub use language::LanguageDetector;

use crate::error::{RegionError, Result};
use std::path::Path;

/// Split text into lines on `\n` or `\r\n`.
///
/// Line endings are dropped. A trailing newline yields a final empty line,
/// so line indices match editor line numbers (zero-based).
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A document snapshot paired with its language id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Full text at the time of the snapshot.
    pub text: String,
    /// Language id used to pick marker patterns.
    pub language_id: String,
}

impl Document {
    /// Read a file and detect its language.
    ///
    /// `language_override` wins over detection. When neither yields a
    /// language, the id is empty, which no marker table supports.
    pub fn read(
        path: &Path,
        detector: &LanguageDetector,
        language_override: Option<&str>,
    ) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RegionError::Io(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let language_id = match language_override {
            Some(id) => id.to_string(),
            None => detector.detect(path).unwrap_or_default(),
        };

        Ok(Self { text, language_id })
    }
}
