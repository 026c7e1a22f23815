//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for regiontoc.
///
/// This struct represents the contents of `.regiontoc.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Marker settings
    // =========================================================================
    /// Extra or overriding marker patterns, keyed by language id.
    ///
    /// Entries are merged over the built-in table; a key that already exists
    /// replaces the built-in patterns for that language.
    #[serde(default)]
    pub markers: BTreeMap<String, MarkerPatterns>,

    /// Glob pattern to language id, consulted before built-in extensions.
    #[serde(default)]
    pub language_globs: BTreeMap<String, String>,

    /// Placeholder labels.
    #[serde(default)]
    pub labels: Labels,

    // =========================================================================
    // Mismatch settings
    // =========================================================================
    /// Which unclosed start markers to report.
    #[serde(default)]
    pub mismatch_policy: MismatchPolicy,

    /// Whether a detected mismatch should also jump to the offending line.
    #[serde(default = "default_true")]
    pub reveal_on_mismatch: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Default tracing filter when neither `REGIONTOC_LOG` nor `-v` is given.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: BTreeMap::new(),
            language_globs: BTreeMap::new(),
            labels: Labels::default(),
            mismatch_policy: MismatchPolicy::default(),
            reveal_on_mismatch: default_true(),
            log_filter: default_log_filter(),
        }
    }
}
