//! Configuration types and defaults for regiontoc.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// How many unclosed start markers the mismatch detector reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Report only the most recently opened, still unclosed start marker.
    #[default]
    Innermost,
    /// Report every unclosed start marker.
    All,
}

/// Start/end regex pair for one language, as written in config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerPatterns {
    /// Regex matching a region opener. May carry `name`/`nameAlt` groups.
    pub start: String,
    /// Regex matching a region closer.
    pub end: String,
}

impl MarkerPatterns {
    /// Create a pattern pair.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Placeholder labels used when a region has no usable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Label for a start marker whose name groups are all empty.
    #[serde(default = "default_unnamed_label")]
    pub unnamed: String,

    /// Label of the single node shown when a document has no regions.
    #[serde(default = "default_empty_label")]
    pub empty: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            unnamed: default_unnamed_label(),
            empty: default_empty_label(),
        }
    }
}

pub(crate) fn default_unnamed_label() -> String {
    "# region".to_string()
}
pub(crate) fn default_empty_label() -> String {
    "No regions detected".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
pub(crate) fn default_log_filter() -> String {
    "warn".to_string()
}
