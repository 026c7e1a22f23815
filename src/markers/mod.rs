//! Region marker matching.
//!
//! A language's region markers are a pair of line regexes: one for the
//! opener, one for the closer. This module provides:
//! - The built-in language table and its merge with config overrides
//! - Per-line classification (start / end / neither)
//! - Name extraction from the opener's named capture groups
//!
//! Error handling:
//! - Invalid regex patterns are config errors raised when the table is built,
//!   never during a scan
//! - An unknown language is not an error; lookups simply return `None`

mod builtin;
mod matcher;
mod table;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builtin::builtin_patterns;
pub use matcher::{LineClass, NAME_GROUPS, RegionName, classify, extract_name};
pub use table::{MarkerSpec, MarkerTable};
