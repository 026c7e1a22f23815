//! regiontoc: numbered table of contents for `#region` folding markers.
//!
//! The library scans a document snapshot for language-specific region
//! markers and produces:
//! - a numbered outline (`1. Foo`, `1-1. Bar`, `2. Baz`) for a tree view
//! - the lines of unpaired markers, for a pre-save warning
//!
//! Every call recomputes from the full text; nothing is cached between calls.

pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod markers;
pub mod mismatch;
pub mod outline;
pub mod scanner;
pub mod telemetry;

pub use scanner::Scanner;
