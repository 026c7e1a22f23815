//! Region marker balance checking.
//!
//! This module implements an independent linear scan over the same marker
//! classification the outline builder uses:
//! - An end marker with nothing open is recorded at its own line
//! - Start markers left open at end of input are recorded according to
//!   [`MismatchPolicy`](crate::config::MismatchPolicy)
//! - Every spurious end is reported, not just the first
//!
//! Unbalanced markers are data, never an error. The host turns a report into
//! a user notification through [`Advisory`].

mod advisory;
mod detector;
mod types;


// Re-export public API
pub use advisory::{Advisory, MISMATCH_MESSAGE};
pub use detector::{detect, find_mismatches};
pub use types::{MismatchKind, MismatchRecord, MismatchReport};
