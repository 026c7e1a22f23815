//! Region outline construction.
//!
//! A single forward pass over the document lines turns start/end markers
//! into an ordered forest of numbered regions:
//! - Root regions are numbered `1.`, `2.`, ... in document order
//! - Nested regions extend their parent's number: `1-1.`, `1-2.`, `1-2-1.`
//! - Stray end markers are ignored; unterminated regions are kept
//! - An empty result is replaced by a single placeholder node
//!
//! Balance reporting lives in [`crate::mismatch`].

mod builder;
mod path;
mod render;
mod types;


// Re-export public API
pub use builder::build;
pub use path::RegionPath;
pub use render::{render_json, render_text};
pub use types::{Outline, Region, Walk};
