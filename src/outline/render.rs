//! Text and JSON renderings of an outline.

use crate::error::{RegionError, Result};

use super::types::Outline;

/// Render as an indented tree, one region per line.
///
/// Line numbers are shown 1-based for humans:
/// ```text
/// 1. Imports  (line 1)
///   1-1. Std  (line 2)
/// 2. Handlers  (line 9, unterminated)
/// ```
pub fn render_text(outline: &Outline) -> String {
    let mut out = String::new();

    for (depth, region) in outline.walk() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&region.label);
        if let Some(line) = region.start_line {
            if region.is_terminated() {
                out.push_str(&format!("  (line {})", line + 1));
            } else {
                out.push_str(&format!("  (line {}, unterminated)", line + 1));
            }
        }
        out.push('\n');
    }

    out
}

/// Render as pretty-printed JSON (an array of root regions).
pub fn render_json(outline: &Outline) -> Result<String> {
    serde_json::to_string_pretty(outline)
        .map_err(|e| RegionError::Io(format!("failed to serialize outline: {}", e)))
}
