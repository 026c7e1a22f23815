//! Built-in marker patterns.

use crate::config::MarkerPatterns;

const SLASH_START: &str = r"^\s*//\s*#?region(?-u:\b)(?<name>.*)";
const SLASH_END: &str = r"^\s*//\s*#?endregion(?-u:\b)";

const BLOCK_START: &str = r"^\s*/\*\s*#region(?-u:\b)(?<name>.*)\s*\*/";
const BLOCK_END: &str = r"^\s*/\*\s*#endregion(?-u:\b).*\*/";

/// Marker patterns shipped with regiontoc, keyed by language id.
pub fn builtin_patterns() -> Vec<(&'static str, MarkerPatterns)> {
    vec![
        ("javascript", MarkerPatterns::new(SLASH_START, SLASH_END)),
        ("typescript", MarkerPatterns::new(SLASH_START, SLASH_END)),
        (
            "html",
            MarkerPatterns::new(
                r"^\s*<!--\s*#region(?-u:\b)(?<name>.*)-->",
                r"^\s*<!--\s*#endregion(?-u:\b).*-->",
            ),
        ),
        ("scss", MarkerPatterns::new(BLOCK_START, BLOCK_END)),
        ("css", MarkerPatterns::new(BLOCK_START, BLOCK_END)),
        (
            "markdown",
            MarkerPatterns::new(
                r"^\s*<!--\s*#?region(?-u:\b)(?<name>.*)-->",
                r"^\s*<!--\s*#?endregion(?-u:\b).*-->",
            ),
        ),
        (
            "php",
            MarkerPatterns::new(
                r"^\s*(#|//)region(?-u:\b)(?<name>.*)",
                r"^\s*(#|//)endregion(?-u:\b)",
            ),
        ),
    ]
}
