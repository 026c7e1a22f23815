//! Host-facing notification for unbalanced markers.

use super::types::MismatchReport;

/// Warning text shown when markers are unbalanced.
pub const MISMATCH_MESSAGE: &str = "Region start and end markers do not match.";

/// What the host should tell the user after a balance check, typically
/// right before saving. It never blocks the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Notification text.
    pub message: String,
    /// First offending line (zero-based).
    pub line: usize,
    /// Line to jump to, set only when `reveal_on_mismatch` is enabled.
    pub reveal_line: Option<usize>,
}

impl Advisory {
    /// Build the advisory for a report; `None` when the markers balance.
    ///
    /// `reveal_on_mismatch` mirrors the config knob of the same name.
    pub fn from_report(report: &MismatchReport, reveal_on_mismatch: bool) -> Option<Self> {
        let first = report.records.first()?;

        Some(Self {
            message: MISMATCH_MESSAGE.to_string(),
            line: first.line,
            reveal_line: reveal_on_mismatch.then_some(first.line),
        })
    }
}
