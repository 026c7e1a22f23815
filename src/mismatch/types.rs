//! Mismatch records and reports.

use serde::Serialize;

/// Why a marker could not be paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// End marker with no open region.
    UnexpectedEnd,
    /// Start marker still open at end of input.
    Unclosed,
}

/// A marker line that could not be paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MismatchRecord {
    /// Zero-based line index of the marker.
    pub line: usize,
    /// What went wrong on that line.
    pub kind: MismatchKind,
}

impl MismatchRecord {
    /// Create a mismatch record.
    pub fn new(line: usize, kind: MismatchKind) -> Self {
        Self { line, kind }
    }
}

/// Result of a balance check.
///
/// Records are ordered: spurious ends in document order, then unclosed
/// starts, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    /// Every mismatch found (empty if balanced).
    pub records: Vec<MismatchRecord>,
}

impl MismatchReport {
    /// Create a balanced (empty) report.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Whether every marker was paired.
    pub fn is_balanced(&self) -> bool {
        self.records.is_empty()
    }

    /// Zero-based line indices of every mismatch, in report order.
    pub fn lines(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.line).collect()
    }

    /// Format the report as a user-friendly error message.
    ///
    /// Line numbers are 1-based:
    /// ```text
    /// Unbalanced region markers
    ///
    /// src/app.ts:14  unexpected end marker
    /// src/app.ts:3  start marker never closed
    /// ```
    pub fn format_error(&self, file_path: &str) -> String {
        if self.is_balanced() {
            return String::new();
        }

        let mut msg = String::from("Unbalanced region markers\n\n");

        for record in &self.records {
            let what = match record.kind {
                MismatchKind::UnexpectedEnd => "unexpected end marker",
                MismatchKind::Unclosed => "start marker never closed",
            };
            msg.push_str(&format!("{}:{}  {}\n", file_path, record.line + 1, what));
        }

        msg
    }
}
