//! Single-pass marker balance detector.

use crate::config::MismatchPolicy;
use crate::markers::{LineClass, MarkerSpec, classify};
use tracing::debug;

use super::types::{MismatchKind, MismatchRecord, MismatchReport};

/// Check that every start marker has a matching end marker.
///
/// Only start-line indices are kept on the stack; no regions are built.
/// `spec` is `None` for an unsupported language, which counts as balanced.
///
/// With [`MismatchPolicy::Innermost`] a document with several unclosed
/// starts yields a single record, for the last one opened.
pub fn detect(
    lines: &[&str],
    spec: Option<&MarkerSpec>,
    policy: MismatchPolicy,
) -> MismatchReport {
    let Some(spec) = spec else {
        return MismatchReport::pass();
    };

    let mut records = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match classify(line, spec) {
            LineClass::Start(_) => open.push(index),
            LineClass::End => {
                if open.pop().is_none() {
                    records.push(MismatchRecord::new(index, MismatchKind::UnexpectedEnd));
                }
            }
            LineClass::Plain => {}
        }
    }

    let unclosed = open
        .iter()
        .rev()
        .map(|&line| MismatchRecord::new(line, MismatchKind::Unclosed));
    match policy {
        MismatchPolicy::Innermost => records.extend(unclosed.take(1)),
        MismatchPolicy::All => records.extend(unclosed),
    }

    debug!(
        mismatches = records.len(),
        still_open = open.len(),
        "checked region marker balance"
    );

    MismatchReport { records }
}

/// Line indices of unpaired markers, reporting only the innermost unclosed
/// start.
///
/// # Example
///
/// ```
/// use regiontoc::markers::MarkerTable;
/// use regiontoc::mismatch::find_mismatches;
///
/// let table = MarkerTable::builtin().unwrap();
/// let lines = ["// #endregion", "// #region A", "// #region B"];
///
/// assert_eq!(find_mismatches(&lines, table.resolve("javascript")), vec![0, 2]);
/// ```
pub fn find_mismatches(lines: &[&str], spec: Option<&MarkerSpec>) -> Vec<usize> {
    detect(lines, spec, MismatchPolicy::Innermost).lines()
}
