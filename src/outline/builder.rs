//! Single-pass outline builder.

use crate::config::Labels;
use crate::markers::{LineClass, MarkerSpec, classify};
use tracing::debug;

use super::path::RegionPath;
use super::types::{Outline, Region};

/// A region still waiting for its end marker.
struct Frame {
    region: Region,
    children_numbered: usize,
}

/// Build the numbered outline for a document's lines.
///
/// `spec` is `None` for an unsupported language, which yields the
/// placeholder outline. The build never fails:
/// - end markers with nothing open are skipped
/// - regions still open at the end are kept, nested as they were opened,
///   with the outermost one promoted to a root
///
/// # Example
///
/// ```
/// use regiontoc::config::Labels;
/// use regiontoc::markers::MarkerTable;
/// use regiontoc::outline::build;
///
/// let table = MarkerTable::builtin().unwrap();
/// let lines = ["// #region A", "// #region B", "// #endregion", "// #endregion"];
/// let outline = build(&lines, table.resolve("javascript"), &Labels::default());
///
/// assert_eq!(outline.roots()[0].label, "1. A");
/// assert_eq!(outline.roots()[0].children[0].label, "1-1. B");
/// ```
pub fn build(lines: &[&str], spec: Option<&MarkerSpec>, labels: &Labels) -> Outline {
    let Some(spec) = spec else {
        return Outline::new(Vec::new(), &labels.empty);
    };

    let mut forest: Vec<Region> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut roots_numbered = 0;
    let mut starts_seen = 0;

    for (index, line) in lines.iter().enumerate() {
        match classify(line, spec) {
            LineClass::Start(name) => {
                starts_seen += 1;
                let path = match stack.last_mut() {
                    Some(parent) => {
                        parent.children_numbered += 1;
                        parent.region.path.child(parent.children_numbered)
                    }
                    None => {
                        roots_numbered += 1;
                        RegionPath::root(roots_numbered)
                    }
                };
                let name = name.resolve(labels, starts_seen);
                stack.push(Frame {
                    region: Region::new(path, name, index),
                    children_numbered: 0,
                });
            }
            LineClass::End => {
                // Stray end markers are reported by the mismatch detector
                let Some(mut frame) = stack.pop() else {
                    continue;
                };
                frame.region.end_line = Some(index);
                attach(&mut stack, &mut forest, frame.region);
            }
            LineClass::Plain => {}
        }
    }

    let unterminated = stack.len();
    while let Some(frame) = stack.pop() {
        attach(&mut stack, &mut forest, frame.region);
    }

    debug!(
        roots = forest.len(),
        regions = starts_seen,
        unterminated,
        "built region outline"
    );

    Outline::new(forest, &labels.empty)
}

/// Hand a finished region to its parent, or to the forest if it is a root.
fn attach(stack: &mut [Frame], forest: &mut Vec<Region>, region: Region) {
    match stack.last_mut() {
        Some(parent) => parent.region.children.push(region),
        None => forest.push(region),
    }
}
