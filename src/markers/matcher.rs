//! Per-line classification and region name extraction.

use crate::config::Labels;

use super::table::MarkerSpec;

/// Capture group names that may carry a region name, in priority order.
///
/// Languages with two opener syntaxes put each alternative in its own group.
pub const NAME_GROUPS: [&str; 2] = ["name", "nameAlt"];

/// Name carried by a start marker, before placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionName {
    /// A named group captured non-blank text (trimmed).
    Named(String),
    /// The opener matched, but no name group yielded any text.
    Unnamed,
    /// Opener without named groups: the trimmed matched text.
    Matched(String),
}

impl RegionName {
    /// Resolve to display text.
    ///
    /// `ordinal` is the 1-based discovery order of the start marker and is
    /// only used to synthesise `Region N` for an empty legacy match.
    pub fn resolve(&self, labels: &Labels, ordinal: usize) -> String {
        match self {
            RegionName::Named(name) => name.clone(),
            RegionName::Unnamed => labels.unnamed.clone(),
            RegionName::Matched(text) if text.is_empty() => format!("Region {}", ordinal),
            RegionName::Matched(text) => text.clone(),
        }
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line opens a region.
    Start(RegionName),
    /// The line closes a region.
    End,
    /// Neither marker matched.
    Plain,
}

/// Classify a line against a language's markers.
///
/// The start pattern is tested first, so a line matching both is a start.
pub fn classify(line: &str, spec: &MarkerSpec) -> LineClass {
    if let Some(name) = extract_name(line, spec) {
        LineClass::Start(name)
    } else if spec.end().is_match(line) {
        LineClass::End
    } else {
        LineClass::Plain
    }
}

/// Apply the start pattern and pull the region name out of it.
///
/// Returns `None` when the line is not a start marker.
pub fn extract_name(line: &str, spec: &MarkerSpec) -> Option<RegionName> {
    let captures = spec.start().captures(line)?;

    if !spec.has_named_groups() {
        let matched = captures.get(0).map_or("", |m| m.as_str()).trim();
        return Some(RegionName::Matched(matched.to_string()));
    }

    let name = NAME_GROUPS
        .iter()
        .filter_map(|group| captures.name(group))
        .map(|m| m.as_str().trim())
        .find(|text| !text.is_empty());

    Some(match name {
        Some(text) => RegionName::Named(text.to_string()),
        None => RegionName::Unnamed,
    })
}
