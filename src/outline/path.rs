//! Hierarchical region numbers.

use crate::error::RegionError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Position of a region in the outline: `[2, 1]` is the first child of the
/// second root, displayed as `2-1`.
///
/// Every component is 1-based. The empty path belongs to the placeholder
/// node only.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionPath(Vec<usize>);

impl RegionPath {
    /// Path of the `index`-th root region.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of this region's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut components = self.0.clone();
        components.push(index);
        Self(components)
    }

    /// The numeric components, outermost first.
    pub fn components(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth: 1 for roots, 0 for the empty path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the placeholder's empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RegionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for RegionPath {
    type Err = RegionError;

    /// Parses `2`, `2-1`, and tolerates a trailing label dot (`2-1.`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('.').unwrap_or(trimmed);

        let components = digits
            .split('-')
            .map(|part| part.parse::<usize>().ok().filter(|&n| n > 0))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RegionError::InvalidRegionPath(s.to_string()))?;

        Ok(Self(components))
    }
}

impl Serialize for RegionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
