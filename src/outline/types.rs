//! Region and outline types.

use serde::Serialize;

use super::path::RegionPath;

/// One start...end span found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Display label: `"{path}. {name}"`, or the placeholder text.
    pub label: String,
    /// Region name without its number.
    pub name: String,
    /// Hierarchical number.
    pub path: RegionPath,
    /// Zero-based line of the start marker. `None` only for the placeholder.
    pub start_line: Option<usize>,
    /// Zero-based line of the matching end marker, if one was found.
    pub end_line: Option<usize>,
    /// Nested regions in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Region>,
}

impl Region {
    /// Create a region opened at `start_line`.
    pub fn new(path: RegionPath, name: impl Into<String>, start_line: usize) -> Self {
        let name = name.into();
        Self {
            label: format!("{}. {}", path, name),
            name,
            path,
            start_line: Some(start_line),
            end_line: None,
            children: Vec::new(),
        }
    }

    /// The stand-in node shown when a document has no regions.
    pub fn placeholder(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: label.clone(),
            label,
            path: RegionPath::default(),
            start_line: None,
            end_line: None,
            children: Vec::new(),
        }
    }

    /// Line to move the cursor to when this region is selected.
    ///
    /// Line 0 is a valid target.
    pub fn reveal_line(&self) -> Option<usize> {
        self.start_line
    }

    /// Whether the region has nested regions (shown expanded in a tree view).
    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether an end marker closed this region.
    pub fn is_terminated(&self) -> bool {
        self.end_line.is_some()
    }
}

/// Ordered forest of regions for one document. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    regions: Vec<Region>,
}

impl Outline {
    /// Wrap a forest, substituting the placeholder when it is empty.
    pub fn new(regions: Vec<Region>, empty_label: &str) -> Self {
        if regions.is_empty() {
            Self {
                regions: vec![Region::placeholder(empty_label)],
            }
        } else {
            Self { regions }
        }
    }

    /// Root regions in document order.
    pub fn roots(&self) -> &[Region] {
        &self.regions
    }

    /// Whether the outline holds only the placeholder node.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.regions.as_slice(), [only] if only.start_line.is_none())
    }

    /// Pre-order walk over every region with its depth (roots at 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            pending: self.regions.iter().rev().map(|r| (0, r)).collect(),
        }
    }

    /// Find the region with the given number.
    pub fn find(&self, path: &RegionPath) -> Option<&Region> {
        self.walk()
            .map(|(_, region)| region)
            .find(|region| !region.path.is_empty() && region.path == *path)
    }

    /// Number of real regions (the placeholder does not count).
    pub fn region_count(&self) -> usize {
        self.walk()
            .filter(|(_, region)| region.start_line.is_some())
            .count()
    }
}

/// Iterator returned by [`Outline::walk`].
pub struct Walk<'a> {
    pending: Vec<(usize, &'a Region)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Region);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, region) = self.pending.pop()?;
        self.pending
            .extend(region.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, region))
    }
}
