//! Substring location for partial coloring
//!
//! Positions are character offsets (not byte offsets) so they line up with
//! the per-character columns produced by the line composer.

use std::collections::BTreeSet;

/// Ordered set of character offsets to color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSet {
    positions: BTreeSet<usize>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every offset in `0..len`
    pub fn all(len: usize) -> Self {
        (0..len).collect()
    }

    pub fn insert(&mut self, position: usize) -> bool {
        self.positions.insert(position)
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Positions inside `[offset, offset + len)`, shifted down by `offset`
    pub fn rebase(&self, offset: usize, len: usize) -> PositionSet {
        self.positions
            .range(offset..offset + len)
            .map(|p| p - offset)
            .collect()
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Find every character position covered by an occurrence of `substring`
///
/// An empty substring selects the whole text. Overlapping occurrences are
/// all reported: every start offset is tested independently.
pub fn find_positions(text: &str, substring: &str) -> PositionSet {
    let chars: Vec<char> = text.chars().collect();
    if substring.is_empty() {
        return PositionSet::all(chars.len());
    }

    let needle: Vec<char> = substring.chars().collect();
    let mut positions = PositionSet::new();
    for (start, window) in chars.windows(needle.len()).enumerate() {
        if window == needle.as_slice() {
            positions.positions.extend(start..start + needle.len());
        }
    }
    positions
}
