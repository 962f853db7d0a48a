//! Game-agnostic addressing of places on the card table.

use core::fmt;

/// The kind of place a region names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionKind {
    /// A tableau row (Beleaguered Castle).
    Row,
    /// A whole tableau column, from its first face-up card.
    Column,
    /// Only the last card of a tableau column.
    ColumnEnd,
    /// A foundation pile.
    Foundation,
    /// The undealt reserve (stock).
    Reserve,
    /// The discard (waste) pile.
    Discard,
}

/// A tagged place on the table: a kind plus an index within that kind.
///
/// Regions carry no geometry. The UI maps pixels to regions; engines accept
/// regions and report regions back. Single-pile kinds such as
/// [`RegionKind::Reserve`] use index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTableRegion {
    /// What kind of pile the region names.
    pub kind: RegionKind,
    /// Which pile of that kind.
    pub index: usize,
}

impl CardTableRegion {
    /// Creates a new region.
    #[must_use]
    pub const fn new(kind: RegionKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for CardTableRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.kind, self.index)
    }
}
