//! Cell types.
//!
//! A cell is one hexagon of the board: its index, its soil richness, and the
//! indices of its six neighbors in fixed angular order.

/// Number of neighbor slots per cell.
pub const DIRECTION_COUNT: usize = 6;

/// Soil quality of a cell. Unusable cells never host a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Richness {
    Unusable,
    Low,
    Medium,
    High,
}

impl Richness {
    /// Returns the integer code used by the game protocol.
    pub const fn code(self) -> u8 {
        match self {
            Richness::Unusable => 0,
            Richness::Low => 1,
            Richness::Medium => 2,
            Richness::High => 3,
        }
    }

    /// Parses a richness from its protocol code.
    pub fn from_code(code: i64) -> Option<Richness> {
        match code {
            0 => Some(Richness::Unusable),
            1 => Some(Richness::Low),
            2 => Some(Richness::Medium),
            3 => Some(Richness::High),
            _ => None,
        }
    }
}

/// One hexagon of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub index: usize,
    pub richness: Richness,
    /// Neighbor index per direction, `None` past the board edge.
    pub neighbors: [Option<usize>; DIRECTION_COUNT],
}

impl Cell {
    /// Returns true if `other` is listed in one of this cell's neighbor slots.
    pub fn touches(&self, other: usize) -> bool {
        self.neighbors.contains(&Some(other))
    }

    /// Iterates over the existing neighbor indices, skipping edge slots.
    pub fn neighbor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().filter_map(|n| *n)
    }
}
