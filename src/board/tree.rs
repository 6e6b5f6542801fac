//! Tree types and ownership.
//!
//! Trees are rebuilt every turn from the live tree list; a tree has no
//! identity beyond the cell it occupies.

/// Growth stage of a tree, ordered from seed to fully grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeSize {
    Seed,
    Small,
    Medium,
    Big,
}

impl TreeSize {
    /// Returns the integer code used by the game protocol.
    pub const fn code(self) -> u8 {
        match self {
            TreeSize::Seed => 0,
            TreeSize::Small => 1,
            TreeSize::Medium => 2,
            TreeSize::Big => 3,
        }
    }

    /// Parses a tree size from its protocol code.
    pub fn from_code(code: i64) -> Option<TreeSize> {
        match code {
            0 => Some(TreeSize::Seed),
            1 => Some(TreeSize::Small),
            2 => Some(TreeSize::Medium),
            3 => Some(TreeSize::Big),
            _ => None,
        }
    }
}

/// A tree standing on one cell this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tree {
    pub cell: usize,
    pub size: TreeSize,
    pub is_mine: bool,
    /// Dormant trees cannot act again this day.
    pub is_dormant: bool,
}
