//! Board representation and turn-state types.
//!
//! Contains the core data structures for cells, the board topology, trees,
//! actions, and the per-turn snapshot.

pub mod action;
pub mod cell;
pub mod grid;
pub mod state;
pub mod tree;

pub use action::Action;
pub use cell::{Cell, Richness, DIRECTION_COUNT};
pub use grid::{is_corner, Board, BoardError, CENTER, CORNERS, STANDARD_CELL_COUNT};
pub use state::{OpponentState, TurnState, LAST_DAY};
pub use tree::{Tree, TreeSize};
