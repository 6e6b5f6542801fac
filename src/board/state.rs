//! Turn state representation.
//!
//! Holds the snapshot received at the start of one turn: day, resources,
//! scores, the living trees and the legal actions. A snapshot lives for a
//! single turn and is discarded once an action is emitted.

use super::action::Action;
use super::tree::{Tree, TreeSize};

/// Last day of a game. Days run 0..=23.
pub const LAST_DAY: u32 = 23;

/// The opponent's public state. Parsed and carried, not consulted by the
/// current policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpponentState {
    pub sun: i32,
    pub score: i32,
    /// Whether the opponent is asleep until the next day.
    pub is_waiting: bool,
}

/// Complete snapshot of one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    pub day: u32,
    /// Base score of the next COMPLETE action.
    pub nutrients: i32,
    pub sun: i32,
    pub score: i32,
    pub opponent: OpponentState,
    pub trees: Vec<Tree>,
    pub legal_actions: Vec<Action>,
}

impl TurnState {
    /// Creates an empty snapshot for the given day and sun points.
    pub fn new(day: u32, sun: i32) -> Self {
        TurnState {
            day,
            sun,
            ..TurnState::default()
        }
    }

    /// Adds a tree. Returns false if the cell is already occupied.
    pub fn place_tree(&mut self, tree: Tree) -> bool {
        if self.tree_at(tree.cell).is_some() {
            return false;
        }
        self.trees.push(tree);
        true
    }

    /// Returns the tree standing on `cell`, if any.
    pub fn tree_at(&self, cell: usize) -> Option<&Tree> {
        self.trees.iter().find(|t| t.cell == cell)
    }

    /// Iterates over the player's own trees.
    pub fn my_trees(&self) -> impl Iterator<Item = &Tree> + '_ {
        self.trees.iter().filter(|t| t.is_mine)
    }

    /// Counts the player's own trees of the given size.
    pub fn count_mine(&self, size: TreeSize) -> usize {
        self.my_trees().filter(|t| t.size == size).count()
    }
}
