//! Action types.
//!
//! The four moves a player can make in one turn. Equality and ordering are
//! by variant then payload, so two actions compare equal only when they name
//! the same move on the same cells. Text notation lives in
//! `protocol::notation`.

use std::fmt;

/// A single move for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Wait: `WAIT`. Ends the player's day; always legal.
    Wait,

    /// Grow: `GROW 12`
    Grow { target: usize },

    /// Seed: `SEED 3 19` plants a seed at `target` using the tree at `source`.
    Seed { source: usize, target: usize },

    /// Complete: `COMPLETE 5` harvests the tree at `target`.
    Complete { target: usize },
}

impl Action {
    /// Returns the cell this action targets, or `None` for `Wait`.
    pub const fn target(&self) -> Option<usize> {
        match *self {
            Action::Wait => None,
            Action::Grow { target }
            | Action::Seed { target, .. }
            | Action::Complete { target } => Some(target),
        }
    }

    /// Returns the protocol keyword for this action.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Action::Wait => "WAIT",
            Action::Grow { .. } => "GROW",
            Action::Seed { .. } => "SEED",
            Action::Complete { .. } => "COMPLETE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Grow { target } => write!(f, "GROW {}", target),
            Action::Seed { source, target } => write!(f, "SEED {} {}", source, target),
            Action::Complete { target } => write!(f, "COMPLETE {}", target),
        }
    }
}
