//! Legal action classification.
//!
//! Splits the legal-action list into one list per action kind, each sorted
//! by target cell so that "first of" selections do not depend on the order
//! the driver listed the actions in. Seeds sharing a target are ordered by
//! source. `WAIT` is never classified; it is the fallback when no list
//! yields a choice.

use crate::board::action::Action;

/// Legal actions partitioned by kind, each list ascending by target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedActions {
    pub grow: Vec<Action>,
    pub seed: Vec<Action>,
    pub complete: Vec<Action>,
}

impl ClassifiedActions {
    /// Returns the lowest-target grow action.
    pub fn first_grow(&self) -> Option<Action> {
        self.grow.first().copied()
    }

    /// Returns the lowest-target seed action.
    pub fn first_seed(&self) -> Option<Action> {
        self.seed.first().copied()
    }

    /// Returns the lowest-target complete action.
    pub fn first_complete(&self) -> Option<Action> {
        self.complete.first().copied()
    }

    /// Returns true if no grow, seed or complete action is legal.
    pub fn is_empty(&self) -> bool {
        self.grow.is_empty() && self.seed.is_empty() && self.complete.is_empty()
    }
}

/// Partitions and sorts the legal actions.
pub fn classify(legal: &[Action]) -> ClassifiedActions {
    let mut classified = ClassifiedActions::default();
    for &action in legal {
        match action {
            Action::Grow { .. } => classified.grow.push(action),
            Action::Seed { .. } => classified.seed.push(action),
            Action::Complete { .. } => classified.complete.push(action),
            Action::Wait => {}
        }
    }

    classified.grow.sort_by_key(|a| a.target());
    classified.complete.sort_by_key(|a| a.target());
    classified.seed.sort_by_key(|a| match *a {
        Action::Seed { source, target } => (target, source),
        _ => (usize::MAX, usize::MAX),
    });
    classified
}
