//! Heuristic action selectors.
//!
//! Each selector scans one classified list in its existing order and returns
//! the first action matching a board or tree predicate. Selectors are pure
//! and read-only; "no match" is `None`, which the policy turns into the next
//! fallback.
//!
//! All scans are linear. With 37 cells and at most a few dozen legal actions
//! this is cheaper than building an index.

use crate::board::action::Action;
use crate::board::grid::{is_corner, Board, CENTER};
use crate::board::state::TurnState;
use crate::board::tree::TreeSize;

/// Returns true if the tree on `cell` has exactly `size`.
#[inline]
fn tree_has_size(state: &TurnState, cell: usize, size: TreeSize) -> bool {
    state.tree_at(cell).is_some_and(|t| t.size == size)
}

/// A grow action on the center cell.
pub fn grow_targeting_center(grow: &[Action]) -> Option<Action> {
    grow.iter()
        .copied()
        .find(|a| matches!(a, Action::Grow { target } if *target == CENTER))
}

/// A grow action on a corner cell holding a tree of `size`.
pub fn grow_targeting_corner_of_size(
    grow: &[Action],
    state: &TurnState,
    size: TreeSize,
) -> Option<Action> {
    grow.iter().copied().find(|a| match *a {
        Action::Grow { target } => is_corner(target) && tree_has_size(state, target, size),
        _ => false,
    })
}

/// A grow action on any cell holding a tree of `size`.
pub fn grow_targeting_size(grow: &[Action], state: &TurnState, size: TreeSize) -> Option<Action> {
    grow.iter().copied().find(|a| match *a {
        Action::Grow { target } => tree_has_size(state, target, size),
        _ => false,
    })
}

/// A seed action planting on the center cell.
pub fn seed_targeting_center(seed: &[Action]) -> Option<Action> {
    seed.iter()
        .copied()
        .find(|a| matches!(a, Action::Seed { target, .. } if *target == CENTER))
}

/// A seed action planting on a corner cell from a source not adjacent to it.
pub fn seed_targeting_corner_non_adjacent(seed: &[Action], board: &Board) -> Option<Action> {
    seed.iter().copied().find(|a| match *a {
        Action::Seed { source, target } => {
            is_corner(target) && !board.is_adjacent(source, target)
        }
        _ => false,
    })
}

/// A seed action whose target touches none of the player's trees.
///
/// With no trees of our own every target qualifies.
pub fn seed_with_no_neighbor_of_mine(
    seed: &[Action],
    board: &Board,
    state: &TurnState,
) -> Option<Action> {
    seed.iter().copied().find(|a| match *a {
        Action::Seed { target, .. } => state
            .my_trees()
            .all(|t| !board.is_adjacent(target, t.cell)),
        _ => false,
    })
}
