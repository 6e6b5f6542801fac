//! Rule functions for the day table.
//!
//! Each rule is a fallback chain over the classified actions: the first link
//! that yields an action wins. `None` means no link matched and the caller
//! plays `WAIT`.

use crate::board::action::Action;
use crate::board::tree::TreeSize;
use crate::select::{
    grow_targeting_size, seed_targeting_corner_non_adjacent, seed_with_no_neighbor_of_mine,
};

use super::PolicyContext;

/// Minimum sun before the day-3 rule considers seeding.
pub const OPENING_SEED_MIN_SUN: i32 = 3;

/// Harvesting starts once the player owns more than this many big trees.
pub const CROWDED_BIG_TREES: usize = 2;

/// Always waits.
pub fn rest(_ctx: &PolicyContext<'_>) -> Option<Action> {
    None
}

/// First grow.
pub fn grow(ctx: &PolicyContext<'_>) -> Option<Action> {
    ctx.actions.first_grow()
}

/// First grow, else first seed.
pub fn grow_then_seed(ctx: &PolicyContext<'_>) -> Option<Action> {
    ctx.actions.first_grow().or_else(|| ctx.actions.first_seed())
}

/// First grow; otherwise, with enough sun and no seed of our own on the
/// board, a corner seed from a non-adjacent source, else the first seed.
pub fn opening_seed(ctx: &PolicyContext<'_>) -> Option<Action> {
    if let Some(action) = ctx.actions.first_grow() {
        return Some(action);
    }
    if ctx.state.sun < OPENING_SEED_MIN_SUN {
        return None;
    }
    if ctx.state.count_mine(TreeSize::Seed) > 0 {
        return None;
    }
    seed_targeting_corner_non_adjacent(&ctx.actions.seed, ctx.board)
        .or_else(|| ctx.actions.first_seed())
}

/// Grow a medium tree, else first grow.
pub fn grow_medium_first(ctx: &PolicyContext<'_>) -> Option<Action> {
    grow_targeting_size(&ctx.actions.grow, ctx.state, TreeSize::Medium)
        .or_else(|| ctx.actions.first_grow())
}

/// First grow, else a seed away from our own trees.
pub fn grow_then_spread(ctx: &PolicyContext<'_>) -> Option<Action> {
    ctx.actions
        .first_grow()
        .or_else(|| seed_with_no_neighbor_of_mine(&ctx.actions.seed, ctx.board, ctx.state))
}

/// First complete when crowded with big trees, else grow then spread.
pub fn harvest_if_crowded(ctx: &PolicyContext<'_>) -> Option<Action> {
    crowded_harvest(ctx).or_else(|| grow_then_spread(ctx))
}

/// Grow a medium tree, else harvest when crowded, else grow then spread.
pub fn grow_medium_or_harvest(ctx: &PolicyContext<'_>) -> Option<Action> {
    grow_targeting_size(&ctx.actions.grow, ctx.state, TreeSize::Medium)
        .or_else(|| harvest_if_crowded(ctx))
}

/// First complete, else first grow.
pub fn harvest(ctx: &PolicyContext<'_>) -> Option<Action> {
    ctx.actions
        .first_complete()
        .or_else(|| ctx.actions.first_grow())
}

/// First complete, only when we own more than `CROWDED_BIG_TREES` big trees.
fn crowded_harvest(ctx: &PolicyContext<'_>) -> Option<Action> {
    if ctx.state.count_mine(TreeSize::Big) > CROWDED_BIG_TREES {
        ctx.actions.first_complete()
    } else {
        None
    }
}
