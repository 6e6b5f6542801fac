//! Day-indexed policy.
//!
//! The whole strategy is a table from day ranges to named rules. The first
//! entry whose range contains the current day supplies the rule; days past
//! the table use the harvest rule. Whatever the rule returns must come from
//! the classified lists, so the chosen action is always legal, and a rule
//! that finds nothing resolves to `WAIT`.
//!
//! The policy is a pure function of the board, the snapshot and the
//! classified actions. Opponent state, nutrients, score and any cross-turn
//! history are not consulted.

pub mod rules;

use std::ops::RangeInclusive;

use crate::board::action::Action;
use crate::board::grid::Board;
use crate::board::state::TurnState;
use crate::classify::ClassifiedActions;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub board: &'a Board,
    pub state: &'a TurnState,
    pub actions: &'a ClassifiedActions,
}

/// A rule proposes an action, or `None` to wait.
pub type Rule = fn(&PolicyContext<'_>) -> Option<Action>;

/// One row of the day table.
pub struct DayRule {
    pub days: RangeInclusive<u32>,
    pub name: &'static str,
    pub rule: Rule,
}

/// Name of the rule used past the last table row.
pub const LATE_GAME_RULE: &str = "harvest";

/// The day table, in lookup order.
pub static DAY_TABLE: &[DayRule] = &[
    DayRule { days: 0..=0, name: "rest", rule: rules::rest },
    DayRule { days: 1..=1, name: "grow", rule: rules::grow },
    DayRule { days: 2..=2, name: "grow_then_seed", rule: rules::grow_then_seed },
    DayRule { days: 3..=3, name: "opening_seed", rule: rules::opening_seed },
    DayRule { days: 4..=4, name: "grow", rule: rules::grow },
    DayRule { days: 5..=5, name: "grow_medium_first", rule: rules::grow_medium_first },
    DayRule { days: 6..=9, name: "grow_then_spread", rule: rules::grow_then_spread },
    DayRule { days: 10..=12, name: "harvest_if_crowded", rule: rules::harvest_if_crowded },
    DayRule { days: 13..=14, name: "grow_medium_or_harvest", rule: rules::grow_medium_or_harvest },
    DayRule { days: 15..=15, name: "grow", rule: rules::grow },
    DayRule { days: 16..=16, name: "grow_medium_or_harvest", rule: rules::grow_medium_or_harvest },
    DayRule { days: 17..=17, name: "grow", rule: rules::grow },
    DayRule { days: 18..=18, name: "grow_medium_or_harvest", rule: rules::grow_medium_or_harvest },
    DayRule { days: 19..=20, name: "grow", rule: rules::grow },
];

/// The action chosen for a turn and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub rule: &'static str,
}

/// Looks up the rule for `day`.
pub fn rule_for_day(day: u32) -> (&'static str, Rule) {
    DAY_TABLE
        .iter()
        .find(|row| row.days.contains(&day))
        .map(|row| (row.name, row.rule))
        .unwrap_or((LATE_GAME_RULE, rules::harvest as Rule))
}

/// Picks the action for this turn.
pub fn decide(board: &Board, state: &TurnState, actions: &ClassifiedActions) -> Decision {
    let (name, rule) = rule_for_day(state.day);
    let ctx = PolicyContext {
        board,
        state,
        actions,
    };
    let action = if actions.is_empty() {
        Action::Wait
    } else {
        rule(&ctx).unwrap_or(Action::Wait)
    };
    Decision { action, rule: name }
}
