//! Per-turn trace records.
//!
//! When tracing is on, the engine writes one JSON object per turn to the
//! debug stream so a game can be replayed and the rule behind each move
//! inspected.

use std::io::{self, Write};

use serde::Serialize;

use crate::board::state::{TurnState, LAST_DAY};
use crate::board::tree::TreeSize;
use crate::classify::ClassifiedActions;
use crate::engine::History;
use crate::policy::Decision;

/// One traced turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub day: u32,
    pub days_left: u32,
    pub sun: i32,
    pub score: i32,
    pub my_trees: usize,
    pub my_big_trees: usize,
    pub opponent_trees: usize,
    pub legal: usize,
    pub grow: usize,
    pub seed: usize,
    pub complete: usize,
    pub rule: &'static str,
    pub kind: &'static str,
    pub action: String,
    pub history: History,
}

impl TurnRecord {
    /// Summarizes a decided turn. `history` should already include it.
    pub fn new(
        state: &TurnState,
        actions: &ClassifiedActions,
        decision: &Decision,
        history: &History,
    ) -> Self {
        let my_trees = state.my_trees().count();
        TurnRecord {
            day: state.day,
            days_left: LAST_DAY.saturating_sub(state.day),
            sun: state.sun,
            score: state.score,
            my_trees,
            my_big_trees: state.count_mine(TreeSize::Big),
            opponent_trees: state.trees.len() - my_trees,
            legal: state.legal_actions.len(),
            grow: actions.grow.len(),
            seed: actions.seed.len(),
            complete: actions.complete.len(),
            rule: decision.rule,
            kind: decision.action.keyword(),
            action: decision.action.to_string(),
            history: *history,
        }
    }
}

/// Writes a record as a single JSON line.
pub fn write_record<W: Write>(record: &TurnRecord, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)
}
