//! Engine state management.
//!
//! Holds the board, the engine options and the cross-turn history, and runs
//! one decision per turn: classify the legal actions, consult the day table,
//! write the chosen action.

use std::io::{self, Write};

use serde::Serialize;

use crate::board::action::Action;
use crate::board::grid::Board;
use crate::board::state::TurnState;
use crate::classify::classify;
use crate::config::EngineConfig;
use crate::policy::{decide, Decision};
use crate::protocol::notation::format_output;
use crate::trace::{write_record, TurnRecord};

/// Totals carried from one turn to the next.
///
/// This is the only state that outlives a turn. The policy does not read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct History {
    pub turns: u32,
    pub last_day: Option<u32>,
    pub grows: u32,
    pub seeds: u32,
    pub completes: u32,
    pub waits: u32,
}

impl History {
    /// Accounts for the action played on `day`.
    pub fn record(&mut self, day: u32, action: &Action) {
        self.turns += 1;
        self.last_day = Some(day);
        match action {
            Action::Wait => self.waits += 1,
            Action::Grow { .. } => self.grows += 1,
            Action::Seed { .. } => self.seeds += 1,
            Action::Complete { .. } => self.completes += 1,
        }
    }
}

/// Holds the mutable state of the engine between turns.
pub struct Engine {
    board: Board,
    config: EngineConfig,
    history: History,
}

impl Engine {
    /// Creates an engine for a board.
    pub fn new(board: Board, config: EngineConfig) -> Self {
        Engine {
            board,
            config,
            history: History::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Decides the action for one turn and records it in the history.
    pub fn decide(&mut self, state: &TurnState) -> Decision {
        let actions = classify(&state.legal_actions);
        let decision = decide(&self.board, state, &actions);
        self.history.record(state.day, &decision.action);
        if self.config.trace {
            let record = TurnRecord::new(state, &actions, &decision, &self.history);
            if let Err(e) = write_record(&record, &mut io::stderr().lock()) {
                eprintln!("trace write failed: {}", e);
            }
        }
        decision
    }

    /// Plays one turn: decides, then writes the action line and flushes.
    pub fn play_turn<W: Write>(&mut self, state: &TurnState, out: &mut W) -> io::Result<Action> {
        let decision = self.decide(state);
        writeln!(
            out,
            "{}",
            format_output(&decision.action, self.config.message.as_deref())
        )?;
        out.flush()?;
        Ok(decision.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tree::{Tree, TreeSize};

    fn turn(day: u32, legal: &[Action]) -> TurnState {
        let mut state = TurnState::new(day, 10);
        state.place_tree(Tree {
            cell: 0,
            size: TreeSize::Small,
            is_mine: true,
            is_dormant: false,
        });
        state.legal_actions = legal.to_vec();
        state
    }

    #[test]
    fn new_engine_has_empty_history() {
        let engine = Engine::new(Board::standard(), EngineConfig::default());
        assert_eq!(*engine.history(), History::default());
        assert_eq!(engine.board().len(), 37);
        assert_eq!(*engine.config(), EngineConfig::default());
    }

    #[test]
    fn play_turn_writes_one_line() {
        let mut engine = Engine::new(Board::standard(), EngineConfig::default());
        let mut out = Vec::new();
        let action = engine
            .play_turn(&turn(1, &[Action::Wait, Action::Grow { target: 0 }]), &mut out)
            .unwrap();
        assert_eq!(action, Action::Grow { target: 0 });
        assert_eq!(String::from_utf8(out).unwrap(), "GROW 0\n");
    }

    #[test]
    fn play_turn_appends_message() {
        let config = EngineConfig {
            message: Some("growing".to_string()),
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(Board::standard(), config);
        let mut out = Vec::new();
        engine.play_turn(&turn(0, &[Action::Wait]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "WAIT growing\n");
    }

    #[test]
    fn history_accumulates_across_turns() {
        let mut engine = Engine::new(Board::standard(), EngineConfig::default());
        let mut out = Vec::new();
        engine.play_turn(&turn(0, &[Action::Wait]), &mut out).unwrap();
        engine
            .play_turn(&turn(1, &[Action::Grow { target: 0 }]), &mut out)
            .unwrap();
        engine
            .play_turn(&turn(2, &[Action::Seed { source: 0, target: 8 }]), &mut out)
            .unwrap();
        engine
            .play_turn(&turn(21, &[Action::Complete { target: 0 }]), &mut out)
            .unwrap();

        let history = engine.history();
        assert_eq!(history.turns, 4);
        assert_eq!(history.last_day, Some(21));
        assert_eq!(history.waits, 1);
        assert_eq!(history.grows, 1);
        assert_eq!(history.seeds, 1);
        assert_eq!(history.completes, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "WAIT\nGROW 0\nSEED 0 8\nCOMPLETE 0\n"
        );
    }

    #[test]
    fn history_does_not_change_decisions() {
        let state = turn(2, &[Action::Seed { source: 0, target: 8 }]);
        let mut engine = Engine::new(Board::standard(), EngineConfig::default());
        let first = engine.decide(&state);
        let second = engine.decide(&state);
        assert_eq!(first, second);
        assert_eq!(engine.history().seeds, 2);
    }
}
