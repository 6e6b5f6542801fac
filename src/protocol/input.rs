//! Game input reader.
//!
//! Reads the startup topology and the per-turn snapshots from a line stream.
//! The input is count-prefixed, so the reader pulls exactly the lines each
//! section declares.
//!
//! Startup:
//! ```text
//! <cell count>
//! <index> <richness> <n0> <n1> <n2> <n3> <n4> <n5>     (one per cell)
//! ```
//!
//! Each turn:
//! ```text
//! <day>
//! <nutrients>
//! <sun> <score>
//! <opp sun> <opp score> <opp is waiting>
//! <tree count>
//! <cell> <size> <is mine> <is dormant>                  (one per tree)
//! <action count>
//! <legal action>                                        (one per action)
//! ```
//!
//! Input comes from a trusted driver, so anything unexpected is fatal.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::board::cell::{Cell, Richness, DIRECTION_COUNT};
use crate::board::grid::{Board, BoardError};
use crate::board::state::{OpponentState, TurnState};
use crate::board::tree::{Tree, TreeSize};

use super::notation::{parse_action_with, ActionError, ParseMode};

/// Errors that can occur while reading game input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(&'static str),

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} '{value}'")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected trailing token '{token}'")]
    TrailingToken { line: usize, token: String },

    #[error("line {line}: invalid richness code {code}")]
    InvalidRichness { line: usize, code: i64 },

    #[error("line {line}: invalid tree size code {code}")]
    InvalidTreeSize { line: usize, code: i64 },

    #[error("line {line}: invalid {field} {value}")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: i64,
    },

    #[error("line {line}: second tree on cell {cell}")]
    DuplicateTree { line: usize, cell: usize },

    #[error("invalid topology: {0}")]
    Board(#[from] BoardError),

    #[error("line {line}: {source}")]
    Action { line: usize, source: ActionError },
}

/// Whitespace-split fields of one input line, consumed left to right.
struct Fields<'a> {
    line: usize,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Fields {
            line,
            tokens: text.split_whitespace(),
        }
    }

    /// Takes the next field as a signed integer.
    fn int(&mut self, field: &'static str) -> Result<i64, InputError> {
        let token = self.tokens.next().ok_or(InputError::MissingField {
            line: self.line,
            field,
        })?;
        token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
            line: self.line,
            field,
            value: token.to_string(),
        })
    }

    /// Takes the next field as a non-negative count or index.
    fn index(&mut self, field: &'static str) -> Result<usize, InputError> {
        let value = self.int(field)?;
        usize::try_from(value).map_err(|_| InputError::OutOfRange {
            line: self.line,
            field,
            value,
        })
    }

    /// Takes the next field as an `i32` quantity.
    fn amount(&mut self, field: &'static str) -> Result<i32, InputError> {
        let value = self.int(field)?;
        i32::try_from(value).map_err(|_| InputError::OutOfRange {
            line: self.line,
            field,
            value,
        })
    }

    /// Takes the next field as a flag: any non-zero value is true.
    fn flag(&mut self, field: &'static str) -> Result<bool, InputError> {
        Ok(self.int(field)? != 0)
    }

    /// Fails if any field is left over.
    fn finish(mut self) -> Result<(), InputError> {
        match self.tokens.next() {
            Some(token) => Err(InputError::TrailingToken {
                line: self.line,
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Reads game input from any buffered line source.
pub struct InputReader<R> {
    reader: R,
    line_number: usize,
    buf: String,
}

impl<R: BufRead> InputReader<R> {
    /// Wraps a line source.
    pub fn new(reader: R) -> Self {
        InputReader {
            reader,
            line_number: 0,
            buf: String::new(),
        }
    }

    /// Reads the startup topology and builds the board.
    pub fn read_board(&mut self) -> Result<Board, InputError> {
        let count = self.read_single("cell count")?;
        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            let line = self.next_line("cell line")?;
            let mut fields = Fields::new(self.line_number, &line);
            let index = fields.index("cell index")?;
            let code = fields.int("richness")?;
            let richness = Richness::from_code(code).ok_or(InputError::InvalidRichness {
                line: self.line_number,
                code,
            })?;
            let mut neighbors = [None; DIRECTION_COUNT];
            for slot in neighbors.iter_mut() {
                let n = fields.int("neighbor index")?;
                *slot = if n < 0 {
                    None
                } else {
                    Some(usize::try_from(n).map_err(|_| InputError::OutOfRange {
                        line: self.line_number,
                        field: "neighbor index",
                        value: n,
                    })?)
                };
            }
            fields.finish()?;
            cells.push(Cell {
                index,
                richness,
                neighbors,
            });
        }
        Ok(Board::new(cells)?)
    }

    /// Reads one turn snapshot.
    ///
    /// Returns `Ok(None)` when the input ends cleanly before the turn's
    /// first line. Blank lines between turns are skipped. Ending anywhere
    /// inside a turn is an error.
    pub fn read_turn(&mut self, mode: ParseMode) -> Result<Option<TurnState>, InputError> {
        let day_line = loop {
            match self.try_next_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };
        let mut fields = Fields::new(self.line_number, &day_line);
        let day = fields.int("day")?;
        fields.finish()?;
        let day = u32::try_from(day).map_err(|_| InputError::OutOfRange {
            line: self.line_number,
            field: "day",
            value: day,
        })?;

        let line = self.next_line("nutrients")?;
        let mut fields = Fields::new(self.line_number, &line);
        let nutrients = fields.amount("nutrients")?;
        fields.finish()?;

        let line = self.next_line("sun and score")?;
        let mut fields = Fields::new(self.line_number, &line);
        let sun = fields.amount("sun")?;
        let score = fields.amount("score")?;
        fields.finish()?;

        let line = self.next_line("opponent state")?;
        let mut fields = Fields::new(self.line_number, &line);
        let opponent = OpponentState {
            sun: fields.amount("opponent sun")?,
            score: fields.amount("opponent score")?,
            is_waiting: fields.flag("opponent waiting flag")?,
        };
        fields.finish()?;

        let mut state = TurnState {
            day,
            nutrients,
            sun,
            score,
            opponent,
            ..TurnState::default()
        };

        let tree_count = self.read_single("tree count")?;
        for _ in 0..tree_count {
            let line = self.next_line("tree line")?;
            let mut fields = Fields::new(self.line_number, &line);
            let cell = fields.index("tree cell")?;
            let code = fields.int("tree size")?;
            let size = TreeSize::from_code(code).ok_or(InputError::InvalidTreeSize {
                line: self.line_number,
                code,
            })?;
            let is_mine = fields.flag("owner flag")?;
            let is_dormant = fields.flag("dormant flag")?;
            fields.finish()?;
            let placed = state.place_tree(Tree {
                cell,
                size,
                is_mine,
                is_dormant,
            });
            if !placed {
                return Err(InputError::DuplicateTree {
                    line: self.line_number,
                    cell,
                });
            }
        }

        let action_count = self.read_single("action count")?;
        state.legal_actions.reserve(action_count);
        for _ in 0..action_count {
            let line = self.next_line("legal action")?;
            let action = parse_action_with(&line, mode).map_err(|source| InputError::Action {
                line: self.line_number,
                source,
            })?;
            state.legal_actions.push(action);
        }

        Ok(Some(state))
    }

    /// Reads a line holding exactly one non-negative integer.
    fn read_single(&mut self, field: &'static str) -> Result<usize, InputError> {
        let line = self.next_line(field)?;
        let mut fields = Fields::new(self.line_number, &line);
        let value = fields.index(field)?;
        fields.finish()?;
        Ok(value)
    }

    /// Reads the next line, failing at end of input.
    fn next_line(&mut self, expected: &'static str) -> Result<String, InputError> {
        self.try_next_line()?
            .ok_or(InputError::UnexpectedEof(expected))
    }

    /// Reads the next line, or `None` at end of input.
    fn try_next_line(&mut self) -> Result<Option<String>, InputError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::action::Action;
    use crate::board::grid::STANDARD_CELL_COUNT;

    /// Renders the standard board as a startup topology dump.
    fn topology() -> String {
        let board = Board::standard();
        let mut out = format!("{}\n", board.len());
        for cell in board.cells() {
            out.push_str(&format!("{} {}", cell.index, cell.richness.code()));
            for n in cell.neighbors {
                match n {
                    Some(i) => out.push_str(&format!(" {}", i)),
                    None => out.push_str(" -1"),
                }
            }
            out.push('\n');
        }
        out
    }

    const TURN: &str = "3\n20\n5 12\n7 4 1\n3\n0 1 1 0\n19 2 0 1\n7 0 1 1\n3\nWAIT\nGROW 0\nSEED 0 3\n";

    fn reader(text: &str) -> InputReader<&[u8]> {
        InputReader::new(text.as_bytes())
    }

    #[test]
    fn reads_standard_topology() {
        let text = topology();
        let mut input = reader(&text);
        let board = input.read_board().unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(input.line_number, STANDARD_CELL_COUNT + 1);
    }

    #[test]
    fn reads_turn_snapshot() {
        let mut input = reader(TURN);
        let state = input.read_turn(ParseMode::Lenient).unwrap().unwrap();
        assert_eq!(state.day, 3);
        assert_eq!(state.nutrients, 20);
        assert_eq!(state.sun, 5);
        assert_eq!(state.score, 12);
        assert_eq!(
            state.opponent,
            OpponentState {
                sun: 7,
                score: 4,
                is_waiting: true,
            }
        );
        assert_eq!(state.trees.len(), 3);
        let opp = state.tree_at(19).unwrap();
        assert_eq!(opp.size, TreeSize::Medium);
        assert!(!opp.is_mine);
        assert!(opp.is_dormant);
        assert_eq!(
            state.legal_actions,
            vec![
                Action::Wait,
                Action::Grow { target: 0 },
                Action::Seed { source: 0, target: 3 },
            ]
        );
    }

    #[test]
    fn reads_consecutive_turns_then_end() {
        let text = format!("{}{}", TURN, TURN.replacen("3\n", "4\n", 1));
        let mut input = reader(&text);
        assert_eq!(input.read_turn(ParseMode::Lenient).unwrap().unwrap().day, 3);
        assert_eq!(input.read_turn(ParseMode::Lenient).unwrap().unwrap().day, 4);
        assert!(input.read_turn(ParseMode::Lenient).unwrap().is_none());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = TURN.replace('\n', "\r\n");
        let mut input = reader(&text);
        let state = input.read_turn(ParseMode::Strict).unwrap().unwrap();
        assert_eq!(state.legal_actions.len(), 3);
    }

    #[test]
    fn truncated_turn_is_error() {
        let mut input = reader("3\n20\n5 12\n");
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof("opponent state")));
    }

    #[test]
    fn missing_field_is_error() {
        let mut input = reader("3\n20\n5\n");
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingField {
                line: 3,
                field: "score"
            }
        ));
    }

    #[test]
    fn non_integer_is_error() {
        let mut input = reader("three\n");
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::InvalidInteger { line: 1, field: "day", .. }));
    }

    #[test]
    fn negative_day_is_error() {
        let mut input = reader("-1\n");
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "day", value: -1, .. }));
    }

    #[test]
    fn invalid_tree_size_is_error() {
        let text = TURN.replace("19 2 0 1", "19 7 0 1");
        let mut input = reader(&text);
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::InvalidTreeSize { line: 7, code: 7 }));
    }

    #[test]
    fn duplicate_tree_is_error() {
        let text = TURN.replace("19 2 0 1", "0 2 0 1");
        let mut input = reader(&text);
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::DuplicateTree { line: 7, cell: 0 }));
    }

    #[test]
    fn blank_lines_between_turns_are_skipped() {
        let text = format!("{}\n  \n{}\n", TURN, TURN.replacen("3\n", "4\n", 1));
        let mut input = reader(&text);
        assert_eq!(input.read_turn(ParseMode::Lenient).unwrap().unwrap().day, 3);
        assert_eq!(input.read_turn(ParseMode::Lenient).unwrap().unwrap().day, 4);
        assert!(input.read_turn(ParseMode::Lenient).unwrap().is_none());
    }

    #[test]
    fn unknown_action_is_wait_when_lenient() {
        let text = TURN.replace("GROW 0", "FOO 3");
        let mut input = reader(&text);
        let state = input.read_turn(ParseMode::Lenient).unwrap().unwrap();
        assert_eq!(state.legal_actions[1], Action::Wait);
    }

    #[test]
    fn unknown_action_is_error_when_strict() {
        let text = TURN.replace("GROW 0", "FOO 3");
        let mut input = reader(&text);
        let err = input.read_turn(ParseMode::Strict).unwrap_err();
        match err {
            InputError::Action { line, source } => {
                assert_eq!(line, 11);
                assert_eq!(source, ActionError::UnknownAction("FOO".to_string()));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn invalid_richness_is_error() {
        let mut input = reader("1\n0 9 -1 -1 -1 -1 -1 -1\n");
        let err = input.read_board().unwrap_err();
        assert!(matches!(err, InputError::InvalidRichness { line: 2, code: 9 }));
    }

    #[test]
    fn asymmetric_topology_is_error() {
        let mut input = reader("2\n0 3 1 -1 -1 -1 -1 -1\n1 3 -1 -1 -1 -1 -1 -1\n");
        let err = input.read_board().unwrap_err();
        assert!(matches!(
            err,
            InputError::Board(BoardError::AsymmetricAdjacency { from: 0, to: 1 })
        ));
    }

    #[test]
    fn short_cell_line_is_error() {
        let mut input = reader("1\n0 3 -1 -1\n");
        let err = input.read_board().unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingField {
                line: 2,
                field: "neighbor index"
            }
        ));
    }

    #[test]
    fn trailing_token_is_error() {
        let mut input = reader("3 4\n");
        let err = input.read_turn(ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::TrailingToken { line: 1, .. }));
    }
}
