//! Action notation encoding and decoding.
//!
//! One action per line: `WAIT`, `GROW <cell>`, `SEED <source> <target>`,
//! `COMPLETE <cell>`. The first whitespace-separated token selects the
//! action. Output lines may carry a trailing free-text message after the
//! action, which the game displays next to the player.
//!
//! Legal-action lines are parsed in one of two modes. Lenient mode ignores
//! tokens past the payload and turns any line it cannot read into `WAIT`;
//! strict mode reports an `ActionError`.

use serde::Deserialize;
use thiserror::Error;

use crate::board::action::Action;

/// Errors that can occur when parsing an action line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("{action} expects {expected}")]
    MissingArgument {
        action: &'static str,
        expected: &'static str,
    },

    #[error("invalid cell index '{0}'")]
    InvalidIndex(String),

    #[error("unexpected trailing token '{0}'")]
    TrailingToken(String),
}

/// How unreadable legal-action lines are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Unreadable lines become `WAIT`.
    #[default]
    Lenient,
    /// Unreadable lines are reported as errors.
    Strict,
}

/// Parses a single action line.
///
/// Accepts the canonical forms `WAIT`, `GROW 12`, `SEED 3 19` and
/// `COMPLETE 5`. Leading and trailing whitespace is ignored. Tokens past the
/// payload are an error.
pub fn parse_action(s: &str) -> Result<Action, ActionError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let (action, consumed) = parse_payload(&tokens)?;
    if let Some(extra) = tokens.get(consumed) {
        return Err(ActionError::TrailingToken(extra.to_string()));
    }
    Ok(action)
}

/// Parses an action line according to `mode`.
///
/// In lenient mode this never fails: tokens past the payload are ignored
/// and anything else unreadable is `Wait`.
pub fn parse_action_with(s: &str, mode: ParseMode) -> Result<Action, ActionError> {
    match mode {
        ParseMode::Strict => parse_action(s),
        ParseMode::Lenient => {
            let tokens: Vec<&str> = s.split_whitespace().collect();
            Ok(parse_payload(&tokens).map_or(Action::Wait, |(action, _)| action))
        }
    }
}

/// Reads the keyword and its arguments, returning the action and the
/// number of tokens used.
fn parse_payload(tokens: &[&str]) -> Result<(Action, usize), ActionError> {
    let Some(&keyword) = tokens.first() else {
        return Err(ActionError::EmptyInput);
    };

    let (action, consumed) = match keyword {
        "WAIT" => (Action::Wait, 1),
        "GROW" => {
            let target = parse_index(tokens, 1, "GROW", "a target cell")?;
            (Action::Grow { target }, 2)
        }
        "SEED" => {
            let source = parse_index(tokens, 1, "SEED", "a source cell")?;
            let target = parse_index(tokens, 2, "SEED", "a target cell")?;
            (Action::Seed { source, target }, 3)
        }
        "COMPLETE" => {
            let target = parse_index(tokens, 1, "COMPLETE", "a target cell")?;
            (Action::Complete { target }, 2)
        }
        other => return Err(ActionError::UnknownAction(other.to_string())),
    };
    Ok((action, consumed))
}

/// Formats an action as an output line, appending `message` if present.
pub fn format_output(action: &Action, message: Option<&str>) -> String {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => format!("{} {}", action, m),
        None => action.to_string(),
    }
}

/// Parses the token at `pos` as a cell index.
fn parse_index(
    tokens: &[&str],
    pos: usize,
    action: &'static str,
    expected: &'static str,
) -> Result<usize, ActionError> {
    let token = tokens
        .get(pos)
        .ok_or(ActionError::MissingArgument { action, expected })?;
    token
        .parse::<usize>()
        .map_err(|_| ActionError::InvalidIndex(token.to_string()))
}
