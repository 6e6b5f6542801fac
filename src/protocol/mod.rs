//! Game protocol handling.
//!
//! This module implements the text protocol spoken with the game driver:
//! reading the startup topology and per-turn snapshots, and parsing and
//! formatting action lines.

pub mod input;
pub mod notation;

pub use input::{InputError, InputReader};
pub use notation::{format_output, parse_action, parse_action_with, ActionError, ParseMode};
