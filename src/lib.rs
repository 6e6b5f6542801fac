//! Photosynth engine library.
//!
//! Exposes the board model, protocol reader, action classifier, selectors
//! and day-indexed policy for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod classify;
pub mod config;
pub mod engine;
pub mod policy;
pub mod protocol;
pub mod select;
pub mod trace;
