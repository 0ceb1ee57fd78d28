//! Core domain types for word games
//!
//! Letter scoring tables and rack accounting. Everything here is pure and
//! free of I/O apart from loading scoring tables from a file.

pub mod letters;
mod rack;

pub use letters::{DEFAULT_GAME, LetterScores, ScoreTableError, ScoreTables};
pub use rack::{Consumption, Rack, build_query};
