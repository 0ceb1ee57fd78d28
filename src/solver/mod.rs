//! Word finding
//!
//! A [`Ruleset`] holds the scored wordlist; [`Ruleset::solve_query`] turns a
//! rack into a [`SolvedQuery`].

mod engine;
mod filter;
mod result;
mod ruleset;

pub use result::{LengthInfo, SolvedQuery};
pub use ruleset::{Ruleset, ScoredWord};
