//! qrs
//!
//! Finds the words that can be formed from a rack of letters, grouped by
//! length and ranked by letter scores.
//!
//! # Quick Start
//!
//! ```rust
//! use qrs::settings::Settings;
//! use qrs::solver::Ruleset;
//! use qrs::wordlists::Wordlist;
//!
//! let words = Wordlist::new(["cat", "act", "at", "cats"]);
//! let ruleset = Ruleset::new(Settings::default(), &words);
//!
//! let solved = ruleset.solve_query("stac");
//! for group in solved.longest_first() {
//!     println!("{} letters - {} points: {:?}", group.length, group.score, group.words);
//! }
//! ```

// Letter scores and racks
pub mod core;

// Query solving
pub mod solver;

// Word lists
pub mod wordlists;

// Typed settings and the settings file
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
