//! Letter scoring systems
//!
//! A scoring system maps each letter `a..=z` to a point value. Several named
//! systems coexist in a [`ScoreTables`] registry; unknown names fall back to
//! [`DEFAULT_GAME`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Scoring system used when none is requested or the requested one is unknown
pub const DEFAULT_GAME: &str = "quarrel";

/// Points per letter, `a` through `z`
///
/// Characters outside `a..=z` (after lowercasing) score zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<char, u32>", into = "BTreeMap<char, u32>")]
pub struct LetterScores([u32; 26]);

/// Error type for invalid or unreadable scoring tables
#[derive(Debug, Error)]
pub enum ScoreTableError {
    #[error("failed to read scoring tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scoring tables: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// Quarrel letter values
pub const QUARREL: LetterScores = LetterScores([
    1, 5, 2, 3, 1, 5, 4, 4, 1, 15, 6, 2, 4, 2, 1, 3, 15, 1, 1, 1, 3, 6, 5, 10, 5, 12,
]);

/// Scrabble letter values
pub const SCRABBLE: LetterScores = LetterScores([
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
]);

/// Words With Friends letter values
pub const WWF: LetterScores = LetterScores([
    1, 4, 4, 2, 1, 4, 3, 3, 1, 10, 5, 2, 4, 2, 1, 4, 10, 1, 1, 1, 2, 5, 4, 8, 3, 10,
]);

impl LetterScores {
    /// Create a table from raw values for `a..=z`
    #[must_use]
    pub const fn new(values: [u32; 26]) -> Self {
        Self(values)
    }

    /// Points for a single character
    ///
    /// # Examples
    /// ```
    /// use qrs::core::letters::SCRABBLE;
    ///
    /// assert_eq!(SCRABBLE.letter('q'), 10);
    /// assert_eq!(SCRABBLE.letter('Q'), 10);
    /// assert_eq!(SCRABBLE.letter('-'), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn letter(&self, ch: char) -> u32 {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() {
            self.0[(ch as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Sum of the letter values of a word
    #[must_use]
    pub fn word(&self, word: &str) -> u32 {
        word.chars().map(|ch| self.letter(ch)).sum()
    }
}

impl TryFrom<BTreeMap<char, u32>> for LetterScores {
    type Error = ScoreTableError;

    /// Letters missing from the map score zero.
    fn try_from(map: BTreeMap<char, u32>) -> Result<Self, Self::Error> {
        let mut values = [0; 26];
        for (letter, score) in map {
            let lower = letter.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(ScoreTableError::InvalidLetter(letter));
            }
            values[(lower as u8 - b'a') as usize] = score;
        }
        Ok(Self(values))
    }
}

impl From<LetterScores> for BTreeMap<char, u32> {
    fn from(scores: LetterScores) -> Self {
        (b'a'..=b'z')
            .map(char::from)
            .zip(scores.0)
            .collect()
    }
}

/// Named scoring systems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTables {
    tables: BTreeMap<String, LetterScores>,
}

impl ScoreTables {
    /// The scoring systems compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        let tables = [("quarrel", QUARREL), ("scrabble", SCRABBLE), ("wwf", WWF)]
            .into_iter()
            .map(|(name, scores)| (name.to_string(), scores))
            .collect();
        Self { tables }
    }

    /// Parse tables from JSON shaped like `{"name": {"a": 1, "b": 3, ...}}`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a key is not a letter.
    pub fn from_json_str(json: &str) -> Result<Self, ScoreTableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tables from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoreTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Add the tables of `other`, replacing same-named entries
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.tables.extend(other.tables);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LetterScores> {
        self.tables.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Names of all registered scoring systems, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Resolve a scoring system by name
    ///
    /// Returns the name actually used alongside its table: the requested name
    /// if it is registered, otherwise [`DEFAULT_GAME`].
    ///
    /// # Examples
    /// ```
    /// use qrs::core::letters::{ScoreTables, SCRABBLE, QUARREL};
    ///
    /// let tables = ScoreTables::builtin();
    /// assert_eq!(tables.resolve("scrabble"), ("scrabble".to_string(), SCRABBLE));
    /// assert_eq!(tables.resolve("boggle"), ("quarrel".to_string(), QUARREL));
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> (String, LetterScores) {
        if let Some(scores) = self.tables.get(name) {
            return (name.to_string(), *scores);
        }
        let scores = self.tables.get(DEFAULT_GAME).copied().unwrap_or(QUARREL);
        (DEFAULT_GAME.to_string(), scores)
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Display for LetterScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = (b'a'..=b'z')
            .zip(self.0)
            .map(|(letter, score)| format!("{}={score}", char::from(letter)))
            .collect();
        write!(f, "{}", pairs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarrel_word_scores() {
        assert_eq!(QUARREL.word("cat"), 4);
        assert_eq!(QUARREL.word("act"), 4);
        assert_eq!(QUARREL.word("at"), 2);
        assert_eq!(QUARREL.word("cats"), 5);
        assert_eq!(QUARREL.word("quiz"), 15 + 3 + 1 + 12);
    }

    #[test]
    fn word_score_is_case_insensitive() {
        assert_eq!(SCRABBLE.word("Jazz"), SCRABBLE.word("jazz"));
    }

    #[test]
    fn non_letters_score_zero() {
        assert_eq!(SCRABBLE.word("a-b c"), 1 + 3 + 3);
        assert_eq!(QUARREL.word(""), 0);
    }

    #[test]
    fn builtin_tables_registered() {
        let tables = ScoreTables::builtin();
        let names: Vec<&str> = tables.names().collect();
        assert_eq!(names, ["quarrel", "scrabble", "wwf"]);
    }

    #[test]
    fn resolve_unknown_falls_back_to_default() {
        let tables = ScoreTables::builtin();
        let (name, scores) = tables.resolve("nonexistent");
        assert_eq!(name, DEFAULT_GAME);
        assert_eq!(scores, QUARREL);

        let (name, _) = tables.resolve("");
        assert_eq!(name, DEFAULT_GAME);
    }

    #[test]
    fn parse_custom_tables() {
        let tables = ScoreTables::from_json_str(r#"{"vowels": {"a": 2, "E": 3}}"#).unwrap();
        let scores = tables.get("vowels").unwrap();
        assert_eq!(scores.letter('a'), 2);
        assert_eq!(scores.letter('e'), 3);
        assert_eq!(scores.letter('z'), 0);
    }

    #[test]
    fn parse_rejects_non_letters() {
        let result = ScoreTables::from_json_str(r#"{"broken": {"1": 2}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn merge_overrides_builtin() {
        let custom = ScoreTables::from_json_str(r#"{"scrabble": {"a": 9}}"#).unwrap();
        let tables = ScoreTables::builtin().merge(custom);

        assert_eq!(tables.get("scrabble").unwrap().letter('a'), 9);
        assert!(tables.contains("quarrel"));
    }

    #[test]
    fn tables_survive_json_round_trip() {
        let json = serde_json::to_string(&ScoreTables::builtin()).unwrap();
        assert_eq!(ScoreTables::from_json_str(&json).unwrap(), ScoreTables::builtin());
    }

    #[test]
    fn display_lists_letters() {
        let text = SCRABBLE.to_string();
        assert!(text.starts_with("a=1 b=3 c=3"));
        assert!(text.ends_with("z=10"));
    }
}
