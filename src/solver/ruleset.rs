//! Ruleset assembly
//!
//! A [`Ruleset`] bundles resolved settings, a private copy of the wordlist and
//! the score of every word in it. It is immutable once built.

use crate::core::{LetterScores, ScoreTables};
use crate::settings::{SettingValue, Settings, SettingsError};
use crate::wordlists::Wordlist;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A word with its precomputed score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Candidate order: longest first, then highest score, then alphabetical
    fn rank(&self, other: &Self) -> Ordering {
        other
            .len()
            .cmp(&self.len())
            .then_with(|| other.score.cmp(&self.score))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Word game ruleset with custom settings and wordlist
#[derive(Debug, Clone)]
pub struct Ruleset {
    settings: Settings,
    min_length: usize,
    max_length: usize,
    letter_scores: LetterScores,
    wordlist: Wordlist,
    ranked: Vec<ScoredWord>,
    scores: FxHashMap<String, u32>,
}

impl Ruleset {
    /// Build a ruleset using the built-in scoring systems
    ///
    /// # Examples
    /// ```
    /// use qrs::settings::Settings;
    /// use qrs::solver::Ruleset;
    /// use qrs::wordlists::Wordlist;
    ///
    /// let words = Wordlist::new(["cat", "act", "at", "cats"]);
    /// let ruleset = Ruleset::new(Settings::default(), &words);
    ///
    /// assert_eq!(ruleset.max_length(), 4);
    /// assert_eq!(ruleset.score("cats"), Some(5));
    /// ```
    #[must_use]
    pub fn new(settings: Settings, wordlist: &Wordlist) -> Self {
        Self::with_score_tables(settings, wordlist, &ScoreTables::builtin())
    }

    /// Build a ruleset choosing the scoring system from `tables`
    ///
    /// The caller's wordlist is copied, never modified.
    #[must_use]
    pub fn with_score_tables(mut settings: Settings, wordlist: &Wordlist, tables: &ScoreTables) -> Self {
        let edited = wordlist.with_edits(&settings.include, &settings.exclude);
        let (min_length, max_length) = settings.resolve_lengths(edited.longest());

        let (game, letter_scores) = tables.resolve(&settings.game);
        if game != settings.game {
            debug!(requested = %settings.game, using = %game, "unknown scoring system");
        }
        settings.game = game;

        let wordlist = edited.within_lengths(min_length, max_length);

        let mut ranked: Vec<ScoredWord> = wordlist
            .iter()
            .map(|word| ScoredWord {
                word: word.to_string(),
                score: letter_scores.word(word),
            })
            .collect();
        ranked.sort_by(ScoredWord::rank);

        let scores = ranked
            .iter()
            .map(|entry| (entry.word.clone(), entry.score))
            .collect();

        debug!(
            words = ranked.len(),
            min = min_length,
            max = max_length,
            game = %settings.game,
            "ruleset built"
        );

        Self {
            settings,
            min_length,
            max_length,
            letter_scores,
            wordlist,
            ranked,
            scores,
        }
    }

    /// The resolved settings
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read a resolved setting by name
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unknown names.
    pub fn get(&self, name: &str) -> Result<SettingValue, SettingsError> {
        self.settings.get(name)
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Name of the scoring system in use
    #[inline]
    #[must_use]
    pub fn game(&self) -> &str {
        &self.settings.game
    }

    #[inline]
    #[must_use]
    pub const fn letter_scores(&self) -> &LetterScores {
        &self.letter_scores
    }

    /// The ruleset's own filtered wordlist
    #[inline]
    #[must_use]
    pub const fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Words in candidate order: length descending, then score descending
    #[inline]
    #[must_use]
    pub fn ranked(&self) -> &[ScoredWord] {
        &self.ranked
    }

    /// Precomputed score of a word, if it is in the ruleset
    #[must_use]
    pub fn score(&self, word: &str) -> Option<u32> {
        self.scores.get(word).copied()
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ruleset(game={}, min={}, max={}, repeats={}, noscores={}, doubles={}, words={})",
            self.settings.game,
            self.min_length,
            self.max_length,
            self.settings.repeats,
            self.settings.noscores,
            self.settings.doubles,
            self.ranked.len()
        )
    }
}
