//! Ruleset settings
//!
//! [`Settings`] is the typed configuration a ruleset is built from. Values can
//! also be read and written by name through the [`schema`], which is how the
//! settings file and the interactive prompt address them.

pub mod file;
pub mod schema;

pub use schema::{SCHEMA, SettingKey, SettingKind, SettingSpec};

use crate::core::DEFAULT_GAME;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Shortest word length any ruleset considers
pub const MIN_WORD_LENGTH: usize = 2;

/// Configuration for a ruleset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub debug: bool,
    pub doubles: bool,
    pub exclude: Vec<String>,
    pub game: String,
    pub include: Vec<String>,
    pub lower: bool,
    /// `None` means the longest word in the wordlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    pub min: usize,
    pub noscores: bool,
    pub repeats: bool,
}

/// A setting value addressed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Flag(bool),
    Number(usize),
    Text(String),
    Words(Vec<String>),
}

/// Error type for reading and writing settings by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid setting: {0}")]
    Invalid(String),

    #[error("{0} not found in settings")]
    NotFound(String),

    #[error("setting '{name}' expects {expected}")]
    TypeMismatch { name: String, expected: SettingKind },

    #[error("invalid value for '{name}': {value}")]
    InvalidValue { name: String, value: String },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            doubles: false,
            exclude: Vec::new(),
            game: DEFAULT_GAME.to_string(),
            include: Vec::new(),
            lower: false,
            max: None,
            min: MIN_WORD_LENGTH,
            noscores: false,
            repeats: false,
        }
    }
}

impl Settings {
    /// Read a setting by name
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unknown names and
    /// [`SettingsError::NotFound`] for a setting that has no value yet.
    ///
    /// # Examples
    /// ```
    /// use qrs::settings::{SettingValue, Settings};
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.get("min"), Ok(SettingValue::Number(2)));
    /// assert!(settings.get("colour").is_err());
    /// ```
    pub fn get(&self, name: &str) -> Result<SettingValue, SettingsError> {
        let spec = schema::lookup(name).ok_or_else(|| SettingsError::Invalid(name.to_string()))?;

        Ok(match spec.key {
            SettingKey::Debug => SettingValue::Flag(self.debug),
            SettingKey::Doubles => SettingValue::Flag(self.doubles),
            SettingKey::Exclude => SettingValue::Words(self.exclude.clone()),
            SettingKey::Game => SettingValue::Text(self.game.clone()),
            SettingKey::Include => SettingValue::Words(self.include.clone()),
            SettingKey::Lower => SettingValue::Flag(self.lower),
            SettingKey::Max => SettingValue::Number(
                self.max
                    .ok_or_else(|| SettingsError::NotFound(name.to_string()))?,
            ),
            SettingKey::Min => SettingValue::Number(self.min),
            SettingKey::Noscores => SettingValue::Flag(self.noscores),
            SettingKey::Repeats => SettingValue::Flag(self.repeats),
        })
    }

    /// Write a setting by name
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unknown names and
    /// [`SettingsError::TypeMismatch`] when the value has the wrong kind.
    pub fn set(&mut self, name: &str, value: SettingValue) -> Result<(), SettingsError> {
        let spec = schema::lookup(name).ok_or_else(|| SettingsError::Invalid(name.to_string()))?;

        match (spec.key, value) {
            (SettingKey::Debug, SettingValue::Flag(flag)) => self.debug = flag,
            (SettingKey::Doubles, SettingValue::Flag(flag)) => self.doubles = flag,
            (SettingKey::Lower, SettingValue::Flag(flag)) => self.lower = flag,
            (SettingKey::Noscores, SettingValue::Flag(flag)) => self.noscores = flag,
            (SettingKey::Repeats, SettingValue::Flag(flag)) => self.repeats = flag,
            (SettingKey::Max, SettingValue::Number(number)) => self.max = Some(number),
            (SettingKey::Min, SettingValue::Number(number)) => self.min = number,
            (SettingKey::Game, SettingValue::Text(text)) => self.game = text,
            (SettingKey::Exclude, SettingValue::Words(words)) => self.exclude = words,
            (SettingKey::Include, SettingValue::Words(words)) => self.include = words,
            _ => {
                return Err(SettingsError::TypeMismatch {
                    name: name.to_string(),
                    expected: spec.kind,
                });
            }
        }

        Ok(())
    }

    /// Parse `raw` according to the setting's kind, then write it
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] for unknown names and
    /// [`SettingsError::InvalidValue`] when `raw` does not parse.
    pub fn set_from_str(&mut self, name: &str, raw: &str) -> Result<(), SettingsError> {
        let spec = schema::lookup(name).ok_or_else(|| SettingsError::Invalid(name.to_string()))?;
        let value = spec
            .kind
            .parse(raw)
            .ok_or_else(|| SettingsError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string(),
            })?;
        self.set(name, value)
    }

    /// Resolve `min` and `max` against the longest available word
    ///
    /// `min` is floored to [`MIN_WORD_LENGTH`]; `max` defaults to and is
    /// capped at `longest`. If nothing reaches `min`, `max` is raised to it so
    /// that `min <= max` always holds.
    pub fn resolve_lengths(&mut self, longest: usize) -> (usize, usize) {
        let min = self.min.max(MIN_WORD_LENGTH);
        let max = self
            .max
            .map_or(longest, |max| max.min(longest))
            .max(min);

        self.min = min;
        self.max = Some(max);
        (min, max)
    }

    /// All settings with a value, in schema order
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static SettingSpec, SettingValue)> {
        SCHEMA
            .iter()
            .filter_map(|spec| self.get(spec.name).ok().map(|value| (spec, value)))
            .collect()
    }
}

impl SettingValue {
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::Flag(_) => SettingKind::Flag,
            Self::Number(_) => SettingKind::Number,
            Self::Text(_) => SettingKind::Text,
            Self::Words(_) => SettingKind::Words,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Words(words) => write!(f, "[{}]", words.join(", ")),
        }
    }
}
