//! Declarative settings schema
//!
//! One table names every recognised setting together with its short flag,
//! value kind and help text. Validation, the settings file and the
//! interactive `:set` command all read from it.

use super::{SettingValue, Settings};
use std::fmt;

/// Identifies a setting independently of its spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Debug,
    Doubles,
    Exclude,
    Game,
    Include,
    Lower,
    Max,
    Min,
    Noscores,
    Repeats,
}

/// The type of value a setting holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    /// `true` or `false`
    Flag,
    /// A non-negative integer
    Number,
    /// A single string
    Text,
    /// A list of words
    Words,
}

/// One entry of the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub key: SettingKey,
    pub name: &'static str,
    pub short: char,
    pub kind: SettingKind,
    pub help: &'static str,
}

/// Every recognised setting, sorted by name
pub const SCHEMA: &[SettingSpec] = &[
    SettingSpec {
        key: SettingKey::Debug,
        name: "debug",
        short: 'd',
        kind: SettingKind::Flag,
        help: "Whether to display debug information",
    },
    SettingSpec {
        key: SettingKey::Doubles,
        name: "doubles",
        short: 'b',
        kind: SettingKind::Flag,
        help: "Whether to show longer, tied words",
    },
    SettingSpec {
        key: SettingKey::Exclude,
        name: "exclude",
        short: 'e',
        kind: SettingKind::Words,
        help: "List of words to exclude",
    },
    SettingSpec {
        key: SettingKey::Game,
        name: "game",
        short: 'g',
        kind: SettingKind::Text,
        help: "Scoring system to use",
    },
    SettingSpec {
        key: SettingKey::Include,
        name: "include",
        short: 'i',
        kind: SettingKind::Words,
        help: "List of words to include",
    },
    SettingSpec {
        key: SettingKey::Lower,
        name: "lower",
        short: 'l',
        kind: SettingKind::Flag,
        help: "Whether output should be lowercase",
    },
    SettingSpec {
        key: SettingKey::Max,
        name: "max",
        short: 'm',
        kind: SettingKind::Number,
        help: "Maximum length of words",
    },
    SettingSpec {
        key: SettingKey::Min,
        name: "min",
        short: 'n',
        kind: SettingKind::Number,
        help: "Minimum length of words",
    },
    SettingSpec {
        key: SettingKey::Noscores,
        name: "noscores",
        short: 's',
        kind: SettingKind::Flag,
        help: "Whether to ignore scores",
    },
    SettingSpec {
        key: SettingKey::Repeats,
        name: "repeats",
        short: 'r',
        kind: SettingKind::Flag,
        help: "Whether letters can repeat",
    },
];

/// Find a setting by name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SettingSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}

impl SettingSpec {
    /// The value this setting takes when nothing overrides it
    ///
    /// `None` for `max`, whose default depends on the wordlist.
    #[must_use]
    pub fn default_value(&self) -> Option<SettingValue> {
        Settings::default().get(self.name).ok()
    }
}

impl SettingKind {
    /// Parse a value of this kind from user input
    ///
    /// Words are separated by commas or whitespace. Returns `None` if the text
    /// is not a valid value of this kind.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<SettingValue> {
        let raw = raw.trim();
        match self {
            Self::Flag => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(SettingValue::Flag(true)),
                "false" | "no" | "off" | "0" => Some(SettingValue::Flag(false)),
                _ => None,
            },
            Self::Number => raw.parse().ok().map(SettingValue::Number),
            Self::Text => Some(SettingValue::Text(raw.to_string())),
            Self::Words => Some(SettingValue::Words(
                raw.split(|ch: char| ch == ',' || ch.is_whitespace())
                    .filter(|word| !word.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }

    /// Convert a JSON value of this kind
    ///
    /// Returns `None` when the JSON type does not match.
    #[must_use]
    pub fn from_json(self, value: &serde_json::Value) -> Option<SettingValue> {
        match self {
            Self::Flag => value.as_bool().map(SettingValue::Flag),
            Self::Number => value
                .as_u64()
                .and_then(|number| usize::try_from(number).ok())
                .map(SettingValue::Number),
            Self::Text => value.as_str().map(|text| SettingValue::Text(text.to_string())),
            Self::Words => value
                .as_array()?
                .iter()
                .map(|word| word.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(SettingValue::Words),
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flag => "a flag",
            Self::Number => "a number",
            Self::Text => "text",
            Self::Words => "a list of words",
        };
        write!(f, "{name}")
    }
}
