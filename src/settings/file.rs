//! Settings file persistence
//!
//! Settings live in a flat JSON object. Loading is lenient: unknown keys are
//! ignored and a value of the wrong type is skipped with a warning, leaving
//! that setting at its default.

use super::{SCHEMA, Settings};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "qrs.json";

/// Error type for reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings must be a JSON object")]
    NotAnObject,
}

impl SettingsFileError {
    /// True if the file simply does not exist
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

/// Parse settings from JSON text
///
/// # Errors
///
/// Returns an error if the text is not JSON or not a JSON object.
///
/// # Examples
/// ```
/// use qrs::settings::file::parse_settings;
///
/// let settings = parse_settings(r#"{"min": 3, "colour": "blue", "repeats": "yes"}"#).unwrap();
/// assert_eq!(settings.min, 3);
/// assert!(!settings.repeats);
/// ```
pub fn parse_settings(json: &str) -> Result<Settings, SettingsFileError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(SettingsFileError::NotAnObject)?;

    let mut settings = Settings::default();
    for (key, raw) in object {
        let Some(spec) = SCHEMA.iter().find(|spec| spec.name == key) else {
            debug!(key = %key, "ignoring unrecognised setting");
            continue;
        };

        let applied = spec
            .kind
            .from_json(raw)
            .is_some_and(|value| settings.set(spec.name, value).is_ok());
        if !applied {
            warn!(setting = spec.name, value = %raw, "expected {}; using default", spec.kind);
        }
    }

    Ok(settings)
}

/// Read settings from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object.
pub fn read_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsFileError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Log why a settings file could not be used
pub fn report_load_error(path: &Path, err: &SettingsFileError) {
    if err.is_missing() {
        warn!(
            "could not find '{}'; continuing with default/given settings",
            path.display()
        );
    } else {
        warn!(
            "'{}' is empty or invalid ({err}); continuing with default/given settings",
            path.display()
        );
    }
}

/// Render settings as tab-indented JSON with a trailing newline
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn to_json(settings: &Settings) -> Result<String, SettingsFileError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    settings.serialize(&mut serializer)?;
    buffer.push(b'\n');

    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

/// Write settings to a file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<(), SettingsFileError> {
    fs::write(path, to_json(settings)?)?;
    Ok(())
}
