//! Intel TOML parser with validation.
//!
//! Parses an `intel.toml` string into a validated [`Intel`]:
//! - Every field is non-empty after trimming.
//! - `strategic_choice` is one of the two accepted literals.

use std::path::Path;

use thiserror::Error;

use super::model::{Intel, StrategicChoice};
use super::toml_format::{IntelFields, IntelToml};

/// Errors that can occur during intel parsing and validation.
#[derive(Debug, Error)]
pub enum IntelParseError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("intel field {0:?} is empty")]
    EmptyField(&'static str),

    #[error(
        "invalid strategic_choice {0:?} (expected \"Single-Target Assault\" or \"Multi-Avatar Domination\")"
    )]
    InvalidStrategicChoice(String),
}

/// Parse and validate an `intel.toml` string.
pub fn parse_intel_toml(content: &str) -> Result<Intel, IntelParseError> {
    let file: IntelToml = toml::from_str(content)?;
    validate(&file.intel)
}

/// Names of every field that is still empty, in form order.
pub fn missing_fields(fields: &IntelFields) -> Vec<&'static str> {
    fields
        .entries()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
}

/// Validate raw fields and build an [`Intel`].
///
/// Values are kept verbatim (no trimming); only emptiness is judged on the
/// trimmed text.
pub fn validate(fields: &IntelFields) -> Result<Intel, IntelParseError> {
    if let Some(field) = missing_fields(fields).first().copied() {
        return Err(IntelParseError::EmptyField(field));
    }

    let strategic_choice: StrategicChoice = fields
        .strategic_choice
        .parse()
        .map_err(|_| IntelParseError::InvalidStrategicChoice(fields.strategic_choice.clone()))?;

    Ok(Intel {
        hungry_crowd: fields.hungry_crowd.clone(),
        burning_pain: fields.burning_pain.clone(),
        bait: fields.bait.clone(),
        usp: fields.usp.clone(),
        business_name: fields.business_name.clone(),
        contact_number: fields.contact_number.clone(),
        primary_language: fields.primary_language.clone(),
        strategic_choice,
    })
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Errors from loading an intel file from disk.
#[derive(Debug)]
pub enum IntelFileError {
    /// The file could not be read.
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    /// The file exists but is empty.
    EmptyFile { path: String },
    /// The file contains invalid intel.
    Invalid {
        path: String,
        source: IntelParseError,
    },
}

impl std::fmt::Display for IntelFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "cannot read intel file {path:?}: {source}")
            }
            Self::EmptyFile { path } => write!(f, "intel file {path:?} is empty"),
            Self::Invalid { path, source } => {
                write!(f, "intel file {path:?} is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for IntelFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::EmptyFile { .. } => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

/// Read and validate an intel file.
pub fn read_intel_file(path: impl AsRef<Path>) -> Result<Intel, IntelFileError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| IntelFileError::Unreadable {
        path: display.clone(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Err(IntelFileError::EmptyFile { path: display });
    }

    parse_intel_toml(&content).map_err(|e| IntelFileError::Invalid {
        path: display,
        source: e,
    })
}
