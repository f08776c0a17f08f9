//! The intel record a business owner fills in before a plan is generated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Strategic choice
// ---------------------------------------------------------------------------

/// Binary selector for one funnel or three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategicChoice {
    /// One avatar, one funnel.
    #[serde(rename = "Single-Target Assault")]
    Single,
    /// Three avatars, three funnels.
    #[serde(rename = "Multi-Avatar Domination")]
    Multi,
}

impl StrategicChoice {
    /// Every accepted literal, in display order.
    pub const LITERALS: [&'static str; 2] = ["Single-Target Assault", "Multi-Avatar Domination"];

    /// The literal label the form presents for this choice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => Self::LITERALS[0],
            Self::Multi => Self::LITERALS[1],
        }
    }

    /// Short explanation shown next to the label.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Single => "One avatar, one funnel",
            Self::Multi => "Three avatars, three funnels",
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

impl fmt::Display for StrategicChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategicChoice {
    type Err = StrategicChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Single-Target Assault" => Ok(Self::Single),
            "Multi-Avatar Domination" => Ok(Self::Multi),
            other => Err(StrategicChoiceParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`StrategicChoice`] string.
#[derive(Debug, Clone)]
pub struct StrategicChoiceParseError(pub String);

impl fmt::Display for StrategicChoiceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid strategic choice: {:?} (expected {:?} or {:?})",
            self.0,
            StrategicChoice::LITERALS[0],
            StrategicChoice::LITERALS[1]
        )
    }
}

impl std::error::Error for StrategicChoiceParseError {}

// ---------------------------------------------------------------------------
// Intel
// ---------------------------------------------------------------------------

/// Validated marketing intel. Every string field is non-empty.
///
/// Build one with [`crate::intel::parse_intel_toml`] or
/// [`crate::intel::read_intel_file`]; the generators assume the
/// non-empty invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intel {
    /// The exact audience, e.g. "Homeowners in Terrebonne, QC.".
    pub hungry_crowd: String,
    /// What keeps the audience up at night.
    pub burning_pain: String,
    /// The irresistible offer.
    pub bait: String,
    /// Unique selling proposition.
    pub usp: String,
    pub business_name: String,
    pub contact_number: String,
    /// Collected for the record only; output text is never localized.
    pub primary_language: String,
    pub strategic_choice: StrategicChoice,
}

/// Separator between audience and location inside `hungry_crowd`.
const CROWD_LOCATION_SEPARATOR: &str = " in ";

impl Intel {
    /// Audience descriptor: the crowd text before the first `" in "`.
    ///
    /// Returns the whole crowd when there is no separator.
    pub fn audience(&self) -> &str {
        self.hungry_crowd
            .split(CROWD_LOCATION_SEPARATOR)
            .next()
            .unwrap_or(&self.hungry_crowd)
    }

    /// Location: the segment after the first `" in "`, up to the next one.
    ///
    /// `None` when the crowd has no separator or the segment is empty;
    /// callers substitute their own default.
    pub fn location(&self) -> Option<&str> {
        self.hungry_crowd
            .split(CROWD_LOCATION_SEPARATOR)
            .nth(1)
            .filter(|s| !s.is_empty())
    }
}
