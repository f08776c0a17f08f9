//! TOML format types for intel files.
//!
//! These types map directly to the `intel.toml` on-disk format. Every field
//! defaults to an empty string so a half-filled file still deserializes and
//! validation can name the missing field.

use serde::{Deserialize, Serialize};

use super::model::Intel;

/// Top-level structure of an `intel.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelToml {
    /// The `[intel]` table.
    #[serde(default)]
    pub intel: IntelFields,
}

/// Raw, unvalidated fields of the `[intel]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelFields {
    #[serde(default)]
    pub hungry_crowd: String,
    #[serde(default)]
    pub burning_pain: String,
    #[serde(default)]
    pub bait: String,
    #[serde(default)]
    pub usp: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub primary_language: String,
    /// Either "Single-Target Assault" or "Multi-Avatar Domination".
    #[serde(default)]
    pub strategic_choice: String,
}

/// Field keys in form order.
pub const FIELD_KEYS: [&str; 8] = [
    "hungry_crowd",
    "burning_pain",
    "bait",
    "usp",
    "business_name",
    "contact_number",
    "primary_language",
    "strategic_choice",
];

impl IntelFields {
    /// `(key, value)` pairs in form order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            (FIELD_KEYS[0], self.hungry_crowd.as_str()),
            (FIELD_KEYS[1], self.burning_pain.as_str()),
            (FIELD_KEYS[2], self.bait.as_str()),
            (FIELD_KEYS[3], self.usp.as_str()),
            (FIELD_KEYS[4], self.business_name.as_str()),
            (FIELD_KEYS[5], self.contact_number.as_str()),
            (FIELD_KEYS[6], self.primary_language.as_str()),
            (FIELD_KEYS[7], self.strategic_choice.as_str()),
        ]
    }
}

impl From<&Intel> for IntelToml {
    fn from(intel: &Intel) -> Self {
        Self {
            intel: IntelFields {
                hungry_crowd: intel.hungry_crowd.clone(),
                burning_pain: intel.burning_pain.clone(),
                bait: intel.bait.clone(),
                usp: intel.usp.clone(),
                business_name: intel.business_name.clone(),
                contact_number: intel.contact_number.clone(),
                primary_language: intel.primary_language.clone(),
                strategic_choice: intel.strategic_choice.to_string(),
            },
        }
    }
}

/// Whether `key` names a field of the `[intel]` table.
pub fn is_field_key(key: &str) -> bool {
    FIELD_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::StrategicChoice;

    #[test]
    fn deserialize_full_intel() {
        let toml_str = r#"
[intel]
hungry_crowd = "Homeowners in Terrebonne, QC."
burning_pain = "brakes are grinding"
bait = "Free Brake Inspection"
usp = "Honest mechanics"
business_name = "Garage XYZ"
contact_number = "555-123-4567"
primary_language = "French-first"
strategic_choice = "Single-Target Assault"
"#;
        let file: IntelToml = toml::from_str(toml_str).expect("should parse");
        assert_eq!(file.intel.hungry_crowd, "Homeowners in Terrebonne, QC.");
        assert_eq!(file.intel.strategic_choice, "Single-Target Assault");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let file: IntelToml = toml::from_str("[intel]\nbait = \"x\"\n").expect("should parse");
        assert_eq!(file.intel.bait, "x");
        assert!(file.intel.usp.is_empty());
        assert!(file.intel.strategic_choice.is_empty());
    }

    #[test]
    fn missing_table_defaults_to_empty() {
        let file: IntelToml = toml::from_str("").expect("should parse");
        assert_eq!(file, IntelToml::default());
    }

    #[test]
    fn entries_follow_field_keys() {
        let fields = IntelFields {
            bait: "b".to_owned(),
            ..IntelFields::default()
        };
        let entries = fields.entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, FIELD_KEYS);
        assert_eq!(entries[2], ("bait", "b"));
    }

    #[test]
    fn from_intel_writes_choice_literal() {
        let intel = Intel {
            hungry_crowd: "a".to_owned(),
            burning_pain: "b".to_owned(),
            bait: "c".to_owned(),
            usp: "d".to_owned(),
            business_name: "e".to_owned(),
            contact_number: "f".to_owned(),
            primary_language: "g".to_owned(),
            strategic_choice: StrategicChoice::Multi,
        };
        let file = IntelToml::from(&intel);
        assert_eq!(file.intel.strategic_choice, "Multi-Avatar Domination");
        assert_eq!(file.intel.contact_number, "f");
    }

    #[test]
    fn field_key_lookup() {
        assert!(is_field_key("usp"));
        assert!(is_field_key("strategic_choice"));
        assert!(!is_field_key("uspx"));
    }
}
