//! Shared intel fixtures for battleplan integration tests.
//!
//! Every fixture is the brake-shop scenario used throughout the docs, with
//! helpers to vary a single field or render the intel as an `intel.toml`.

use battleplan_core::intel::IntelToml;
use battleplan_core::{Intel, StrategicChoice};

/// The Terrebonne brake-shop intel with the given strategic choice.
pub fn garage_intel(choice: StrategicChoice) -> Intel {
    Intel {
        hungry_crowd: "Homeowners in Terrebonne, QC.".to_owned(),
        burning_pain: "brakes are grinding".to_owned(),
        bait: "Free Brake Inspection".to_owned(),
        usp: "Honest mechanics".to_owned(),
        business_name: "Garage XYZ".to_owned(),
        contact_number: "555-123-4567".to_owned(),
        primary_language: "French-first".to_owned(),
        strategic_choice: choice,
    }
}

pub fn single_intel() -> Intel {
    garage_intel(StrategicChoice::Single)
}

pub fn multi_intel() -> Intel {
    garage_intel(StrategicChoice::Multi)
}

/// Same intel with a different bait.
pub fn with_bait(mut intel: Intel, bait: &str) -> Intel {
    intel.bait = bait.to_owned();
    intel
}

/// Same intel with a different hungry crowd.
pub fn with_crowd(mut intel: Intel, crowd: &str) -> Intel {
    intel.hungry_crowd = crowd.to_owned();
    intel
}

/// Render intel as the contents of an `intel.toml` file.
pub fn intel_toml(intel: &Intel) -> String {
    toml::to_string(&IntelToml::from(intel)).expect("intel fixture serializes")
}
