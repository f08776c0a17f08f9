//! Phase 1: avatar deep dive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intel::{Intel, StrategicChoice};

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// Persona archetype. Doubles as the persona key shared by every
/// per-avatar structure in a plan: each archetype appears at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// The only avatar of a single-target plan.
    Primary,
    InPain,
    Skeptic,
    Bundler,
}

/// Copy angle a landing page is written from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAngle {
    Urgency,
    Trust,
    Value,
}

impl Archetype {
    /// The three archetypes of a multi-avatar plan, in plan order.
    pub const MULTI: [Archetype; 3] = [Self::InPain, Self::Skeptic, Self::Bundler];

    /// Stable kebab-case key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::InPain => "in-pain",
            Self::Skeptic => "skeptic",
            Self::Bundler => "bundler",
        }
    }

    pub fn angle(self) -> PageAngle {
        match self {
            Self::Primary | Self::InPain => PageAngle::Urgency,
            Self::Skeptic => PageAngle::Trust,
            Self::Bundler => PageAngle::Value,
        }
    }

    /// Whether this persona's work is scheduled first in the launch calendar.
    pub fn is_lead_persona(self) -> bool {
        matches!(self, Self::Primary | Self::InPain)
    }

    /// How task descriptions refer to this persona.
    pub fn task_label(self) -> &'static str {
        match self {
            Self::Primary => "the primary avatar",
            Self::InPain => "Avatar 1 (In-Pain)",
            Self::Skeptic => "Avatar 2 (Skeptic)",
            Self::Bundler => "Avatar 3 (Bundler)",
        }
    }

    /// Archetypes used for a strategic choice, in plan order.
    pub fn for_choice(choice: StrategicChoice) -> &'static [Archetype] {
        match choice {
            StrategicChoice::Single => &[Self::Primary],
            StrategicChoice::Multi => &Self::MULTI,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A synthesized buyer persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarProfile {
    pub archetype: Archetype,
    pub name: String,
    pub pain: String,
    pub psychology: String,
    pub spin: String,
}

/// Derive the personas for a plan: one for single-target, three for multi.
pub fn generate_avatars(intel: &Intel) -> Vec<AvatarProfile> {
    Archetype::for_choice(intel.strategic_choice)
        .iter()
        .map(|&archetype| profile(intel, archetype))
        .collect()
}

fn profile(intel: &Intel, archetype: Archetype) -> AvatarProfile {
    let (name, pain, psychology, spin) = match archetype {
        Archetype::Primary => (
            format!("Primary Avatar ({})", intel.hungry_crowd),
            format!(
                "Directly experiencing the problem: \"{}\"",
                intel.burning_pain
            ),
            "Solution-focused and urgent. Needs immediate relief and assurance.".to_owned(),
            format!(
                "Focus on speed, a guaranteed solution, and the core benefit of the '{}'.",
                intel.bait
            ),
        ),
        Archetype::InPain => (
            "Avatar 1 (The \"In-Pain\")".to_owned(),
            format!(
                "Acute problem: \"{}\". They need a solution YESTERDAY.",
                intel.burning_pain
            ),
            "Driven by immediate need. Fear of the problem worsening is their primary \
             motivator. Price sensitive but speed is more important."
                .to_owned(),
            "Urgency, speed, and immediate relief. \"End Your [Pain Category] Problem Now\"."
                .to_owned(),
        ),
        Archetype::Skeptic => (
            "Avatar 2 (The \"Skeptic\")".to_owned(),
            "Has the problem but has been burned before. Fear of being ripped off is greater \
             than the pain itself."
                .to_owned(),
            "Distrustful of marketing claims. Needs proof, guarantees, and transparency. \
             Looks for reviews and signs of authority."
                .to_owned(),
            "Trust, honesty, and guarantees. \"The Honest [Service] Your Neighbors Trust\". \
             Use USP heavily."
                .to_owned(),
        ),
        Archetype::Bundler => (
            "Avatar 3 (The \"Bundler\")".to_owned(),
            "Has the problem, but is also looking for maximum value. Sees this as an \
             opportunity to solve other potential issues."
                .to_owned(),
            "Value and efficiency-driven. Wants the best deal and a comprehensive solution. \
             Thinks long-term."
                .to_owned(),
            "Value, savings, and comprehensive care. \"Get Your [Bait] PLUS a [Bonus Offer]\"."
                .to_owned(),
        ),
    };

    AvatarProfile {
        archetype,
        name,
        pain,
        psychology,
        spin,
    }
}
