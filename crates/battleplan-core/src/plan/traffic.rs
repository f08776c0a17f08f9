//! Phase 5: driving the crowd (paid, organic, retargeting copy).

use serde::{Deserialize, Serialize};

use super::avatar::{Archetype, AvatarProfile};
use super::landing::LandingPageBlueprint;
use crate::intel::Intel;

/// Location used in keywords when the crowd names none.
const DEFAULT_LOCATION: &str = "local";

/// Traffic copy for one persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficStrategy {
    pub archetype: Archetype,
    pub avatar_name: String,
    pub ad_copies: Vec<String>,
    pub pain_keywords: Vec<String>,
    pub retargeting_message: String,
}

/// Derive one strategy per avatar.
///
/// Each avatar is paired with the landing page carrying the same archetype.
/// An avatar without a page is skipped with a warning; the pipeline in
/// [`crate::plan::generate_battle_plan`] always produces matching pages.
pub fn generate_traffic_strategies(
    intel: &Intel,
    avatars: &[AvatarProfile],
    landing_pages: &[LandingPageBlueprint],
) -> Vec<TrafficStrategy> {
    let pain_keywords = pain_keywords(intel);
    let retargeting_message = format!(
        "Still dealing with '{}'? Your offer for a {} is about to expire. Don't wait until \
         it's too late. Claim it now.",
        intel.burning_pain, intel.bait
    );

    avatars
        .iter()
        .filter_map(|avatar| {
            let Some(page) = landing_pages
                .iter()
                .find(|lp| lp.archetype == avatar.archetype)
            else {
                tracing::warn!(
                    archetype = %avatar.archetype,
                    "no landing page for avatar; skipping traffic strategy"
                );
                return None;
            };

            Some(TrafficStrategy {
                archetype: avatar.archetype,
                avatar_name: avatar.name.clone(),
                ad_copies: ad_copies(intel, page),
                pain_keywords: pain_keywords.clone(),
                retargeting_message: retargeting_message.clone(),
            })
        })
        .collect()
}

/// The first two headlines verbatim, then a USP + bait line.
fn ad_copies(intel: &Intel, page: &LandingPageBlueprint) -> Vec<String> {
    page.headlines
        .iter()
        .take(2)
        .cloned()
        .chain(std::iter::once(format!(
            "{}. Claim Your {} Today.",
            intel.usp, intel.bait
        )))
        .collect()
}

fn pain_keywords(intel: &Intel) -> Vec<String> {
    let audience = intel.audience();
    let location = intel.location().unwrap_or(DEFAULT_LOCATION);

    vec![
        format!("fix \"{}\"", intel.burning_pain),
        format!("{audience} help with [problem]"),
        format!("best {} near me", intel.business_name),
        format!("[problem] cost {location}"),
        format!("{} {location}", intel.bait),
    ]
}
