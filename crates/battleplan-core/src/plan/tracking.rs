//! Phase 8: the tracking schema (tag manager variable, events, audiences).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::landing::LandingPageBlueprint;

/// Tag manager variable that surfaces the `avatar` URL parameter.
pub const AVATAR_VARIABLE: &str = "url_avatar_type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSchema {
    pub variable: TrackingVariable,
    pub events: Vec<TrackingEvent>,
    pub audiences: Vec<Audience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub name: String,
    pub trigger: String,
    /// Custom parameters the event tag must send.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub name: String,
    pub description: String,
}

pub fn generate_tracking_schema(landing_pages: &[LandingPageBlueprint]) -> TrackingSchema {
    let slugs = landing_pages
        .iter()
        .map(|lp| lp.slug.strip_prefix('/').unwrap_or(&lp.slug))
        .collect::<Vec<_>>()
        .join("|");

    TrackingSchema {
        variable: TrackingVariable {
            name: AVATAR_VARIABLE.to_owned(),
            kind: "URL Parameter".to_owned(),
            key: "avatar".to_owned(),
        },
        events: vec![
            TrackingEvent {
                name: "view_landing_page".to_owned(),
                trigger: format!("Page View on URL slugs matching RegEx: /({slugs})$"),
                parameters: BTreeMap::new(),
            },
            TrackingEvent {
                name: "generate_lead".to_owned(),
                trigger: "Page View on URL Path containing /merci".to_owned(),
                parameters: BTreeMap::from([(
                    "avatar_type".to_owned(),
                    format!("{{{{{AVATAR_VARIABLE}}}}}"),
                )]),
            },
        ],
        audiences: vec![
            Audience {
                name: "Abandoners".to_owned(),
                description: "Users who triggered 'view_landing_page' but not 'generate_lead' \
                              in the last 7 days."
                    .to_owned(),
            },
            Audience {
                name: "Converted".to_owned(),
                description: "Users who triggered 'generate_lead' in the last 90 days. \
                              (For exclusion)."
                    .to_owned(),
            },
        ],
    }
}
