//! Battle plan generation.
//!
//! [`generate_battle_plan`] runs the eight generators in order. Each is a
//! pure function of the intel and of earlier outputs; the same intel always
//! yields the same plan.

pub mod avatar;
pub mod brand;
pub mod calendar;
pub mod landing;
pub mod tasks;
pub mod tracking;
pub mod traffic;
pub mod workflow;

pub use avatar::{Archetype, AvatarProfile, PageAngle, generate_avatars};
pub use brand::{BrandColors, BrandSpec, generate_brand};
pub use calendar::{CalendarDay, LaunchCalendar, generate_calendar};
pub use landing::{LandingPageBlueprint, generate_landing_pages, slugify};
pub use tasks::{ProjectTask, TaskPhase, TaskStatus, generate_task_list};
pub use tracking::{Audience, TrackingEvent, TrackingSchema, TrackingVariable, generate_tracking_schema};
pub use traffic::{TrafficStrategy, generate_traffic_strategies};
pub use workflow::{GhlWorkflow, TechStack, generate_tech_stack};

use serde::{Deserialize, Serialize};

use crate::intel::Intel;

/// The full generated plan.
///
/// Serialized keys follow the phase numbering of the War Binder
/// (`phase1`, `phase2_4`, ... `phase10`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePlan {
    #[serde(rename = "phase1")]
    pub avatars: Vec<AvatarProfile>,
    #[serde(rename = "phase2_4")]
    pub landing_pages: Vec<LandingPageBlueprint>,
    #[serde(rename = "phase5")]
    pub traffic: Vec<TrafficStrategy>,
    #[serde(rename = "phase6")]
    pub brand: BrandSpec,
    #[serde(rename = "phase7")]
    pub tech_stack: TechStack,
    #[serde(rename = "phase8")]
    pub tracking: TrackingSchema,
    #[serde(rename = "phase9")]
    pub tasks: Vec<ProjectTask>,
    #[serde(rename = "phase10")]
    pub calendar: LaunchCalendar,
}

impl BattlePlan {
    pub fn landing_page(&self, archetype: Archetype) -> Option<&LandingPageBlueprint> {
        self.landing_pages.iter().find(|lp| lp.archetype == archetype)
    }

    pub fn traffic_strategy(&self, archetype: Archetype) -> Option<&TrafficStrategy> {
        self.traffic.iter().find(|t| t.archetype == archetype)
    }

    pub fn workflow(&self, archetype: Archetype) -> Option<&GhlWorkflow> {
        self.tech_stack
            .workflows
            .iter()
            .find(|w| w.archetype == archetype)
    }
}

/// Generate the battle plan for validated intel.
#[tracing::instrument(skip_all, fields(choice = %intel.strategic_choice))]
pub fn generate_battle_plan(intel: &Intel) -> BattlePlan {
    let avatars = generate_avatars(intel);
    tracing::debug!(count = avatars.len(), "avatars generated");

    let landing_pages = generate_landing_pages(intel, &avatars);
    tracing::debug!(count = landing_pages.len(), "landing pages generated");

    let traffic = generate_traffic_strategies(intel, &avatars, &landing_pages);
    let brand = generate_brand();
    let tech_stack = generate_tech_stack(intel, &avatars);
    let tracking = generate_tracking_schema(&landing_pages);

    let tasks = generate_task_list(intel.strategic_choice);
    tracing::debug!(count = tasks.len(), "task list generated");
    let calendar = generate_calendar(&tasks);

    tracing::info!(
        avatars = avatars.len(),
        tasks = tasks.len(),
        "battle plan generated"
    );

    BattlePlan {
        avatars,
        landing_pages,
        traffic,
        brand,
        tech_stack,
        tracking,
        tasks,
        calendar,
    }
}
