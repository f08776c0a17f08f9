//! Phase 10: the 7-day launch calendar, bucketed from the task list.

use serde::{Deserialize, Serialize};

use super::tasks::{ProjectTask, TaskPhase};

/// Day 6 is a client walkthrough, not drawn from the task list.
pub const REVIEW_DAY_TASKS: [&str; 2] = [
    "Review all assets with client.",
    "Get final approval for launch.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchCalendar {
    pub launch_calendar: Vec<CalendarDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// 1 through 7.
    pub day: u8,
    pub focus: String,
    /// Entries rendered as `"<id>: <description>"`.
    pub tasks: Vec<String>,
}

/// Which day a task is scheduled on.
fn day_for(task: &ProjectTask) -> u8 {
    match task.phase {
        TaskPhase::Foundations | TaskPhase::TrackingTech => 1,
        TaskPhase::GhlAutomation => 2,
        TaskPhase::LpBuild if task.avatar.is_some_and(|a| a.is_lead_persona()) => 3,
        TaskPhase::LpBuild | TaskPhase::AdPlatformBuild => 4,
        TaskPhase::TestingQa => 5,
        TaskPhase::Launch => 7,
    }
}

pub fn generate_calendar(tasks: &[ProjectTask]) -> LaunchCalendar {
    let entries_for = |day: u8| -> Vec<String> {
        tasks
            .iter()
            .filter(|t| day_for(t) == day)
            .map(|t| format!("{}: {}", t.id, t.description))
            .collect()
    };

    let days = [
        (1, "Foundations & Tracking"),
        (2, "GHL Automation"),
        (3, "Landing Page Build (Part 1)"),
        (4, "Landing Page Build (Part 2) & Ad Build"),
        (5, "Integration & Testing"),
        (6, "Final Review & Client Walkthrough"),
        (7, "Launch & Monitor"),
    ];

    LaunchCalendar {
        launch_calendar: days
            .into_iter()
            .map(|(day, focus)| CalendarDay {
                day,
                focus: focus.to_owned(),
                tasks: if day == 6 {
                    REVIEW_DAY_TASKS.iter().map(|s| s.to_string()).collect()
                } else {
                    entries_for(day)
                },
            })
            .collect(),
    }
}
