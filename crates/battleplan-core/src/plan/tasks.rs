//! Phase 9: the seven-phase launch task list.
//!
//! The list is assembled in two passes: [`task_outline`] lays out every
//! task in final order, including the extra per-avatar tasks of a
//! multi-avatar plan, and [`assign_ids`] then numbers the whole list once.
//! Ids are global positions (`"4.15"` is the 15th task overall, in phase 4),
//! so nothing may be inserted after numbering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::avatar::Archetype;
use crate::intel::StrategicChoice;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Project phase a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskPhase {
    #[serde(rename = "1. Foundations")]
    Foundations,
    #[serde(rename = "2. Tracking & Tech")]
    TrackingTech,
    #[serde(rename = "3. GHL Automation")]
    GhlAutomation,
    #[serde(rename = "4. LP Build")]
    LpBuild,
    #[serde(rename = "5. Ad Platform Build")]
    AdPlatformBuild,
    #[serde(rename = "6. Testing & QA")]
    TestingQa,
    #[serde(rename = "7. Launch")]
    Launch,
}

impl TaskPhase {
    pub const ALL: [TaskPhase; 7] = [
        Self::Foundations,
        Self::TrackingTech,
        Self::GhlAutomation,
        Self::LpBuild,
        Self::AdPlatformBuild,
        Self::TestingQa,
        Self::Launch,
    ];

    /// 1-based phase number, the leading digit of the label.
    pub fn number(self) -> u8 {
        match self {
            Self::Foundations => 1,
            Self::TrackingTech => 2,
            Self::GhlAutomation => 3,
            Self::LpBuild => 4,
            Self::AdPlatformBuild => 5,
            Self::TestingQa => 6,
            Self::Launch => 7,
        }
    }

    /// Full label, e.g. `"4. LP Build"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Foundations => "1. Foundations",
            Self::TrackingTech => "2. Tracking & Tech",
            Self::GhlAutomation => "3. GHL Automation",
            Self::LpBuild => "4. LP Build",
            Self::AdPlatformBuild => "5. Ad Platform Build",
            Self::TestingQa => "6. Testing & QA",
            Self::Launch => "7. Launch",
        }
    }
}

impl fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress of a task. Generation always produces [`TaskStatus::ToDo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To-Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ToDo => "To-Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        };
        f.write_str(s)
    }
}

impl FromStr for TaskStatus {
    type Err = TaskStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To-Do" => Ok(Self::ToDo),
            "In Progress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            other => Err(TaskStatusParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`TaskStatus`] string.
#[derive(Debug, Clone)]
pub struct TaskStatusParseError(pub String);

impl fmt::Display for TaskStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task status: {:?}", self.0)
    }
}

impl std::error::Error for TaskStatusParseError {}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// A numbered project task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub phase: TaskPhase,
    /// `"<phase number>.<global position, two digits>"`.
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
    /// Persona this task builds for; `None` for shared work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Archetype>,
}

/// A task before numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub phase: TaskPhase,
    pub description: String,
    pub avatar: Option<Archetype>,
}

impl TaskDraft {
    fn shared(phase: TaskPhase, description: &str) -> Self {
        Self {
            phase,
            description: description.to_owned(),
            avatar: None,
        }
    }

    fn for_avatar(phase: TaskPhase, avatar: Archetype, description: String) -> Self {
        Self {
            phase,
            description,
            avatar: Some(avatar),
        }
    }
}

/// Build the numbered task list for a strategic choice.
pub fn generate_task_list(choice: StrategicChoice) -> Vec<ProjectTask> {
    assign_ids(task_outline(choice))
}

/// Number drafts by their position in the full list.
pub fn assign_ids(drafts: Vec<TaskDraft>) -> Vec<ProjectTask> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| ProjectTask {
            id: format!("{}.{:02}", draft.phase.number(), index + 1),
            phase: draft.phase,
            description: draft.description,
            status: TaskStatus::default(),
            avatar: draft.avatar,
        })
        .collect()
}

/// Every task in final order, before numbering.
pub fn task_outline(choice: StrategicChoice) -> Vec<TaskDraft> {
    use TaskPhase::*;

    let avatars = Archetype::for_choice(choice);
    let per_avatar = |phase: TaskPhase, template: fn(&str) -> String| {
        avatars
            .iter()
            .map(move |&a| TaskDraft::for_avatar(phase, a, template(a.task_label())))
    };

    let mut tasks = Vec::with_capacity(34);

    for description in [
        "Finalize and approve all strategic copy from the War Binder (Avatars, LPs, Ads).",
        "Set up GHL account, including phone number and user access.",
        "Set up Google Tag Manager and Google Analytics 4 properties.",
        "Install GTM container snippet on all web properties.",
        "Purchase domain for landing pages.",
    ] {
        tasks.push(TaskDraft::shared(Foundations, description));
    }

    for description in [
        "Implement GTM Variable \"url_avatar_type\" as defined in Phase 8.",
        "Create GTM Trigger and GA4 Event Tag for \"view_landing_page\".",
        "Create GTM Trigger and GA4 Event Tag for \"generate_lead\", passing \"avatar_type\" parameter.",
        "Create \"Abandoners\" and \"Converted\" audiences in GA4.",
        "Build the 4-stage sales pipeline in GHL.",
    ] {
        tasks.push(TaskDraft::shared(TrackingTech, description));
    }

    tasks.extend(per_avatar(GhlAutomation, |who| {
        format!("Build the GHL workflow for {who}.")
    }));
    for description in [
        "Thoroughly test all GHL workflows with test leads.",
        "Confirm internal and external SMS/email are firing correctly.",
    ] {
        tasks.push(TaskDraft::shared(GhlAutomation, description));
    }

    tasks.extend(per_avatar(LpBuild, |who| format!("Build landing page for {who}.")));
    for description in [
        "Build the universal \"/merci\" thank you page.",
        "Integrate GHL forms on all landing pages, ensuring they pass avatar type to thank you page.",
        "Ensure all pages are mobile responsive and load in under 2 seconds.",
    ] {
        tasks.push(TaskDraft::shared(LpBuild, description));
    }

    tasks.push(TaskDraft::shared(
        AdPlatformBuild,
        "Set up Google Ads account and billing.",
    ));
    tasks.extend(per_avatar(AdPlatformBuild, |who| {
        format!("Create ad campaign and ad group for {who}.")
    }));
    for description in [
        "Add \"Pain Keywords\" to respective ad groups.",
        "Write and upload all ad copy variations.",
        "Link GA4 audiences to Google Ads for retargeting and exclusion.",
    ] {
        tasks.push(TaskDraft::shared(AdPlatformBuild, description));
    }

    for description in [
        "Perform end-to-end test: Click ad -> View Lander -> Submit Form -> Check GTM/GA4 Events -> Check GHL Opportunity -> Receive All Notifications.",
        "Verify lead data is passing correctly at every stage.",
        "Review all copy for typos and grammatical errors.",
    ] {
        tasks.push(TaskDraft::shared(TestingQa, description));
    }

    for description in [
        "Set daily budgets and activate Google Ads campaigns.",
        "Monitor GHL and GA4 in real-time for the first 2 hours.",
        "Confirm with client they are receiving and actioning internal notifications.",
    ] {
        tasks.push(TaskDraft::shared(Launch, description));
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[ProjectTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn single_task_count() {
        assert_eq!(generate_task_list(StrategicChoice::Single).len(), 28);
    }

    #[test]
    fn multi_adds_two_tasks_at_each_insertion_point() {
        let single = generate_task_list(StrategicChoice::Single);
        let multi = generate_task_list(StrategicChoice::Multi);
        assert_eq!(multi.len(), single.len() + 6);
    }

    #[test]
    fn ids_are_global_and_sequential() {
        for choice in [StrategicChoice::Single, StrategicChoice::Multi] {
            let tasks = generate_task_list(choice);
            for (index, task) in tasks.iter().enumerate() {
                let (phase, seq) = task.id.split_once('.').expect("id has a dot");
                assert_eq!(phase, task.phase.number().to_string());
                assert_eq!(seq.parse::<usize>().unwrap(), index + 1);
                assert_eq!(seq.len(), 2);
            }
        }
    }

    #[test]
    fn single_phase_boundaries() {
        let tasks = generate_task_list(StrategicChoice::Single);
        let ids = ids(&tasks);
        assert_eq!(ids[0], "1.01");
        assert_eq!(ids[5], "2.06");
        assert_eq!(ids[10], "3.11");
        assert_eq!(ids[13], "4.14");
        assert_eq!(ids[27], "7.28");
    }

    #[test]
    fn multi_splices_after_first_avatar_task() {
        let tasks = generate_task_list(StrategicChoice::Multi);
        let ghl: Vec<&str> = tasks
            .iter()
            .filter(|t| t.phase == TaskPhase::GhlAutomation)
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(
            ghl,
            vec![
                "Build the GHL workflow for Avatar 1 (In-Pain).",
                "Build the GHL workflow for Avatar 2 (Skeptic).",
                "Build the GHL workflow for Avatar 3 (Bundler).",
                "Thoroughly test all GHL workflows with test leads.",
                "Confirm internal and external SMS/email are firing correctly.",
            ]
        );

        let ads: Vec<&str> = tasks
            .iter()
            .filter(|t| t.phase == TaskPhase::AdPlatformBuild)
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(ads[0], "Set up Google Ads account and billing.");
        assert_eq!(ads[1], "Create ad campaign and ad group for Avatar 1 (In-Pain).");
        assert_eq!(ads[3], "Create ad campaign and ad group for Avatar 3 (Bundler).");
        assert_eq!(ads[4], "Add \"Pain Keywords\" to respective ad groups.");
    }

    #[test]
    fn single_refers_to_primary_avatar() {
        let tasks = generate_task_list(StrategicChoice::Single);
        let lp = tasks
            .iter()
            .find(|t| t.phase == TaskPhase::LpBuild)
            .unwrap();
        assert_eq!(lp.description, "Build landing page for the primary avatar.");
        assert_eq!(lp.avatar, Some(Archetype::Primary));
        assert!(!tasks.iter().any(|t| t.description.contains("Avatar 2")));
    }

    #[test]
    fn all_tasks_start_to_do() {
        let tasks = generate_task_list(StrategicChoice::Multi);
        assert!(tasks.iter().all(|t| t.status == TaskStatus::ToDo));
    }

    #[test]
    fn assign_ids_numbers_past_ninety_nine() {
        let drafts = (0..100)
            .map(|_| TaskDraft::shared(TaskPhase::Launch, "x"))
            .collect();
        let tasks = assign_ids(drafts);
        assert_eq!(tasks[8].id, "7.09");
        assert_eq!(tasks[99].id, "7.100");
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(status.to_string().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("todo".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn phase_serializes_as_label() {
        let json = serde_json::to_string(&TaskPhase::TrackingTech).unwrap();
        assert_eq!(json, "\"2. Tracking & Tech\"");
        for phase in TaskPhase::ALL {
            assert!(phase.label().starts_with(&format!("{}.", phase.number())));
        }
    }
}
