//! Phase 7: the arsenal (CRM pipeline and nurture workflows).
//!
//! Workflows are documentation of an automation to build in the CRM, not
//! something this crate runs.

use serde::{Deserialize, Serialize};

use super::avatar::{Archetype, AvatarProfile};
use crate::intel::Intel;

/// Sales pipeline stages, in order.
pub const PIPELINE_STAGES: [&str; 4] = ["New Lead", "Contacted", "Booked", "Won/Lost"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub pipeline: Vec<String>,
    pub workflows: Vec<GhlWorkflow>,
}

/// One form-submission workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhlWorkflow {
    pub archetype: Archetype,
    pub trigger: String,
    /// Eight steps in execution order.
    pub actions: Vec<String>,
}

pub fn generate_tech_stack(intel: &Intel, avatars: &[AvatarProfile]) -> TechStack {
    TechStack {
        pipeline: PIPELINE_STAGES.iter().map(|s| s.to_string()).collect(),
        workflows: avatars.iter().map(|avatar| workflow(intel, avatar)).collect(),
    }
}

fn workflow(intel: &Intel, avatar: &AvatarProfile) -> GhlWorkflow {
    let name = &avatar.name;
    let Intel {
        bait,
        usp,
        business_name: business,
        contact_number: phone,
        ..
    } = intel;

    GhlWorkflow {
        archetype: avatar.archetype,
        trigger: format!("Form Submitted on Landing Page for '{name}'"),
        actions: vec![
            "Create/Update Opportunity in Pipeline Stage \"New Lead\".".to_owned(),
            format!(
                "Internal Notification (SMS to {phone}): \"🚨 URGENT LEAD ({name}): \
                 {{{{contact.name}}}}, {{{{contact.phone}}}}. From {name} funnel. CALL NOW.\""
            ),
            format!(
                "External SMS to Lead (Confirmation): \"Hi {{{{contact.first_name}}}}, this is \
                 {business}. We received your request for the {bait}. We'll call you from \
                 {phone} within 15 minutes to confirm. {usp}\""
            ),
            "Wait 2 hours (if no reply).".to_owned(),
            "Send Email: \"Following up on your request...\"".to_owned(),
            "Wait 24 hours (if no reply).".to_owned(),
            format!(
                "Send SMS: \"Hi {{{{contact.first_name}}}}, just checking if you had any \
                 questions about the {bait}?\""
            ),
            "Stop nurture sequence on any reply.".to_owned(),
        ],
    }
}
