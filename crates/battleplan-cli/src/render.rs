//! Plain-text rendering of a battle plan.
//!
//! Two views mirror the operational documents: the War Binder (phases 1-8)
//! and the Launch Cadence (phases 9-10). Every rendering ends with the
//! "Next Steps" menu.

use battleplan_core::BattlePlan;
use battleplan_core::plan::{ProjectTask, TrackingEvent};

use crate::config::View;

const NEXT_STEPS: [(&str, &str); 5] = [
    (
        "Deploy Tracking First",
        "Implement the full Phase 8 schema in GTM/GA4 before a single line of code is written \
         for the landing pages. No data, no decisions.",
    ),
    (
        "Build the 'Bulldog' Nurture",
        "Construct the Phase 7 GHL workflow immediately. It must be live and tested before \
         traffic runs.",
    ),
    (
        "A/B Test Headlines",
        "Launch with your top headline choice from Phase 2-4, but have the other two ready for \
         a split test. The headline is 80% of the battle.",
    ),
    (
        "Set Up Retargeting Audiences",
        "Activate the 'Abandoners' audience from Phase 8 in your ad platforms now. It needs \
         time to populate.",
    ),
    (
        "Role-Play the Sales Call",
        "Use the Avatar profiles from Phase 1 to train the person who will be calling these \
         leads. They must speak the lead's language of pain and desire.",
    ),
];

/// Render the selected view followed by the Next Steps menu.
pub fn render_text(plan: &BattlePlan, view: View) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("COMMAND CENTER: OPERATIONAL DOCUMENTS\n");
    out.push_str("All strategic assets and project plans. Ready for execution.\n");

    if view.shows_war_binder() {
        war_binder(&mut out, plan);
    }
    if view.shows_launch_cadence() {
        launch_cadence(&mut out, plan);
    }
    next_steps(&mut out);
    out
}

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
}

fn bullets<'a>(out: &mut String, indent: &str, items: impl IntoIterator<Item = &'a String>) {
    for item in items {
        out.push_str(&format!("{indent}- {item}\n"));
    }
}

// -----------------------------------------------------------------------
// War Binder
// -----------------------------------------------------------------------

pub fn war_binder(out: &mut String, plan: &BattlePlan) {
    heading(out, "Phase 1: Avatar Deep Dive");
    for avatar in &plan.avatars {
        out.push_str(&format!("\n{}\n", avatar.name));
        out.push_str(&format!("  Pain: {}\n", avatar.pain));
        out.push_str(&format!("  Core Psychology: {}\n", avatar.psychology));
        out.push_str(&format!("  The \"Spin\": {}\n", avatar.spin));
    }

    heading(out, "Phases 2-4: The Conversion Machine (Landing Pages)");
    for lp in &plan.landing_pages {
        out.push_str(&format!("\nAvatar: {}\n", lp.avatar_name));
        out.push_str(&format!("  Page Slug: {}\n", lp.slug));
        out.push_str("  A - Attention (Headlines):\n");
        bullets(out, "    ", &lp.headlines);
        out.push_str("  I - Interest (Hook):\n");
        out.push_str(&format!(
            "    \"{}\" Common Enemy: {}\n",
            lp.interest_hook, lp.common_enemy
        ));
        out.push_str("  D - Desire (Benefits & Social Proof):\n");
        bullets(out, "    ", &lp.benefits);
        if lp.testimonials.is_empty() {
            out.push_str(
                "    Placeholders for 3 testimonials focused on trust, speed, and results.\n",
            );
        } else {
            bullets(out, "    ", &lp.testimonials);
        }
        out.push_str("  A - Action (CTA):\n");
        out.push_str(&format!(
            "    Minimalist Form: Name, Email, Phone. CTA Button: {}\n",
            lp.cta
        ));
    }
    out.push_str("\nCRITICAL GHL IMPLEMENTATION\n");
    out.push_str("All forms redirect to /merci?avatar=[type]\n");

    heading(out, "Phase 5: Driving the Crowd (Traffic)");
    for strategy in &plan.traffic {
        out.push_str(&format!("\nStrategy for: {}\n", strategy.avatar_name));
        out.push_str("  Paid Traffic (Google Ads Copy):\n");
        bullets(out, "    ", &strategy.ad_copies);
        out.push_str("  Organic Traffic (SEO 'Pain' Keywords):\n");
        out.push_str(&format!("    {}\n", strategy.pain_keywords.join(", ")));
        out.push_str("  Retargeting Message (For 'Abandoners'):\n");
        out.push_str(&format!("    \"{}\"\n", strategy.retargeting_message));
    }

    heading(out, "Phase 6: Brand & Design");
    let brand = &plan.brand;
    out.push_str(&format!("Voice: {}\n", brand.voice));
    out.push_str("Colors:\n");
    out.push_str(&format!("  Trust:      {}\n", brand.colors.trust));
    out.push_str(&format!("  Background: {}\n", brand.colors.background));
    out.push_str(&format!("  ACTION:     {}\n", brand.colors.action));
    out.push_str(&format!("Design: {}\n", brand.design));

    heading(out, "Phase 7: The Arsenal (GHL Tech Stack)");
    out.push_str("4-Stage Sales Pipeline:\n");
    out.push_str(&format!("  {}\n", plan.tech_stack.pipeline.join(" -> ")));
    out.push_str("Segmented Workflows:\n");
    for workflow in &plan.tech_stack.workflows {
        out.push_str(&format!("  {}:\n", workflow.trigger));
        for (step, action) in workflow.actions.iter().enumerate() {
            out.push_str(&format!("    {}. {action}\n", step + 1));
        }
    }

    heading(out, "Phase 8: The Ruthless Tracking Schema (GTM & GA4)");
    let variable = &plan.tracking.variable;
    out.push_str("GTM Variable: The Bulletproof Weapon\n");
    out.push_str(&format!(
        "  {} (Type: {}, Key: '{}')\n",
        variable.name, variable.kind, variable.key
    ));
    out.push_str("Key GTM Triggers & GA4 Events:\n");
    for event in &plan.tracking.events {
        tracking_event(out, event);
    }
    out.push_str("GA4 Audiences:\n");
    for audience in &plan.tracking.audiences {
        out.push_str(&format!("  {}: {}\n", audience.name, audience.description));
    }
}

fn tracking_event(out: &mut String, event: &TrackingEvent) {
    out.push_str(&format!("  {}: Trigger on {}\n", event.name, event.trigger));
    for (param, value) in &event.parameters {
        out.push_str(&format!("    Must pass \"{param}\" = {value}\n"));
    }
}

// -----------------------------------------------------------------------
// Launch Cadence
// -----------------------------------------------------------------------

pub fn launch_cadence(out: &mut String, plan: &BattlePlan) {
    heading(out, "Phase 9: The 7-Phase Launch Plan (Project Task List)");
    task_table(out, &plan.tasks);

    heading(out, "Phase 10: 7-Day Launch Calendar");
    for day in &plan.calendar.launch_calendar {
        out.push_str(&format!("\nDay {}: {}\n", day.day, day.focus));
        bullets(out, "  ", &day.tasks);
    }
}

fn task_table(out: &mut String, tasks: &[ProjectTask]) {
    let phase_w = tasks
        .iter()
        .map(|t| t.phase.label().len())
        .max()
        .unwrap_or(5)
        .max(5);
    let id_w = 7;
    let status_w = tasks
        .iter()
        .map(|t| t.status.to_string().len())
        .max()
        .unwrap_or(6)
        .max(6);

    out.push_str(&format!(
        "{:<phase_w$}  {:<id_w$}  {:<status_w$}  DESCRIPTION\n",
        "PHASE", "TASK ID", "STATUS"
    ));
    out.push_str(&format!(
        "{:-<phase_w$}  {:-<id_w$}  {:-<status_w$}  {:-<11}\n",
        "", "", "", ""
    ));
    for task in tasks {
        out.push_str(&format!(
            "{:<phase_w$}  {:<id_w$}  {:<status_w$}  {}\n",
            task.phase.label(),
            task.id,
            task.status.to_string(),
            task.description
        ));
    }
}

// -----------------------------------------------------------------------
// Next Steps
// -----------------------------------------------------------------------

fn next_steps(out: &mut String) {
    heading(out, "Conclusion: The 'Next Steps' Menu");
    out.push_str(
        "Momentum is critical. Choose your next target to maintain operational velocity.\n\n",
    );
    for (index, (title, body)) in NEXT_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {title}: {body}\n", index + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battleplan_core::{Intel, StrategicChoice, generate_battle_plan};

    fn plan(choice: StrategicChoice) -> BattlePlan {
        generate_battle_plan(&Intel {
            hungry_crowd: "Homeowners in Terrebonne, QC.".to_owned(),
            burning_pain: "brakes are grinding".to_owned(),
            bait: "Free Brake Inspection".to_owned(),
            usp: "Honest mechanics".to_owned(),
            business_name: "Garage XYZ".to_owned(),
            contact_number: "555-123-4567".to_owned(),
            primary_language: "French-first".to_owned(),
            strategic_choice: choice,
        })
    }

    #[test]
    fn war_binder_view_omits_cadence() {
        let text = render_text(&plan(StrategicChoice::Single), View::WarBinder);
        assert!(text.contains("Phase 1: Avatar Deep Dive"));
        assert!(text.contains("Phase 8: The Ruthless Tracking Schema (GTM & GA4)"));
        assert!(text.contains("All forms redirect to /merci?avatar=[type]"));
        assert!(!text.contains("Phase 9:"));
        assert!(text.contains("Conclusion: The 'Next Steps' Menu"));
    }

    #[test]
    fn launch_cadence_view_omits_binder() {
        let text = render_text(&plan(StrategicChoice::Multi), View::LaunchCadence);
        assert!(!text.contains("Phase 1: Avatar Deep Dive"));
        assert!(text.contains("Phase 10: 7-Day Launch Calendar"));
        assert!(text.contains("Day 6: Final Review & Client Walkthrough"));
        assert!(text.contains("1. Deploy Tracking First:"));
    }

    #[test]
    fn binder_lists_every_persona() {
        let text = render_text(&plan(StrategicChoice::Multi), View::All);
        assert_eq!(text.matches("Strategy for: ").count(), 3);
        assert_eq!(text.matches("\nAvatar: ").count(), 3);
        assert!(text.contains("Page Slug: /free-brake-inspection-the skeptic"));
        assert!(text.contains("New Lead -> Contacted -> Booked -> Won/Lost"));
        assert!(text.contains("Must pass \"avatar_type\" = {{url_avatar_type}}"));
    }

    #[test]
    fn task_table_has_a_row_per_task() {
        let plan = plan(StrategicChoice::Single);
        let mut out = String::new();
        task_table(&mut out, &plan.tasks);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), plan.tasks.len() + 2);
        assert!(lines[0].starts_with("PHASE"));
        assert!(lines[2].starts_with("1. Foundations"));
        assert!(lines[2].contains("1.01"));
        assert!(lines[2].contains("To-Do"));
    }

    #[test]
    fn next_steps_always_present() {
        let text = render_text(&plan(StrategicChoice::Single), View::WarBinder);
        for (index, (title, _)) in NEXT_STEPS.iter().enumerate() {
            assert!(text.contains(&format!("{}. {title}:", index + 1)));
        }
    }
}
