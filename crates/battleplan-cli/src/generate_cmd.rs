//! `battleplan generate <file>`: intel in, rendered battle plan out.

use anyhow::{Context, Result};

use battleplan_core::intel::read_intel_file;
use battleplan_core::{BattlePlan, generate_battle_plan};

use crate::config::{BattleplanConfig, OutputFormat};
use crate::render::render_text;

pub fn run_generate(
    file: &str,
    format: Option<&str>,
    view: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let config = BattleplanConfig::resolve(format, view)?;

    let intel =
        read_intel_file(file).with_context(|| format!("failed to load intel from {file}"))?;
    let plan = generate_battle_plan(&intel);
    let rendered = render_plan(&plan, config)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("cannot write output file: {path}"))?;
            println!(
                "Battle plan written to {path} ({} avatar(s), {} tasks, format {})",
                plan.avatars.len(),
                plan.tasks.len(),
                config.format
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Render a plan in the resolved format. JSON and TOML carry the whole plan
/// regardless of view.
pub fn render_plan(plan: &BattlePlan, config: BattleplanConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(plan, config.view)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(plan).context("failed to serialize plan as JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(plan).context("failed to serialize plan as TOML")
        }
    }
}
