//! CLI handlers for `battleplan intel` subcommands.
//!
//! Implements:
//! - `battleplan intel template`                 -- write a blank or sample intel file
//! - `battleplan intel set <file> <field> <v>`   -- fill one field in place
//! - `battleplan intel check <file>`             -- validate and summarise

use std::path::Path;

use anyhow::{Context, Result, bail};

use battleplan_core::intel::{
    FIELD_KEYS, IntelToml, is_field_key, missing_fields, read_intel_file, render_intel_template,
};
use battleplan_core::plan::{Archetype, generate_task_list};
use battleplan_core::{Intel, StrategicChoice};

use crate::IntelCommands;

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

pub fn run_intel_command(command: IntelCommands) -> Result<()> {
    match command {
        IntelCommands::Template {
            sample,
            multi,
            output,
            force,
        } => cmd_template(sample, multi, output.as_deref(), force),
        IntelCommands::Set { file, field, value } => cmd_set(&file, &field, &value),
        IntelCommands::Check { file } => cmd_check(&file),
    }
}

// -----------------------------------------------------------------------
// battleplan intel template
// -----------------------------------------------------------------------

fn cmd_template(sample: bool, multi: bool, output: Option<&str>, force: bool) -> Result<()> {
    let choice = match (sample, multi) {
        (_, true) => Some(StrategicChoice::Multi),
        (true, false) => Some(StrategicChoice::Single),
        (false, false) => None,
    };
    let doc = render_intel_template(choice);

    let Some(path) = output else {
        print!("{doc}");
        return Ok(());
    };

    if Path::new(path).exists() && !force {
        bail!("{path} already exists\nUse --force to overwrite.");
    }
    std::fs::write(path, &doc).with_context(|| format!("failed to write {path}"))?;

    println!("Intel template written to {path}");
    if choice.is_none() {
        println!();
        println!("Next: fill in every field, then run `battleplan generate {path}`.");
    }
    Ok(())
}

// -----------------------------------------------------------------------
// battleplan intel set <file> <field> <value>
// -----------------------------------------------------------------------

/// Set `[intel].<field>` in place, preserving comments and formatting.
fn cmd_set(file: &str, field: &str, value: &str) -> Result<()> {
    let value = normalize_field_value(field, value)?;
    set_intel_field(file, field, &value)?;
    println!("Set {field} in {file}");
    Ok(())
}

/// Validate a field name and canonicalise its value.
fn normalize_field_value(field: &str, value: &str) -> Result<String> {
    if !is_field_key(field) {
        bail!(
            "unknown intel field: {field:?}\nExpected one of: {}",
            FIELD_KEYS.join(", ")
        );
    }
    if field == "strategic_choice" {
        let choice: StrategicChoice = value.parse()?;
        return Ok(choice.to_string());
    }
    Ok(value.to_owned())
}

pub fn set_intel_field(path: &str, field: &str, value: &str) -> Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;

    let mut doc: toml_edit::DocumentMut = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("failed to parse {path} as TOML document"))?;

    let intel_table = doc
        .entry("intel")
        .or_insert(toml_edit::table())
        .as_table_mut()
        .with_context(|| format!("{path}: `intel` is not a table"))?;

    intel_table[field] = toml_edit::value(value);

    std::fs::write(path, doc.to_string()).with_context(|| format!("failed to write {path}"))?;
    tracing::debug!(path, field, "intel field updated");

    Ok(())
}

// -----------------------------------------------------------------------
// battleplan intel check <file>
// -----------------------------------------------------------------------

fn cmd_check(file: &str) -> Result<()> {
    match read_intel_file(file) {
        Ok(intel) => {
            print_summary(file, &intel);
            Ok(())
        }
        Err(err) => {
            let missing = missing_in_file(file);
            if !missing.is_empty() {
                eprintln!("Missing fields: {}", missing.join(", "));
                eprintln!("Fill them with `battleplan intel set {file} <field> <value>`.");
            }
            Err(err).context("intel check failed")
        }
    }
}

/// Fields left empty in a file that is otherwise well-formed TOML.
fn missing_in_file(file: &str) -> Vec<&'static str> {
    std::fs::read_to_string(file)
        .ok()
        .and_then(|content| toml::from_str::<IntelToml>(&content).ok())
        .map(|doc| missing_fields(&doc.intel))
        .unwrap_or_default()
}

fn print_summary(file: &str, intel: &Intel) {
    let choice = intel.strategic_choice;

    println!("Intel OK: {file}");
    println!();
    println!(
        "  Business:          {} ({})",
        intel.business_name, intel.contact_number
    );
    println!("  Audience:          {}", intel.audience());
    println!(
        "  Location:          {}",
        intel.location().unwrap_or("(none given)")
    );
    println!("  Bait:              {}", intel.bait);
    println!("  Language/market:   {}", intel.primary_language);
    println!("  Strategic choice:  {choice} ({})", choice.summary());
    println!("  Avatars:           {}", Archetype::for_choice(choice).len());
    println!("  Tasks:             {}", generate_task_list(choice).len());
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMENTED: &str = "# Intel\n\n[intel]\n# the crowd\nhungry_crowd = \"\"\n# the bait\nbait = \"old\"\n";

    #[test]
    fn set_preserves_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intel.toml");
        std::fs::write(&path, COMMENTED).unwrap();
        let path = path.to_str().unwrap();

        set_intel_field(path, "bait", "Free Brake Inspection").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("# the crowd\n"), "{content}");
        assert!(content.contains("# the bait\nbait = \"Free Brake Inspection\""), "{content}");
        assert!(content.contains("hungry_crowd = \"\""), "{content}");
    }

    #[test]
    fn set_adds_missing_field_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intel.toml");
        std::fs::write(&path, "# empty\n").unwrap();
        let path = path.to_str().unwrap();

        set_intel_field(path, "usp", "Honest mechanics").unwrap();

        let doc: IntelToml = toml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(doc.intel.usp, "Honest mechanics");
    }

    #[test]
    fn normalize_rejects_unknown_field() {
        let err = normalize_field_value("budget", "100").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("budget"));
        assert!(msg.contains("hungry_crowd"));
    }

    #[test]
    fn normalize_canonicalises_strategic_choice() {
        assert_eq!(
            normalize_field_value("strategic_choice", "  Multi-Avatar Domination ").unwrap(),
            "Multi-Avatar Domination"
        );
        assert!(normalize_field_value("strategic_choice", "Both").is_err());
        assert_eq!(normalize_field_value("bait", " x ").unwrap(), " x ");
    }

    #[test]
    fn missing_in_file_lists_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intel.toml");
        std::fs::write(&path, render_intel_template(None)).unwrap();
        assert_eq!(missing_in_file(path.to_str().unwrap()), FIELD_KEYS.to_vec());

        assert!(missing_in_file("/nonexistent/intel.toml").is_empty());
    }
}
