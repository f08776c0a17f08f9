use std::borrow::Cow;
use std::io::Write;

use anyhow::Context;

use battleplan_core::generate_battle_plan;
use battleplan_core::intel::read_intel_file;
use battleplan_core::plan::ProjectTask;

/// Export the plan's task list as CSV.
pub fn run_export_tasks(file: &str, output: Option<&str>) -> anyhow::Result<()> {
    let intel =
        read_intel_file(file).with_context(|| format!("failed to load intel from {file}"))?;
    let plan = generate_battle_plan(&intel);

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    write_tasks_csv(&mut writer, &plan.tasks)?;
    writer.flush()?;

    if let Some(path) = output {
        println!("Exported {} tasks to {path}", plan.tasks.len());
    }

    Ok(())
}

pub fn write_tasks_csv(writer: &mut dyn Write, tasks: &[ProjectTask]) -> std::io::Result<()> {
    writeln!(writer, "phase,id,description,status")?;

    for task in tasks {
        writeln!(
            writer,
            "{},{},{},{}",
            csv_field(task.phase.label()),
            csv_field(&task.id),
            csv_field(&task.description),
            csv_field(&task.status.to_string()),
        )?;
    }

    Ok(())
}

/// Quote a field when it holds a delimiter, quote, or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battleplan_core::StrategicChoice;
    use battleplan_core::plan::generate_task_list;

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(csv_field("1.01"), "1.01");
        assert_eq!(csv_field("To-Do"), "To-Do");
    }

    #[test]
    fn special_fields_are_quoted() {
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn csv_has_header_and_one_row_per_task() {
        let tasks = generate_task_list(StrategicChoice::Multi);
        let mut buf = Vec::new();
        write_tasks_csv(&mut buf, &tasks).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "phase,id,description,status");
        assert_eq!(lines.len(), tasks.len() + 1);
        assert!(lines[1].starts_with("1. Foundations,1.01,\"Finalize and approve"));
        assert!(lines[1].ends_with(",To-Do"));
        assert!(
            lines[6].contains("\"Implement GTM Variable \"\"url_avatar_type\"\" as defined in Phase 8.\""),
            "{}",
            lines[6]
        );
    }
}
