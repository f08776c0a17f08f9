mod config;
mod generate_cmd;
mod intel_cmds;
mod render;
mod tasks_cmd;
#[cfg(test)]
mod test_util;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "battleplan",
    version,
    about = "Turn business intel into a marketing battle plan"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a battleplan config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
        /// Default output format: text, json, or toml
        #[arg(long)]
        format: Option<String>,
        /// Default text view: war-binder, launch-cadence, or all
        #[arg(long)]
        view: Option<String>,
    },
    /// Intel file management
    Intel {
        #[command(subcommand)]
        command: IntelCommands,
    },
    /// Generate a battle plan from an intel file
    Generate {
        /// Path to the intel TOML file
        file: String,
        /// Output format: text, json, or toml (overrides BATTLEPLAN_FORMAT)
        #[arg(long)]
        format: Option<String>,
        /// Text view: war-binder, launch-cadence, or all (overrides BATTLEPLAN_VIEW)
        #[arg(long)]
        view: Option<String>,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Export the launch task list as CSV
    Tasks {
        /// Path to the intel TOML file
        file: String,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum IntelCommands {
    /// Write a starter intel file (blank unless --sample or --multi)
    Template {
        /// Fill every field with the brake-shop example (single target)
        #[arg(long)]
        sample: bool,
        /// Fill every field with the example, using multi-avatar domination
        #[arg(long)]
        multi: bool,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },
    /// Set one field of an intel file, keeping comments intact
    Set {
        /// Path to the intel TOML file
        file: String,
        /// Field name (e.g. hungry_crowd, strategic_choice)
        field: String,
        /// New value
        value: String,
    },
    /// Validate an intel file and print a summary
    Check {
        /// Path to the intel TOML file
        file: String,
    },
}

/// Execute the `battleplan init` command: write config file.
fn cmd_init(force: bool, format: Option<&str>, view: Option<&str>) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let format = format
        .map(str::parse::<config::OutputFormat>)
        .transpose()
        .context("invalid --format")?
        .unwrap_or_default();
    let view = view
        .map(str::parse::<config::View>)
        .transpose()
        .context("invalid --view")?
        .unwrap_or_default();

    let cfg = config::ConfigFile {
        output: config::OutputSection {
            format: Some(format),
            view: Some(view),
        },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  output.format = {format}");
    println!("  output.view = {view}");
    println!();
    println!("Next: run `battleplan intel template --output intel.toml` to start an intel file.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            force,
            format,
            view,
        } => {
            cmd_init(force, format.as_deref(), view.as_deref())?;
        }
        Commands::Intel { command } => {
            intel_cmds::run_intel_command(command)?;
        }
        Commands::Generate {
            file,
            format,
            view,
            output,
        } => {
            generate_cmd::run_generate(
                &file,
                format.as_deref(),
                view.as_deref(),
                output.as_deref(),
            )?;
        }
        Commands::Tasks { file, output } => {
            tasks_cmd::run_export_tasks(&file, output.as_deref())?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "battleplan",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "battleplan",
            "generate",
            "intel.toml",
            "--format",
            "json",
            "--output",
            "plan.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                file,
                format,
                view,
                output,
            } => {
                assert_eq!(file, "intel.toml");
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(view, None);
                assert_eq!(output.as_deref(), Some("plan.json"));
            }
            _ => panic!("expected generate"),
        }
    }
}
