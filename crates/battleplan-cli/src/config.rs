//! Configuration file management for battleplan.
//!
//! Provides a TOML-based config file at `~/.config/battleplan/config.toml`
//! and a resolution chain: CLI flag > env var > config file > default.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const FORMAT_ENV: &str = "BATTLEPLAN_FORMAT";
pub const VIEW_ENV: &str = "BATTLEPLAN_VIEW";

// -----------------------------------------------------------------------
// Output settings
// -----------------------------------------------------------------------

/// How `generate` renders a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

/// Which part of the plan the text format shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    WarBinder,
    LaunchCadence,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValueError(pub String);

impl fmt::Display for ConfigValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigValueError {}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ConfigValueError(format!(
                "unknown output format: {other:?} (expected text, json, or toml)"
            ))),
        }
    }
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WarBinder => "war-binder",
            Self::LaunchCadence => "launch-cadence",
            Self::All => "all",
        }
    }

    pub fn shows_war_binder(self) -> bool {
        matches!(self, Self::WarBinder | Self::All)
    }

    pub fn shows_launch_cadence(self) -> bool {
        matches!(self, Self::LaunchCadence | Self::All)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "war-binder" => Ok(Self::WarBinder),
            "launch-cadence" => Ok(Self::LaunchCadence),
            "all" => Ok(Self::All),
            other => Err(ConfigValueError(format!(
                "unknown view: {other:?} (expected war-binder, launch-cadence, or all)"
            ))),
        }
    }
}

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the battleplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/battleplan` or
/// `~/.config/battleplan`, on every platform.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("battleplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("battleplan")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleplanConfig {
    pub format: OutputFormat,
    pub view: View,
}

impl BattleplanConfig {
    /// Resolve using the chain: CLI flag > env var > config file > default.
    ///
    /// - format: `cli_format` > `BATTLEPLAN_FORMAT` > `output.format` > `text`
    /// - view: `cli_view` > `BATTLEPLAN_VIEW` > `output.view` > `all`
    pub fn resolve(cli_format: Option<&str>, cli_view: Option<&str>) -> Result<Self> {
        let file_config = match load_config() {
            Ok(cfg) => Some(cfg),
            Err(e) if config_path().exists() => {
                tracing::warn!(error = %format!("{e:#}"), "ignoring unusable config file");
                None
            }
            Err(_) => None,
        };
        let file_output = file_config.map(|c| c.output).unwrap_or_default();

        let format = if let Some(value) = cli_format {
            value.parse().context("invalid --format")?
        } else if let Ok(value) = std::env::var(FORMAT_ENV) {
            value
                .parse()
                .with_context(|| format!("invalid {FORMAT_ENV} env var"))?
        } else {
            file_output.format.unwrap_or_default()
        };

        let view = if let Some(value) = cli_view {
            value.parse().context("invalid --view")?
        } else if let Ok(value) = std::env::var(VIEW_ENV) {
            value
                .parse()
                .with_context(|| format!("invalid {VIEW_ENV} env var"))?
        } else {
            file_output.view.unwrap_or_default()
        };

        tracing::debug!(%format, %view, "output settings resolved");
        Ok(Self { format, view })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
