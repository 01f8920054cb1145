//! Configuration file management for pulseplan.
//!
//! Provides a TOML-based config file at `~/.config/pulseplan/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const FORMAT_ENV: &str = "PULSEPLAN_FORMAT";
pub const INPUTS_ENV: &str = "PULSEPLAN_INPUTS";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub inputs: InputsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsSection {
    /// Inputs file used when `generate` is run without `--inputs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// How `generate` renders a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("invalid output format {other:?} (expected text or json)"),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the pulseplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/pulseplan` or
/// `~/.config/pulseplan`, also on macOS.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("pulseplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pulseplan")
}

/// Return the path to the pulseplan config file.
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

/// Fully resolved configuration, ready for use.
#[derive(Debug, PartialEq, Eq)]
pub struct PulseplanConfig {
    pub format: OutputFormat,
    /// `None` means the starter inputs.
    pub inputs_path: Option<PathBuf>,
}

impl PulseplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Format: `cli_format` > `PULSEPLAN_FORMAT` env > `output.format` > text
    /// - Inputs: `cli_inputs` > `PULSEPLAN_INPUTS` env > `inputs.path` > none
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn resolve(cli_format: Option<OutputFormat>, cli_inputs: Option<PathBuf>) -> Result<Self> {
        let file_config = if config_path().exists() {
            Some(load_config()?)
        } else {
            None
        };

        let format = if let Some(format) = cli_format {
            format
        } else if let Ok(raw) = std::env::var(FORMAT_ENV) {
            raw.parse()
                .with_context(|| format!("{FORMAT_ENV} env var is invalid"))?
        } else if let Some(ref cfg) = file_config {
            cfg.output.format
        } else {
            OutputFormat::default()
        };

        let inputs_path = if let Some(path) = cli_inputs {
            Some(path)
        } else if let Ok(path) = std::env::var(INPUTS_ENV) {
            Some(PathBuf::from(path))
        } else {
            file_config.and_then(|cfg| cfg.inputs.path)
        };

        Ok(Self {
            format,
            inputs_path,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
