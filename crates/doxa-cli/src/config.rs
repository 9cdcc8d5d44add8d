//! Configuration management for the CLI.

use crate::error::Result;
use doxa_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub settings: Settings,

    /// Verification engine settings
    #[serde(default)]
    pub engine: EngineSettings,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report
    Text,
    /// JSON format
    Json,
    /// Quiet (errors only) format
    Quiet,
}

/// Verification engine settings, mirroring [`EngineConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Tolerance for the contradictory-pair sum check
    #[serde(default = "default_tolerance")]
    pub contradiction_tolerance: f64,

    /// Report out-of-range credence/inference values
    #[serde(default = "default_true")]
    pub check_ranges: bool,

    /// Report credence/inference values without a reason
    #[serde(default = "default_true")]
    pub require_reason: bool,

    /// Report stated credences on entailment targets
    #[serde(default = "default_true")]
    pub check_thesis_credence: bool,

    /// Resolve undercut relations before propagation
    #[serde(default = "default_true")]
    pub resolve_undercuts: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            contradiction_tolerance: default_tolerance(),
            check_ranges: true,
            require_reason: true,
            check_thesis_credence: true,
            resolve_undercuts: true,
        }
    }
}

impl EngineSettings {
    /// Convert to the engine's configuration type.
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            contradiction_tolerance: self.contradiction_tolerance,
            check_ranges: self.check_ranges,
            require_reason: self.require_reason,
            check_thesis_credence: self.check_thesis_credence,
            resolve_undercuts: self.resolve_undercuts,
        }
    }
}

impl Config {
    /// Load configuration from an explicit TOML file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_tolerance() -> f64 {
    doxa_engine::config::CONTRADICTION_TOLERANCE
}
