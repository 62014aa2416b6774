//! Drill configuration and config file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::operator::Operator;
use crate::rational::Denominator;

/// Settings that shape a drill session.
///
/// Every field is optional in a config file:
///
/// ```toml
/// denominator = 8
/// operators = ["ADD", "SUB"]
/// canonical = true
/// estimate = false
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrillConfig {
    /// Denominator operands are drawn with.
    pub denominator: Denominator,
    /// Operators problems are drawn from, uniformly.
    pub operators: Vec<Operator>,
    /// Require the exact canonical answer string.
    pub canonical: bool,
    /// Show the decimal estimate after a correct answer.
    #[serde(rename = "estimate")]
    pub show_estimate: bool,
    /// Seed for a reproducible sequence of problems.
    pub seed: Option<u64>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            denominator: Denominator::default(),
            operators: vec![Operator::Add],
            canonical: false,
            show_estimate: false,
            seed: None,
        }
    }
}

impl DrillConfig {
    /// Check settings that the types alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.operators.is_empty(),
            "at least one operator is required"
        );
        Ok(())
    }
}

/// Parse a TOML string into a `DrillConfig` (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<DrillConfig> {
    let config: DrillConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config: {}", source_path.display()))?;
    Ok(config)
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `fracdrill.toml` in the current directory
/// 2. `~/.config/fracdrill/config.toml`
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
///
/// Falls back to [`DrillConfig::default`] when no file is found.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => default_locations().into_iter().find(|p| p.exists()),
    };

    let Some(path) = config_path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(DrillConfig::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse_config_str(&content, &path)?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}

fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("fracdrill.toml")];
    if let Some(home) = dirs_path() {
        paths.push(home.join("config.toml"));
    }
    paths
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("fracdrill"))
}
