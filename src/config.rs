//! Run configuration loaded from `config/default.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};
// Leading `::` disambiguates the `config` crate from this module.
use ::config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level settings for a simulator run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where exported tables go.
    pub output: OutputSettings,
    /// Which trajectories to run.
    pub scenarios: ScenarioSettings,
}

/// Output location settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Directory for the exported input tables.
    pub dir: PathBuf,
}

/// Scenario selection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSettings {
    /// Scenario names to run, in order.
    pub run: Vec<String>,
}

/// Load and deserialize the default configuration file.
pub fn load() -> Result<Settings> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()
        .with_context(|| format!("failed to load {}", DEFAULT_CONFIG_PATH))?
        .try_deserialize::<Settings>()
        .with_context(|| format!("failed to parse {}", DEFAULT_CONFIG_PATH))?;

    info!("Successfully loaded configuration: {:?}", settings);
    Ok(settings)
}
