//! Configuration management for rfplan
//!
//! This module provides:
//! - Application settings (display unit, language, chart sizing)
//! - The starting plan (input signal and mixer stages)
//! - TOML loading with factory defaults for missing or corrupt files
//!
//! Configuration is read-only: edits made while planning are never written
//! back.

use crate::domain::labels::Language;
use crate::domain::state::PlanState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, error, info, instrument};

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Unit label shown next to frequencies; no conversion is applied
    pub unit: String,

    pub language: Language,

    /// Upper bound handed to the tick generator
    pub max_ticks: usize,

    /// Width of text charts in columns
    pub chart_width: usize,
}

impl AppConfig {
    pub const MIN_CHART_WIDTH: usize = 16;
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            unit: "MHz".to_string(),
            language: Language::En,
            max_ticks: 8,
            chart_width: 72,
        }
    }
}

/// Complete rfplan configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub app: AppConfig,
    pub plan: PlanState,
}

impl PlannerConfig {
    /// Load configuration from TOML file
    #[instrument(skip(path))]
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading configuration");

        let contents = fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&contents)?;

        debug!(stages = config.plan.stages.len(), "Configuration loaded successfully");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Built-in configuration: the reference two-stage down-converter
    pub fn factory_default() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.app.unit.trim().is_empty() {
            return Err(ConfigError::Invalid("unit must not be empty".to_string()));
        }
        if self.app.max_ticks < 2 {
            return Err(ConfigError::Invalid(format!(
                "max_ticks must be at least 2, got {}",
                self.app.max_ticks
            )));
        }
        if self.app.chart_width < AppConfig::MIN_CHART_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "chart_width must be at least {}, got {}",
                AppConfig::MIN_CHART_WIDTH,
                self.app.chart_width
            )));
        }
        Ok(())
    }
}

/// Locates and loads the user's configuration file
///
/// The file lives at `~/.config/rfplan/config.toml` on Linux/Mac and
/// `%APPDATA%\rfplan\config.toml` on Windows.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join("config.toml"),
        }
    }

    pub fn default_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("rfplan"))
            .ok_or_else(|| ConfigError::Invalid("Could not determine config directory".to_string()))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Load configuration from file
    ///
    /// If the config file doesn't exist, returns factory default.
    /// If the config file is corrupt, logs an error and returns factory default.
    #[instrument(skip(self))]
    pub async fn load(&self) -> PlannerConfig {
        if !self.exists() {
            info!(
                path = %self.config_path.display(),
                "Config file not found, using factory default"
            );
            return PlannerConfig::factory_default();
        }

        match PlannerConfig::load_from_file(&self.config_path).await {
            Ok(config) => config,
            Err(e) => {
                error!(
                    path = %self.config_path.display(),
                    error = %e,
                    "Failed to load config, using factory default"
                );
                PlannerConfig::factory_default()
            }
        }
    }
}
