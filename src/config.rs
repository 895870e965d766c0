//! Configuration handling for the wizard

use crate::error::WizardError;
use crate::state::StepId;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_HEIGHT_UNIT: &str = "cm";
const DEFAULT_WEIGHT_UNIT: &str = "kg";
const DEFAULT_LOG_FILTER: &str = "fitwizard=info";

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Unit label shown next to the height input
    pub height_unit: Option<String>,
    /// Unit label shown next to the weight input
    pub weight_unit: Option<String>,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
    /// Step id to open the wizard at (e.g. "personal_data")
    pub start_step: Option<String>,
}

impl WizardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("app", "fitwizard", "fitwizard")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("fitwizard.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_json(&fs::read_to_string(&path)?),
            _ => Ok(Self::default()),
        }
    }

    /// Parse configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn height_unit(&self) -> &str {
        self.height_unit.as_deref().unwrap_or(DEFAULT_HEIGHT_UNIT)
    }

    pub fn weight_unit(&self) -> &str {
        self.weight_unit.as_deref().unwrap_or(DEFAULT_WEIGHT_UNIT)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Step to open at, defaulting to the introduction
    pub fn start_step(&self) -> Result<StepId, WizardError> {
        self.start_step
            .as_deref()
            .map_or(Ok(StepId::default()), str::parse)
    }
}
