//! Scheduler settings file.
//!
//! Settings live in `settings.toml` under the platform config directory. A
//! missing file means defaults; a present but invalid file is an error so the
//! caller can decide whether to fall back.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::SchedulerSettings;

pub const SETTINGS_FILE: &str = "settings.toml";

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Use an explicit settings file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, if one can be resolved
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "Ken24T", "DayPlanner")
            .map(|dirs| Self::at(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, returning defaults when the file does not exist yet
    pub fn load(&self) -> Result<SchedulerSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(SchedulerSettings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: SchedulerSettings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Save settings
    pub fn save(&self, settings: &SchedulerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Load settings, logging and falling back to defaults on any failure
pub fn load_settings_or_default(service: Option<&ConfigService>) -> SchedulerSettings {
    let Some(service) = service else {
        log::warn!("No config directory available, using default settings");
        return SchedulerSettings::default();
    };

    match service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            SchedulerSettings::default()
        }
    }
}
