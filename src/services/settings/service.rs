use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SchedulerSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores [`SchedulerSettings`] as TOML.
pub struct SettingsService;

impl SettingsService {
    /// `<config dir>/settings.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "TimeScheduler")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<SchedulerSettings> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(SchedulerSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: SchedulerSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        log::info!(
            "Loaded settings from {}: timezone={}, week_starts_on={}",
            path.display(),
            settings.timezone,
            settings.week_starts_on
        );
        Ok(settings)
    }

    /// Like [`SettingsService::load`], but falls back to defaults on error.
    pub fn load_or_default(path: &Path) -> SchedulerSettings {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                SchedulerSettings::default()
            }
        }
    }

    pub fn save(path: &Path, settings: &SchedulerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
