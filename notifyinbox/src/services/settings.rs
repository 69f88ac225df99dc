//! Settings service
//!
//! Loads inbox settings from an optional JSON file. Settings are read-only:
//! a missing file yields defaults and nothing is written back.

use crate::config::{DEFAULT_SNOOZE_HOURS, MAX_SNOOZE_HOURS, SETTINGS_FILE_NAME};
use crate::error::{AppError, Result};
use crate::store::{SortBy, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

fn default_snooze_hours() -> Vec<u32> {
    DEFAULT_SNOOZE_HOURS.to_vec()
}

/// Inbox settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxSettings {
    /// JSON array of notifications replacing the built-in sample set
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Snooze durations offered to the user, in hours
    #[serde(default = "default_snooze_hours")]
    pub snooze_hours: Vec<u32>,
    #[serde(default)]
    pub default_sort_by: SortBy,
    #[serde(default)]
    pub default_sort_order: SortOrder,
}

impl Default for InboxSettings {
    fn default() -> Self {
        Self {
            seed_file: None,
            snooze_hours: default_snooze_hours(),
            default_sort_by: SortBy::default(),
            default_sort_order: SortOrder::default(),
        }
    }
}

impl InboxSettings {
    /// Reject snooze presets that are empty, zero or over the limit
    pub fn validate(&self) -> Result<()> {
        if self.snooze_hours.is_empty() {
            return Err(AppError::Settings(
                "snooze_hours must list at least one duration".to_string(),
            ));
        }

        if let Some(bad) = self
            .snooze_hours
            .iter()
            .find(|h| **h == 0 || **h > MAX_SNOOZE_HOURS)
        {
            return Err(AppError::Settings(format!(
                "snooze duration {} must be between 1 and {} hours",
                bad, MAX_SNOOZE_HOURS
            )));
        }

        Ok(())
    }
}

/// Service for reading inbox settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk, or defaults if no file exists
    pub async fn load(&self) -> Result<InboxSettings> {
        if !fs::try_exists(&self.settings_path).await? {
            tracing::info!(
                "Settings file {:?} not found, using defaults",
                self.settings_path
            );
            return Ok(InboxSettings::default());
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: InboxSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;

        tracing::info!("Settings loaded from {:?}", self.settings_path);

        Ok(settings)
    }
}
