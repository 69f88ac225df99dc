//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState,
//! which the presentation layer holds and passes to every command.

use crate::config::DATA_DIR_ENV;
use crate::error::Result;
use crate::services::{InboxService, InboxSettings, SettingsService, SystemUrlOpener, UrlOpener};
use crate::store::{load_seed_file, seed, FilterUpdate, NotificationStore};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub settings: InboxSettings,
    pub inbox: InboxService,
}

impl AppState {
    /// Build state from already-loaded settings
    pub async fn new(
        data_dir: PathBuf,
        settings: InboxSettings,
        opener: Arc<dyn UrlOpener>,
    ) -> Result<Self> {
        let notifications = match &settings.seed_file {
            Some(path) => {
                // Relative seed paths are resolved against the data directory
                let path = if path.is_relative() {
                    data_dir.join(path)
                } else {
                    path.clone()
                };
                load_seed_file(&path).await?
            }
            None => seed::sample_notifications(Utc::now()),
        };

        let mut store = NotificationStore::new(notifications);
        store.update_filters(FilterUpdate {
            sort_by: Some(settings.default_sort_by),
            sort_order: Some(settings.default_sort_order),
            ..Default::default()
        });

        let inbox = InboxService::new(store, opener, settings.snooze_hours.clone());

        Ok(Self {
            data_dir,
            settings,
            inbox,
        })
    }
}

/// Resolve the data directory: `NOTIFYINBOX_DIR`, else the working directory
pub fn data_dir() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Application setup - called once on startup
pub async fn setup(data_dir: PathBuf) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("Data directory: {:?}", data_dir);

    let settings = SettingsService::new(data_dir.clone()).load().await?;
    let state = AppState::new(data_dir, settings, Arc::new(SystemUrlOpener)).await?;

    tracing::info!("Application initialized successfully");

    Ok(state)
}
