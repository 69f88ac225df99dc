//! Store module
//!
//! This module provides the in-memory inbox including:
//! - Model definitions
//! - The filter/sort pipeline
//! - Seed data
//! - The notification store owning canonical state

pub mod filter;
pub mod models;
pub mod notification_store;
pub mod seed;

pub use models::*;
pub use notification_store::NotificationStore;

use crate::error::Result;
use std::path::Path;

/// Load a seed file: a JSON array of notifications.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Notification>> {
    tracing::info!("Loading seed notifications from {:?}", path);

    let content = tokio::fs::read_to_string(path).await?;
    let notifications: Vec<Notification> = serde_json::from_str(&content)?;

    tracing::info!("Loaded {} seed notifications", notifications.len());

    Ok(notifications)
}
