//! Commands exposed to the presentation layer
//!
//! This module organizes commands into logical submodules:
//! - `notifications`: Reading and acting on notifications
//! - `filters`: Filter, search and sort state
//! - `views`: Saved view management
//!
//! Every command takes the shared [`AppState`] explicitly and returns
//! `Result` so the presentation layer gets a serializable error string.

pub mod filters;
pub mod notifications;
pub mod views;

use crate::app::AppState;
use crate::error::Result;
use crate::services::InboxView;

// Re-export all commands for convenient registration by the shell
pub use filters::*;
pub use notifications::*;
pub use views::*;

// ===== General Commands =====

/// Get application information
pub async fn get_app_info(state: &AppState) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_dir: state.data_dir.to_string_lossy().to_string(),
        snooze_hours: state.inbox.snooze_options().to_vec(),
    })
}

/// Application information structure
#[derive(Debug, serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub data_dir: String,
    pub snooze_hours: Vec<u32>,
}

/// Everything needed to render the inbox in one call
pub async fn get_inbox(state: &AppState) -> Result<InboxView> {
    Ok(state.inbox.view().await)
}
