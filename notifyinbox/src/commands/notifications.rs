//! Notification commands
//!
//! Reads and user actions on individual notifications. Unknown ids are not
//! errors: they come back as `None`.

use crate::app::AppState;
use crate::error::Result;
use crate::store::{Notification, NotificationUpdate};

/// List all notifications in insertion order
pub async fn list_notifications(state: &AppState) -> Result<Vec<Notification>> {
    Ok(state.inbox.list_notifications().await)
}

/// List notifications after filtering and sorting
pub async fn list_filtered_notifications(state: &AppState) -> Result<Vec<Notification>> {
    Ok(state.inbox.filtered_notifications().await)
}

pub async fn get_notification(state: &AppState, id: String) -> Result<Option<Notification>> {
    Ok(state.inbox.get_notification(&id).await)
}

pub async fn get_selected_notification(state: &AppState) -> Result<Option<Notification>> {
    Ok(state.inbox.selected_notification().await)
}

/// Distinct source names
pub async fn list_sources(state: &AppState) -> Result<Vec<String>> {
    Ok(state.inbox.sources().await)
}

/// Distinct tags
pub async fn list_tags(state: &AppState) -> Result<Vec<String>> {
    Ok(state.inbox.tags().await)
}

pub async fn get_unread_count(state: &AppState) -> Result<usize> {
    Ok(state.inbox.unread_count().await)
}

/// Apply a partial update
pub async fn update_notification(
    state: &AppState,
    id: String,
    update: NotificationUpdate,
) -> Result<Option<Notification>> {
    Ok(state.inbox.update_notification(&id, update).await)
}

/// Select a notification (or clear with `None`) without marking it read
pub async fn select_notification(state: &AppState, id: Option<String>) -> Result<()> {
    state.inbox.set_selected(id).await;
    Ok(())
}

/// Select a notification for the detail panel and mark it read
pub async fn open_notification(state: &AppState, id: String) -> Result<Option<Notification>> {
    Ok(state.inbox.open_notification(&id).await)
}

pub async fn close_notification_detail(state: &AppState) -> Result<()> {
    state.inbox.close_detail().await;
    Ok(())
}

pub async fn mark_read(state: &AppState, id: String, is_read: bool) -> Result<Option<Notification>> {
    Ok(state.inbox.mark_read(&id, is_read).await)
}

pub async fn toggle_star(state: &AppState, id: String) -> Result<Option<Notification>> {
    Ok(state.inbox.toggle_star(&id).await)
}

pub async fn toggle_complete(state: &AppState, id: String) -> Result<Option<Notification>> {
    Ok(state.inbox.toggle_complete(&id).await)
}

/// Snooze for one of the configured durations
pub async fn snooze_notification(
    state: &AppState,
    id: String,
    hours: u32,
) -> Result<Option<Notification>> {
    state.inbox.snooze(&id, hours).await
}

pub async fn unsnooze_notification(state: &AppState, id: String) -> Result<Option<Notification>> {
    Ok(state.inbox.unsnooze(&id).await)
}

pub async fn add_tag(state: &AppState, id: String, tag: String) -> Result<Option<Notification>> {
    state.inbox.add_tag(&id, &tag).await
}

pub async fn remove_tag(state: &AppState, id: String, tag: String) -> Result<Option<Notification>> {
    Ok(state.inbox.remove_tag(&id, &tag).await)
}

/// Open the notification's external URL; false if it has none
pub async fn open_external_url(state: &AppState, id: String) -> Result<bool> {
    state.inbox.open_external_url(&id).await
}
