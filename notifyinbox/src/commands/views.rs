//! Saved view commands
//!
//! List, apply, create and delete named filter presets.

use crate::app::AppState;
use crate::error::Result;
use crate::store::{FilterSpec, SavedView};

pub async fn list_saved_views(state: &AppState) -> Result<Vec<SavedView>> {
    Ok(state.inbox.saved_views().await)
}

/// Apply a saved view by id
pub async fn apply_saved_view(state: &AppState, id: String) -> Result<FilterSpec> {
    state.inbox.apply_saved_view(&id).await
}

/// Apply a view object directly, saved or not
pub async fn apply_view(state: &AppState, view: SavedView) -> Result<FilterSpec> {
    Ok(state.inbox.apply_view(&view).await)
}

/// Add a fully specified view
pub async fn add_saved_view(state: &AppState, view: SavedView) -> Result<()> {
    state.inbox.add_saved_view(view).await;
    Ok(())
}

/// Save the current filters as a named view
pub async fn save_current_view(state: &AppState, name: String) -> Result<SavedView> {
    state.inbox.save_current_view(&name).await
}

/// Delete a saved view; returns whether it existed
pub async fn delete_saved_view(state: &AppState, id: String) -> Result<bool> {
    Ok(state.inbox.delete_saved_view(&id).await)
}
