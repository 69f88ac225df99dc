//! Filter commands
//!
//! Facet toggles, status, search and sort. Each returns the resulting
//! filter spec.

use crate::app::AppState;
use crate::error::Result;
use crate::store::{FilterSpec, FilterUpdate, Severity, SortBy, SortOrder, StatusFilter};

pub async fn get_filters(state: &AppState) -> Result<FilterSpec> {
    Ok(state.inbox.filters().await)
}

/// Shallow-merge a partial filter spec
pub async fn update_filters(state: &AppState, update: FilterUpdate) -> Result<FilterSpec> {
    Ok(state.inbox.update_filters(update).await)
}

pub async fn toggle_source_filter(state: &AppState, source: String) -> Result<FilterSpec> {
    Ok(state.inbox.toggle_source_filter(&source).await)
}

pub async fn toggle_severity_filter(state: &AppState, severity: Severity) -> Result<FilterSpec> {
    Ok(state.inbox.toggle_severity_filter(severity).await)
}

pub async fn toggle_tag_filter(state: &AppState, tag: String) -> Result<FilterSpec> {
    Ok(state.inbox.toggle_tag_filter(&tag).await)
}

pub async fn set_status_filter(state: &AppState, status: StatusFilter) -> Result<FilterSpec> {
    Ok(state.inbox.set_status_filter(status).await)
}

pub async fn set_search(state: &AppState, query: String) -> Result<FilterSpec> {
    Ok(state.inbox.set_search(query).await)
}

pub async fn set_sort(state: &AppState, sort_by: SortBy, sort_order: SortOrder) -> Result<FilterSpec> {
    Ok(state.inbox.set_sort(sort_by, sort_order).await)
}

/// Reset facets, status and search
pub async fn clear_filters(state: &AppState) -> Result<FilterSpec> {
    Ok(state.inbox.clear_filters().await)
}
