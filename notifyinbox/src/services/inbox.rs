//! Inbox service
//!
//! High-level user actions over the shared notification store: opening,
//! starring, completing, snoozing and tagging notifications, toggling
//! filter facets and managing saved views. Every action takes a single
//! lock on the store, so readers never see a half-applied change.

use crate::config::{MAX_TAG_LENGTH, MAX_VIEW_NAME_LENGTH};
use crate::error::{AppError, Result};
use crate::services::opener::{validate_url, UrlOpener};
use crate::store::{
    FilterSpec, FilterUpdate, Notification, NotificationStore, NotificationUpdate, SavedView,
    SavedViewFilters, Severity, SortBy, SortOrder, StatusFilter,
};
use chrono::{Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the presentation layer needs to render the inbox
#[derive(Debug, Clone, Serialize)]
pub struct InboxView {
    pub notifications: Vec<Notification>,
    pub selected: Option<Notification>,
    pub filters: FilterSpec,
    pub saved_views: Vec<SavedView>,
    pub sources: Vec<String>,
    pub tags: Vec<String>,
    pub unread_count: usize,
}

/// Add `value` if absent, remove it if present
fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}

/// Service for inbox actions
#[derive(Clone)]
pub struct InboxService {
    store: Arc<RwLock<NotificationStore>>,
    opener: Arc<dyn UrlOpener>,
    snooze_hours: Vec<u32>,
}

impl InboxService {
    pub fn new(store: NotificationStore, opener: Arc<dyn UrlOpener>, snooze_hours: Vec<u32>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            opener,
            snooze_hours,
        }
    }

    // ===== Reads =====

    /// Filtered list, selection, filters, views and aggregates in one read
    pub async fn view(&self) -> InboxView {
        let store = self.store.read().await;

        InboxView {
            notifications: store.filtered_notifications(),
            selected: store.selected_notification().cloned(),
            filters: store.filters().clone(),
            saved_views: store.saved_views().to_vec(),
            sources: store.sources(),
            tags: store.tags(),
            unread_count: store.unread_count(),
        }
    }

    /// Canonical list in insertion order
    pub async fn list_notifications(&self) -> Vec<Notification> {
        self.store.read().await.notifications().to_vec()
    }

    pub async fn filtered_notifications(&self) -> Vec<Notification> {
        self.store.read().await.filtered_notifications()
    }

    pub async fn get_notification(&self, id: &str) -> Option<Notification> {
        self.store.read().await.notification(id).cloned()
    }

    pub async fn selected_notification(&self) -> Option<Notification> {
        self.store.read().await.selected_notification().cloned()
    }

    pub async fn filters(&self) -> FilterSpec {
        self.store.read().await.filters().clone()
    }

    pub async fn saved_views(&self) -> Vec<SavedView> {
        self.store.read().await.saved_views().to_vec()
    }

    pub async fn sources(&self) -> Vec<String> {
        self.store.read().await.sources()
    }

    pub async fn tags(&self) -> Vec<String> {
        self.store.read().await.tags()
    }

    pub async fn unread_count(&self) -> usize {
        self.store.read().await.unread_count()
    }

    pub fn snooze_options(&self) -> &[u32] {
        &self.snooze_hours
    }

    // ===== Notification actions =====

    /// Build an update from the current record and apply it under one lock.
    /// Returns the updated record, or None for an unknown id.
    async fn modify<F>(&self, id: &str, f: F) -> Option<Notification>
    where
        F: FnOnce(&Notification) -> NotificationUpdate,
    {
        let mut store = self.store.write().await;
        let update = f(store.notification(id)?);
        store.update_notification(id, update);
        store.notification(id).cloned()
    }

    /// Merge a partial update; unknown ids are ignored
    pub async fn update_notification(&self, id: &str, update: NotificationUpdate) -> Option<Notification> {
        self.modify(id, |_| update).await
    }

    /// Select a notification and mark it read
    pub async fn open_notification(&self, id: &str) -> Option<Notification> {
        tracing::info!("Opening notification: {}", id);

        let mut store = self.store.write().await;
        store.set_selected(Some(id.to_string()));

        let unread = store.notification(id).map(|n| !n.is_read)?;
        if unread {
            store.update_notification(
                id,
                NotificationUpdate {
                    is_read: Some(true),
                    ..Default::default()
                },
            );
        }

        store.selected_notification().cloned()
    }

    /// Set the selection without side effects. Unknown ids are allowed.
    pub async fn set_selected(&self, id: Option<String>) {
        self.store.write().await.set_selected(id);
    }

    pub async fn close_detail(&self) {
        self.set_selected(None).await;
    }

    pub async fn mark_read(&self, id: &str, is_read: bool) -> Option<Notification> {
        self.modify(id, |_| NotificationUpdate {
            is_read: Some(is_read),
            ..Default::default()
        })
        .await
    }

    pub async fn toggle_star(&self, id: &str) -> Option<Notification> {
        tracing::info!("Toggling star: {}", id);
        self.modify(id, |n| NotificationUpdate {
            is_starred: Some(!n.is_starred),
            ..Default::default()
        })
        .await
    }

    pub async fn toggle_complete(&self, id: &str) -> Option<Notification> {
        tracing::info!("Toggling complete: {}", id);
        self.modify(id, |n| NotificationUpdate {
            is_complete: Some(!n.is_complete),
            ..Default::default()
        })
        .await
    }

    /// Snooze for one of the configured durations
    pub async fn snooze(&self, id: &str, hours: u32) -> Result<Option<Notification>> {
        if !self.snooze_hours.contains(&hours) {
            tracing::warn!("Rejected snooze of {} hours for {}", hours, id);
            return Err(AppError::InvalidSnooze(hours));
        }

        let until = Utc::now() + Duration::hours(i64::from(hours));
        tracing::info!("Snoozing notification {} until {}", id, until);

        Ok(self
            .modify(id, |_| NotificationUpdate {
                is_snoozed: Some(true),
                snooze_until: Some(Some(until)),
                ..Default::default()
            })
            .await)
    }

    pub async fn unsnooze(&self, id: &str) -> Option<Notification> {
        tracing::info!("Unsnoozing notification: {}", id);
        self.modify(id, |_| NotificationUpdate {
            is_snoozed: Some(false),
            snooze_until: Some(None),
            ..Default::default()
        })
        .await
    }

    /// Add a tag. Blank or duplicate tags leave the record unchanged.
    pub async fn add_tag(&self, id: &str, tag: &str) -> Result<Option<Notification>> {
        let tag = tag.trim();
        if tag.chars().count() > MAX_TAG_LENGTH {
            tracing::warn!("Rejected tag longer than {} characters", MAX_TAG_LENGTH);
            return Err(AppError::InvalidTag(format!(
                "tag exceeds {} characters",
                MAX_TAG_LENGTH
            )));
        }

        let mut store = self.store.write().await;
        if store.add_tag(id, tag) {
            tracing::info!("Tag '{}' added to {}", tag, id);
        }

        Ok(store.notification(id).cloned())
    }

    pub async fn remove_tag(&self, id: &str, tag: &str) -> Option<Notification> {
        let mut store = self.store.write().await;
        if store.remove_tag(id, tag) {
            tracing::info!("Tag '{}' removed from {}", tag, id);
        }

        store.notification(id).cloned()
    }

    /// Pass the notification's external URL to the opener.
    ///
    /// Returns false when the notification is unknown or has no URL.
    pub async fn open_external_url(&self, id: &str) -> Result<bool> {
        let url = {
            let store = self.store.read().await;
            store.notification(id).and_then(|n| n.external_url.clone())
        };

        let Some(url) = url else {
            tracing::debug!("No external URL for notification {}", id);
            return Ok(false);
        };

        let url = validate_url(&url)?;
        self.opener.open(url)?;

        Ok(true)
    }

    // ===== Filters =====

    pub async fn update_filters(&self, update: FilterUpdate) -> FilterSpec {
        self.edit_filters(|_| update).await
    }

    /// Build a filter update from the current spec and merge it under one lock
    async fn edit_filters<F>(&self, f: F) -> FilterSpec
    where
        F: FnOnce(&FilterSpec) -> FilterUpdate,
    {
        let mut store = self.store.write().await;
        let update = f(store.filters());
        store.update_filters(update);
        store.filters().clone()
    }

    pub async fn toggle_source_filter(&self, source: &str) -> FilterSpec {
        self.edit_filters(|spec| {
            let mut sources = spec.sources.clone();
            toggle(&mut sources, source.to_string());
            FilterUpdate {
                sources: Some(sources),
                ..Default::default()
            }
        })
        .await
    }

    pub async fn toggle_severity_filter(&self, severity: Severity) -> FilterSpec {
        self.edit_filters(|spec| {
            let mut severities = spec.severities.clone();
            toggle(&mut severities, severity);
            FilterUpdate {
                severities: Some(severities),
                ..Default::default()
            }
        })
        .await
    }

    pub async fn toggle_tag_filter(&self, tag: &str) -> FilterSpec {
        self.edit_filters(|spec| {
            let mut tags = spec.tags.clone();
            toggle(&mut tags, tag.to_string());
            FilterUpdate {
                tags: Some(tags),
                ..Default::default()
            }
        })
        .await
    }

    pub async fn set_status_filter(&self, status: StatusFilter) -> FilterSpec {
        self.update_filters(FilterUpdate {
            status: Some(status),
            ..Default::default()
        })
        .await
    }

    pub async fn set_search(&self, search: String) -> FilterSpec {
        self.update_filters(FilterUpdate {
            search: Some(search),
            ..Default::default()
        })
        .await
    }

    pub async fn set_sort(&self, sort_by: SortBy, sort_order: SortOrder) -> FilterSpec {
        self.update_filters(FilterUpdate {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Default::default()
        })
        .await
    }

    /// Reset facets, status and search. Sorting is kept.
    pub async fn clear_filters(&self) -> FilterSpec {
        tracing::info!("Clearing filters");
        self.update_filters(FilterUpdate {
            sources: Some(Vec::new()),
            severities: Some(Vec::new()),
            tags: Some(Vec::new()),
            status: Some(StatusFilter::All),
            search: Some(String::new()),
            ..Default::default()
        })
        .await
    }

    // ===== Saved views =====

    /// Apply a saved view by id
    pub async fn apply_saved_view(&self, view_id: &str) -> Result<FilterSpec> {
        let mut store = self.store.write().await;
        let view = store
            .saved_view(view_id)
            .cloned()
            .ok_or_else(|| AppError::ViewNotFound(view_id.to_string()))?;

        tracing::info!("Applying saved view: {}", view.name);
        store.apply_saved_view(&view);

        Ok(store.filters().clone())
    }

    /// Apply a view that may not be in the saved list
    pub async fn apply_view(&self, view: &SavedView) -> FilterSpec {
        let mut store = self.store.write().await;
        store.apply_saved_view(view);
        store.filters().clone()
    }

    pub async fn add_saved_view(&self, view: SavedView) {
        tracing::info!("Adding saved view: {}", view.name);
        self.store.write().await.add_saved_view(view);
    }

    pub async fn delete_saved_view(&self, view_id: &str) -> bool {
        tracing::info!("Deleting saved view: {}", view_id);
        self.store.write().await.delete_saved_view(view_id)
    }

    /// Save the current facets, status and sort as a new view
    pub async fn save_current_view(&self, name: &str) -> Result<SavedView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidView("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_VIEW_NAME_LENGTH {
            return Err(AppError::InvalidView(format!(
                "name exceeds {} characters",
                MAX_VIEW_NAME_LENGTH
            )));
        }

        let mut store = self.store.write().await;
        let filters = store.filters().clone();

        let non_empty = |v: Vec<String>| if v.is_empty() { None } else { Some(v) };
        let view = SavedView {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            filters: SavedViewFilters {
                sources: non_empty(filters.sources),
                severities: if filters.severities.is_empty() {
                    None
                } else {
                    Some(filters.severities)
                },
                tags: non_empty(filters.tags),
                status: match filters.status {
                    StatusFilter::All => None,
                    status => Some(status),
                },
            },
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
        };

        tracing::info!("Saved view created: {} ({})", view.name, view.id);
        store.add_saved_view(view.clone());

        Ok(view)
    }
}
