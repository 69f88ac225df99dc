//! Notification store
//!
//! Owns the canonical notification list, the selection, the active filter
//! spec and the saved views. Derived values are recomputed on every read.

use super::filter;
use super::models::{FilterSpec, FilterUpdate, Notification, NotificationUpdate, SavedView};
use super::seed;
use chrono::{DateTime, Utc};

/// In-memory inbox state
#[derive(Debug, Clone)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    selected_id: Option<String>,
    filters: FilterSpec,
    saved_views: Vec<SavedView>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(seed::sample_notifications(Utc::now()))
    }
}

impl NotificationStore {
    /// Create a store over `notifications` with default filters and views
    pub fn new(notifications: Vec<Notification>) -> Self {
        tracing::debug!("Creating store with {} notifications", notifications.len());

        Self {
            notifications,
            selected_id: None,
            filters: FilterSpec::default(),
            saved_views: seed::default_saved_views(),
        }
    }

    // ===== Reads =====

    /// Canonical list in insertion order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected notification, resolved against the canonical list.
    ///
    /// An id that matches nothing reads as no selection.
    pub fn selected_notification(&self) -> Option<&Notification> {
        self.selected_id.as_deref().and_then(|id| self.notification(id))
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn saved_views(&self) -> &[SavedView] {
        &self.saved_views
    }

    pub fn saved_view(&self, id: &str) -> Option<&SavedView> {
        self.saved_views.iter().find(|v| v.id == id)
    }

    // ===== Derived =====

    /// Distinct source names, first-seen order
    pub fn sources(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for n in &self.notifications {
            if !out.contains(&n.source.name) {
                out.push(n.source.name.clone());
            }
        }
        out
    }

    /// Distinct tags across all notifications, first-seen order
    pub fn tags(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for tag in self.notifications.iter().flat_map(|n| n.tags.iter()) {
            if !out.contains(tag) {
                out.push(tag.clone());
            }
        }
        out
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.is_unread()).count()
    }

    /// Filtered and sorted list as of now
    pub fn filtered_notifications(&self) -> Vec<Notification> {
        self.filtered_notifications_at(Utc::now())
    }

    /// Filtered and sorted list with snooze expiry evaluated at `now`
    pub fn filtered_notifications_at(&self, now: DateTime<Utc>) -> Vec<Notification> {
        filter::apply(&self.notifications, &self.filters, now)
    }

    // ===== Mutations =====

    /// Merge `update` into the notification with `id`.
    ///
    /// Returns false (and changes nothing) when the id is unknown. The
    /// selection holds only an id, so it sees the merge immediately.
    pub fn update_notification(&mut self, id: &str, update: NotificationUpdate) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.apply(update);
                tracing::debug!("Notification updated: {}", id);
                true
            }
            None => {
                tracing::debug!("Ignoring update for unknown notification: {}", id);
                false
            }
        }
    }

    /// Select a notification by id. Not validated.
    pub fn set_selected(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.merge(update);
    }

    /// Replace every filterable field with the view's, clear search, take
    /// the view's sort verbatim
    pub fn apply_saved_view(&mut self, view: &SavedView) {
        tracing::debug!("Applying saved view: {}", view.id);
        self.filters = view.to_filter_spec();
    }

    pub fn add_saved_view(&mut self, view: SavedView) {
        self.saved_views.push(view);
    }

    /// Remove views with `id`; returns whether anything was removed
    pub fn delete_saved_view(&mut self, id: &str) -> bool {
        let before = self.saved_views.len();
        self.saved_views.retain(|v| v.id != id);
        self.saved_views.len() != before
    }

    /// Append a tag. Blank or already-present tags are a no-op.
    pub fn add_tag(&mut self, id: &str, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }

        let Some(current) = self.notification(id) else {
            return false;
        };
        if current.has_tag(tag) {
            return false;
        }

        let mut tags = current.tags.clone();
        tags.push(tag.to_string());
        self.update_notification(
            id,
            NotificationUpdate {
                tags: Some(tags),
                ..Default::default()
            },
        )
    }

    pub fn remove_tag(&mut self, id: &str, tag: &str) -> bool {
        let Some(current) = self.notification(id) else {
            return false;
        };
        if !current.has_tag(tag) {
            return false;
        }

        let tags = current.tags.iter().filter(|t| *t != tag).cloned().collect();
        self.update_notification(
            id,
            NotificationUpdate {
                tags: Some(tags),
                ..Default::default()
            },
        )
    }
}
