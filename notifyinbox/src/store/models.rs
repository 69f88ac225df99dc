//! Inbox models
//!
//! Rust structs representing notifications, filters and saved views.
//! All models use serde for serialization to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Originating system a notification is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSource {
    /// Grouping and filtering dimension
    pub name: String,
    /// Icon identifier for the presentation layer
    pub icon: String,
    /// Display color, e.g. `#FB923C`
    pub color: String,
}

impl NotificationSource {
    pub fn new(name: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Ordinal urgency classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Sort rank: critical=4 down to info=0
    pub fn rank(self) -> i32 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Info => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inbox notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub source: NotificationSource,
    pub severity: Severity,
    /// Set semantics, insertion order kept for display
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub received_time: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_snoozed: bool,
    /// Only meaningful while `is_snoozed` is set
    #[serde(default)]
    pub snooze_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub external_url: Option<String>,
}

impl Notification {
    /// Counted towards the unread badge
    pub fn is_unread(&self) -> bool {
        !self.is_read && !self.is_complete
    }

    /// Snoozed with an expiry that has not yet passed
    pub fn is_actively_snoozed(&self, now: DateTime<Utc>) -> bool {
        self.is_snoozed && self.snooze_until.is_some_and(|until| until > now)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Merge a partial update, replacing only the named fields.
    ///
    /// `id` and `received_time` are immutable and not part of the update.
    pub fn apply(&mut self, update: NotificationUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(body) = update.body {
            self.body = body;
        }
        if let Some(source) = update.source {
            self.source = source;
        }
        if let Some(severity) = update.severity {
            self.severity = severity;
        }
        if let Some(tags) = update.tags {
            self.tags = dedup_tags(tags);
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(is_read) = update.is_read {
            self.is_read = is_read;
        }
        if let Some(is_starred) = update.is_starred {
            self.is_starred = is_starred;
        }
        if let Some(is_complete) = update.is_complete {
            self.is_complete = is_complete;
        }
        if let Some(is_snoozed) = update.is_snoozed {
            self.is_snoozed = is_snoozed;
        }
        if let Some(snooze_until) = update.snooze_until {
            self.snooze_until = snooze_until;
        }
        if let Some(external_url) = update.external_url {
            self.external_url = external_url;
        }
    }
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Deserialize a present field (including `null`) as `Some(..)` so a missing
/// field and an explicit clear can be told apart.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Partial notification update
///
/// `None` leaves a field untouched. For optional fields `Some(None)` clears.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub source: Option<NotificationSource>,
    pub severity: Option<Severity>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub is_read: Option<bool>,
    pub is_starred: Option<bool>,
    pub is_complete: Option<bool>,
    pub is_snoozed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub snooze_until: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub external_url: Option<Option<String>>,
}

/// Status restriction applied on top of the facet filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Unread,
    Starred,
    Completed,
    Snoozed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Severity,
    DueDate,
    #[default]
    ReceivedTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Active filter and sort specification
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub severities: Vec<Severity>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl FilterSpec {
    /// Whether anything besides sorting narrows the list
    pub fn has_active_filters(&self) -> bool {
        !self.sources.is_empty()
            || !self.severities.is_empty()
            || !self.tags.is_empty()
            || self.status != StatusFilter::All
            || !self.search.is_empty()
    }

    /// Shallow merge: named fields replace, others stay
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(sources) = update.sources {
            self.sources = sources;
        }
        if let Some(severities) = update.severities {
            self.severities = severities;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
    }
}

/// Partial filter update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterUpdate {
    pub sources: Option<Vec<String>>,
    pub severities: Option<Vec<Severity>>,
    pub tags: Option<Vec<String>>,
    pub status: Option<StatusFilter>,
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Filter subset stored with a saved view; missing fields mean "no restriction"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedViewFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severities: Option<Vec<Severity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
}

/// Named, reusable filter + sort preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedView {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub filters: SavedViewFilters,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl SavedView {
    /// The full filter spec this view produces. Search is always cleared.
    pub fn to_filter_spec(&self) -> FilterSpec {
        FilterSpec {
            sources: self.filters.sources.clone().unwrap_or_default(),
            severities: self.filters.severities.clone().unwrap_or_default(),
            tags: self.filters.tags.clone().unwrap_or_default(),
            status: self.filters.status.unwrap_or_default(),
            search: String::new(),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}
