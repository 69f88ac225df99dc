//! Filter and sort pipeline
//!
//! Turns the canonical notification list plus a [`FilterSpec`] into the
//! ordered list that is actually displayed. Pure functions; the clock is
//! passed in so snooze expiry can be evaluated deterministically.

use super::models::{FilterSpec, Notification, SortBy, SortOrder, StatusFilter};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Filter and sort `notifications` according to `spec` as of `now`.
pub fn apply(notifications: &[Notification], spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Notification> {
    let search = spec.search.to_lowercase();

    let mut result: Vec<Notification> = notifications
        .iter()
        .filter(|n| passes_snooze_gate(n, spec.status, now))
        .filter(|n| matches_facets(n, spec))
        .filter(|n| matches_status(n, spec.status))
        .filter(|n| search.is_empty() || matches_search(n, &search))
        .cloned()
        .collect();

    // sort_by is stable, so equal keys keep insertion order
    result.sort_by(|a, b| compare(a, b, spec.sort_by, spec.sort_order));

    tracing::debug!(
        "Filtered {} of {} notifications (status={:?}, sort={:?}/{:?})",
        result.len(),
        notifications.len(),
        spec.status,
        spec.sort_by,
        spec.sort_order
    );

    result
}

/// Actively snoozed notifications are hidden unless browsing the snoozed list.
/// An elapsed or unknown expiry falls through to the normal filters.
fn passes_snooze_gate(n: &Notification, status: StatusFilter, now: DateTime<Utc>) -> bool {
    if n.is_snoozed && status != StatusFilter::Snoozed {
        return !n.is_actively_snoozed(now);
    }
    true
}

fn matches_facets(n: &Notification, spec: &FilterSpec) -> bool {
    if !spec.sources.is_empty() && !spec.sources.contains(&n.source.name) {
        return false;
    }

    if !spec.severities.is_empty() && !spec.severities.contains(&n.severity) {
        return false;
    }

    // OR across requested tags
    if !spec.tags.is_empty() && !spec.tags.iter().any(|tag| n.has_tag(tag)) {
        return false;
    }

    true
}

fn matches_status(n: &Notification, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Unread => n.is_unread(),
        StatusFilter::Starred => n.is_starred,
        StatusFilter::Completed => n.is_complete,
        StatusFilter::Snoozed => n.is_snoozed,
    }
}

/// `needle` must already be lowercased.
fn matches_search(n: &Notification, needle: &str) -> bool {
    n.title.to_lowercase().contains(needle)
        || n.body.to_lowercase().contains(needle)
        || n.source.name.to_lowercase().contains(needle)
        || n.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Each sort key has a natural direction: severity and received time lean
/// descending, due date ascending. Requesting the other direction reverses
/// the natural comparison.
pub fn compare(a: &Notification, b: &Notification, sort_by: SortBy, order: SortOrder) -> Ordering {
    let (natural, natural_order) = match sort_by {
        SortBy::Severity => (b.severity.rank().cmp(&a.severity.rank()), SortOrder::Desc),
        SortBy::DueDate => (compare_due(a.due_date, b.due_date), SortOrder::Asc),
        SortBy::ReceivedTime => (b.received_time.cmp(&a.received_time), SortOrder::Desc),
    };

    if order == natural_order {
        natural
    } else {
        natural.reverse()
    }
}

/// Missing due dates sort as infinitely far in the future.
fn compare_due(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
