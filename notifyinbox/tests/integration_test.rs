//! Integration tests for NotifyInbox
//!
//! These tests verify end-to-end functionality including:
//! - Store derivations and the filter/sort pipeline
//! - Selection consistency across mutations
//! - Commands over a shared AppState

use chrono::{DateTime, Duration, Utc};
use notifyinbox::app::AppState;
use notifyinbox::commands;
use notifyinbox::error::Result;
use notifyinbox::services::{InboxSettings, UrlOpener};
use notifyinbox::store::{
    seed, FilterUpdate, Notification, NotificationSource, NotificationStore, NotificationUpdate,
    SavedView, SavedViewFilters, Severity, SortBy, SortOrder, StatusFilter,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Helper to build a bare notification
fn notification(id: &str, severity: Severity, received: DateTime<Utc>) -> Notification {
    Notification {
        id: id.to_string(),
        title: format!("Notification {}", id),
        body: String::new(),
        source: NotificationSource::new("Test", "Bell", "#000000"),
        severity,
        tags: Vec::new(),
        due_date: None,
        received_time: received,
        is_read: false,
        is_starred: false,
        is_complete: false,
        is_snoozed: false,
        snooze_until: None,
        external_url: None,
    }
}

fn ids(list: &[Notification]) -> Vec<String> {
    list.iter().map(|n| n.id.clone()).collect()
}

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Helper to create state over the sample data with a recording opener
async fn create_test_state() -> (AppState, Arc<RecordingOpener>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let opener = Arc::new(RecordingOpener::default());
    let state = AppState::new(
        temp_dir.path().to_path_buf(),
        InboxSettings::default(),
        opener.clone(),
    )
    .await
    .unwrap();

    (state, opener, temp_dir)
}

#[test]
fn test_tag_add_idempotent() {
    let mut store = NotificationStore::new(seed::sample_notifications(Utc::now()));

    store.add_tag("5", "oncall");
    let once = store.notification("5").unwrap().tags.clone();
    store.add_tag("5", "oncall");

    assert_eq!(store.notification("5").unwrap().tags, once);
}

#[test]
fn test_selection_consistency() {
    let mut store = NotificationStore::new(seed::sample_notifications(Utc::now()));
    store.set_selected(Some("4".to_string()));

    store.update_notification(
        "4",
        NotificationUpdate {
            is_read: Some(true),
            ..Default::default()
        },
    );

    assert!(store.selected_notification().unwrap().is_read);
}

#[test]
fn test_snooze_gate_and_elapsed_snooze() {
    let now = Utc::now();
    let mut active = notification("active", Severity::Medium, now - Duration::minutes(1));
    active.is_snoozed = true;
    active.snooze_until = Some(now + Duration::hours(1));
    let mut elapsed = notification("elapsed", Severity::Medium, now - Duration::minutes(2));
    elapsed.is_snoozed = true;
    elapsed.snooze_until = Some(now - Duration::hours(1));

    let mut store = NotificationStore::new(vec![active, elapsed]);

    assert_eq!(ids(&store.filtered_notifications_at(now)), vec!["elapsed"]);

    store.update_filters(FilterUpdate {
        status: Some(StatusFilter::Snoozed),
        ..Default::default()
    });
    assert_eq!(ids(&store.filtered_notifications_at(now)), vec!["active", "elapsed"]);
}

#[test]
fn test_severity_sort() {
    let now = Utc::now();
    let mut store = NotificationStore::new(vec![
        notification("low", Severity::Low, now),
        notification("critical", Severity::Critical, now),
        notification("medium", Severity::Medium, now),
    ]);

    store.update_filters(FilterUpdate {
        sort_by: Some(SortBy::Severity),
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    });
    assert_eq!(ids(&store.filtered_notifications()), vec!["critical", "medium", "low"]);

    store.update_filters(FilterUpdate {
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    });
    assert_eq!(ids(&store.filtered_notifications()), vec!["low", "medium", "critical"]);
}

#[test]
fn test_due_date_missing_last() {
    let now = Utc::now();
    let mut tomorrow = notification("tomorrow", Severity::Info, now);
    tomorrow.due_date = Some(now + Duration::days(1));
    let undated = notification("undated", Severity::Info, now);
    let mut yesterday = notification("yesterday", Severity::Info, now);
    yesterday.due_date = Some(now - Duration::days(1));

    let mut store = NotificationStore::new(vec![tomorrow, undated, yesterday]);
    store.update_filters(FilterUpdate {
        sort_by: Some(SortBy::DueDate),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    });

    assert_eq!(
        ids(&store.filtered_notifications()),
        vec!["yesterday", "tomorrow", "undated"]
    );

    store.update_filters(FilterUpdate {
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    });
    assert_eq!(
        ids(&store.filtered_notifications()),
        vec!["undated", "tomorrow", "yesterday"]
    );
}

#[test]
fn test_search_or_across_fields() {
    let mut store = NotificationStore::new(seed::sample_notifications(Utc::now()));
    store.update_filters(FilterUpdate {
        search: Some("AUTH".to_string()),
        ..Default::default()
    });

    // #2 body/tag, #6 source "Auth0" and tag "authentication"
    let mut found = ids(&store.filtered_notifications());
    found.sort();
    assert_eq!(found, vec!["2", "6"]);
}

#[test]
fn test_saved_view_reset() {
    let mut store = NotificationStore::new(seed::sample_notifications(Utc::now()));
    store.update_filters(FilterUpdate {
        sources: Some(vec!["Sentry".to_string()]),
        ..Default::default()
    });

    store.apply_saved_view(&SavedView {
        id: "v".to_string(),
        name: "Unread only".to_string(),
        filters: SavedViewFilters {
            status: Some(StatusFilter::Unread),
            ..Default::default()
        },
        sort_by: SortBy::ReceivedTime,
        sort_order: SortOrder::Desc,
    });

    assert!(store.filters().sources.is_empty());
    assert_eq!(store.filters().status, StatusFilter::Unread);
}

#[test]
fn test_unread_count_invariant() {
    let mut store = NotificationStore::new(seed::sample_notifications(Utc::now()));
    let check = |s: &NotificationStore| {
        let expected = s
            .notifications()
            .iter()
            .filter(|n| !n.is_read && !n.is_complete)
            .count();
        assert_eq!(s.unread_count(), expected);
    };

    check(&store);
    for id in ["1", "2", "3", "4"] {
        store.update_notification(
            id,
            NotificationUpdate {
                is_read: Some(true),
                ..Default::default()
            },
        );
        check(&store);
    }
    store.update_notification(
        "6",
        NotificationUpdate {
            is_complete: Some(true),
            ..Default::default()
        },
    );
    check(&store);
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn test_inbox_workflow_through_commands() {
    let (state, opener, _temp) = create_test_state().await;

    let inbox = commands::get_inbox(&state).await.unwrap();
    assert_eq!(inbox.unread_count, 5);
    assert_eq!(inbox.notifications.len(), 7);

    // Open the critical alert: selected and read
    let opened = commands::open_notification(&state, "1".to_string())
        .await
        .unwrap()
        .unwrap();
    assert!(opened.is_read);
    assert_eq!(commands::get_unread_count(&state).await.unwrap(), 4);

    // Star and tag it; the selection follows
    commands::toggle_star(&state, "1".to_string()).await.unwrap();
    commands::add_tag(&state, "1".to_string(), "incident".to_string())
        .await
        .unwrap();
    let selected = commands::get_selected_notification(&state)
        .await
        .unwrap()
        .unwrap();
    assert!(selected.is_starred);
    assert!(selected.tags.contains(&"incident".to_string()));
    assert!(commands::list_tags(&state)
        .await
        .unwrap()
        .contains(&"incident".to_string()));

    // Starred view now has #1 and the seeded #2 and #6
    commands::apply_saved_view(&state, "starred".to_string())
        .await
        .unwrap();
    let starred = commands::list_filtered_notifications(&state).await.unwrap();
    assert_eq!(ids(&starred), vec!["6", "1", "2"]);

    // Snooze hides it from the default view
    commands::clear_filters(&state).await.unwrap();
    commands::snooze_notification(&state, "1".to_string(), 1)
        .await
        .unwrap();
    let visible = commands::list_filtered_notifications(&state).await.unwrap();
    assert!(!ids(&visible).contains(&"1".to_string()));

    // External URL passes through to the opener
    assert!(commands::open_external_url(&state, "1".to_string())
        .await
        .unwrap());
    assert_eq!(
        opener.opened.lock().unwrap().as_slice(),
        &["https://sentry.io/error/123456".to_string()]
    );

    commands::close_notification_detail(&state).await.unwrap();
    assert!(commands::get_selected_notification(&state)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_unknown_ids_are_noops() {
    let (state, _opener, _temp) = create_test_state().await;
    let before = commands::list_notifications(&state).await.unwrap();

    assert!(commands::toggle_star(&state, "missing".to_string())
        .await
        .unwrap()
        .is_none());
    assert!(commands::update_notification(
        &state,
        "missing".to_string(),
        NotificationUpdate {
            is_complete: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .is_none());

    commands::select_notification(&state, Some("missing".to_string()))
        .await
        .unwrap();
    assert!(commands::get_selected_notification(&state)
        .await
        .unwrap()
        .is_none());

    assert_eq!(commands::list_notifications(&state).await.unwrap(), before);
}

#[tokio::test]
async fn test_saved_view_commands() {
    let (state, _opener, _temp) = create_test_state().await;

    commands::toggle_severity_filter(&state, Severity::Info)
        .await
        .unwrap();
    let view = commands::save_current_view(&state, "Info".to_string())
        .await
        .unwrap();
    assert_eq!(view.filters.severities, Some(vec![Severity::Info]));

    let views = commands::list_saved_views(&state).await.unwrap();
    assert_eq!(views.len(), 4);

    assert!(commands::delete_saved_view(&state, view.id.clone())
        .await
        .unwrap());
    assert!(commands::apply_saved_view(&state, view.id).await.is_err());

    // An ad-hoc view replaces the filters without being stored
    let filters = commands::apply_view(
        &state,
        SavedView {
            id: "adhoc".to_string(),
            name: "Jenkins".to_string(),
            filters: SavedViewFilters {
                sources: Some(vec!["Jenkins".to_string()]),
                ..Default::default()
            },
            sort_by: SortBy::DueDate,
            sort_order: SortOrder::Asc,
        },
    )
    .await
    .unwrap();
    assert!(filters.severities.is_empty());
    assert_eq!(filters.sources, vec!["Jenkins"]);
    assert_eq!(commands::list_saved_views(&state).await.unwrap().len(), 3);
    assert_eq!(
        ids(&commands::list_filtered_notifications(&state).await.unwrap()),
        vec!["3"]
    );

    let info = commands::get_app_info(&state).await.unwrap();
    assert_eq!(info.snooze_hours, vec![1, 4, 24, 168]);
}
