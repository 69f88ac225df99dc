//! Seed data
//!
//! Reference sample notifications and the default saved views. Timestamps
//! are relative to the supplied `now` so the sample set always looks fresh.

use super::models::{
    Notification, NotificationSource, SavedView, SavedViewFilters, Severity, SortBy, SortOrder,
    StatusFilter,
};
use chrono::{DateTime, Duration, Utc};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The eight reference notifications
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "Critical: Production API endpoint returning 500 errors".to_string(),
            body: "The /api/users endpoint has been returning 500 errors for the past 15 minutes. Error rate: 85%. Affected users: ~2,000. Investigation needed immediately.".to_string(),
            source: NotificationSource::new("Sentry", "AlertTriangle", "#FB923C"),
            severity: Severity::Critical,
            tags: tags(&["backend", "api", "production"]),
            due_date: Some(now + Duration::hours(2)),
            received_time: now - Duration::minutes(15),
            is_read: false,
            is_starred: false,
            is_complete: false,
            is_snoozed: false,
            snooze_until: None,
            external_url: Some("https://sentry.io/error/123456".to_string()),
        },
        Notification {
            id: "2".to_string(),
            title: "GitHub: Pull request #342 ready for review".to_string(),
            body: "feat: Add user authentication middleware - This PR adds JWT-based authentication middleware to protect sensitive endpoints. Includes unit tests and documentation updates.".to_string(),
            source: NotificationSource::new("GitHub", "GitBranch", "#24292F"),
            severity: Severity::Medium,
            tags: tags(&["code-review", "authentication", "security"]),
            due_date: None,
            received_time: now - Duration::hours(2),
            is_read: true,
            is_starred: true,
            is_complete: false,
            is_snoozed: false,
            snooze_until: None,
            external_url: Some("https://github.com/company/repo/pull/342".to_string()),
        },
        Notification {
            id: "3".to_string(),
            title: "CI/CD: Deployment to staging environment failed".to_string(),
            body: "Build #1247 failed during the deployment phase. Error: Cannot connect to staging database. This may be due to recent database migration changes.".to_string(),
            source: NotificationSource::new("Jenkins", "Zap", "#D97706"),
            severity: Severity::High,
            tags: tags(&["deployment", "staging", "database"]),
            due_date: Some(now + Duration::hours(4)),
            received_time: now - Duration::minutes(30),
            is_read: false,
            is_starred: false,
            is_complete: false,
            is_snoozed: false,
            snooze_until: None,
            external_url: Some("https://jenkins.company.com/job/deploy-staging/1247".to_string()),
        },
        Notification {
            id: "4".to_string(),
            title: "Email Gateway: Weekly digest ready".to_string(),
            body: "Your weekly notification digest is ready with 47 items processed, 12 critical alerts resolved, and 8 new integrations added.".to_string(),
            source: NotificationSource::new("Email Gateway", "Mail", "#6366F1"),
            severity: Severity::Info,
            tags: tags(&["digest", "weekly-report"]),
            due_date: None,
            received_time: now - Duration::hours(6),
            is_read: false,
            is_starred: false,
            is_complete: false,
            is_snoozed: false,
            snooze_until: None,
            external_url: None,
        },
        Notification {
            id: "5".to_string(),
            title: "Monitoring: High CPU usage on web-server-03".to_string(),
            body: "CPU usage has been above 85% for the past 20 minutes on web-server-03. Memory usage: 78%. This might indicate a resource leak or increased traffic.".to_string(),
            source: NotificationSource::new("DataDog", "Activity", "#10B981"),
            severity: Severity::Medium,
            tags: tags(&["monitoring", "performance", "server"]),
            due_date: Some(now + Duration::hours(1)),
            received_time: now - Duration::minutes(45),
            is_read: true,
            is_starred: false,
            is_complete: true,
            is_snoozed: false,
            snooze_until: None,
            external_url: Some("https://app.datadoghq.com/dashboard/abc-123".to_string()),
        },
        Notification {
            id: "6".to_string(),
            title: "Security: Failed login attempts detected".to_string(),
            body: "Multiple failed login attempts detected from IP 192.168.1.100. 15 attempts in the last 5 minutes. Account: admin@company.com may be under attack.".to_string(),
            source: NotificationSource::new("Auth0", "Shield", "#EF4444"),
            severity: Severity::High,
            tags: tags(&["security", "authentication", "breach-attempt"]),
            due_date: Some(now + Duration::minutes(30)),
            received_time: now - Duration::minutes(10),
            is_read: false,
            is_starred: true,
            is_complete: false,
            is_snoozed: false,
            snooze_until: None,
            external_url: Some("https://auth0.com/security/logs".to_string()),
        },
        Notification {
            id: "7".to_string(),
            title: "Backup: Daily database backup completed".to_string(),
            body: "Daily backup of production database completed successfully. Backup size: 2.3 GB. Backup location: s3://company-backups/prod-db/2024-01-15.sql.gz".to_string(),
            source: NotificationSource::new("AWS S3", "Database", "#8B5CF6"),
            severity: Severity::Info,
            tags: tags(&["backup", "database", "maintenance"]),
            due_date: None,
            received_time: now - Duration::hours(12),
            is_read: true,
            is_starred: false,
            is_complete: true,
            is_snoozed: false,
            snooze_until: None,
            external_url: None,
        },
        Notification {
            id: "8".to_string(),
            title: "API Rate Limit: Approaching threshold".to_string(),
            body: "API rate limit at 78% of daily quota. Current usage: 78,432 requests out of 100,000 daily limit. Consider optimizing API calls or upgrading plan.".to_string(),
            source: NotificationSource::new("Stripe API", "TrendingUp", "#F59E0B"),
            severity: Severity::Low,
            tags: tags(&["api", "rate-limit", "quota"]),
            due_date: Some(now + Duration::hours(8)),
            received_time: now - Duration::hours(3),
            is_read: false,
            is_starred: false,
            is_complete: false,
            is_snoozed: true,
            snooze_until: Some(now + Duration::hours(6)),
            external_url: Some("https://dashboard.stripe.com/usage".to_string()),
        },
    ]
}

/// Built-in views: Unread, Critical & High, Starred
pub fn default_saved_views() -> Vec<SavedView> {
    vec![
        SavedView {
            id: "unread".to_string(),
            name: "Unread".to_string(),
            filters: SavedViewFilters {
                status: Some(StatusFilter::Unread),
                ..Default::default()
            },
            sort_by: SortBy::ReceivedTime,
            sort_order: SortOrder::Desc,
        },
        SavedView {
            id: "critical".to_string(),
            name: "Critical & High".to_string(),
            filters: SavedViewFilters {
                severities: Some(vec![Severity::Critical, Severity::High]),
                ..Default::default()
            },
            sort_by: SortBy::Severity,
            sort_order: SortOrder::Desc,
        },
        SavedView {
            id: "starred".to_string(),
            name: "Starred".to_string(),
            filters: SavedViewFilters {
                status: Some(StatusFilter::Starred),
                ..Default::default()
            },
            sort_by: SortBy::ReceivedTime,
            sort_order: SortOrder::Desc,
        },
    ]
}
