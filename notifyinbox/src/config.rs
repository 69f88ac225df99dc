//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Settings Location =====

/// Environment variable naming the directory that holds `settings.json`
pub const DATA_DIR_ENV: &str = "NOTIFYINBOX_DIR";

/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ===== Snooze Limits =====

/// Snooze durations offered when settings don't override them
/// (1 hour, 4 hours, 1 day, 1 week)
pub const DEFAULT_SNOOZE_HOURS: &[u32] = &[1, 4, 24, 168];

/// Longest snooze a settings file may configure (30 days)
pub const MAX_SNOOZE_HOURS: u32 = 720;

// ===== Tag and View Limits =====

/// Maximum tag length in characters after trimming
pub const MAX_TAG_LENGTH: usize = 50;

/// Maximum saved view name length in characters
pub const MAX_VIEW_NAME_LENGTH: usize = 100;

// ===== External URLs =====

/// Schemes the outbound "open external URL" action will pass through
pub const ALLOWED_URL_SCHEMES: &[&str] = &["https://", "http://"];
