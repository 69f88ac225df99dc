//! Services module
//!
//! Business logic services that coordinate between commands and the store.

pub mod inbox;
pub mod opener;
pub mod settings;

pub use inbox::{InboxService, InboxView};
pub use opener::{SystemUrlOpener, UrlOpener};
pub use settings::{InboxSettings, SettingsService};
