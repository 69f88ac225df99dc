//! NotifyInbox library
//!
//! Notification inbox core: aggregates notifications from named sources and
//! lets a user filter, sort, tag, star, complete and snooze them. The
//! [`store::NotificationStore`] holds canonical state; [`app::AppState`]
//! shares it with the presentation layer through [`commands`].

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod store;
