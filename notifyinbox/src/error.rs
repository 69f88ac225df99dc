//! Error types for NotifyInbox
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the presentation layer.
//!
//! Unknown notification ids are not errors: store mutations on a missing
//! id are no-ops.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snooze duration: {0} hours")]
    InvalidSnooze(u32),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid saved view: {0}")]
    InvalidView(String),

    #[error("Saved view not found: {0}")]
    ViewNotFound(String),

    #[error("Invalid external URL: {0}")]
    InvalidUrl(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
