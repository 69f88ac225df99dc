//! External URL opener
//!
//! The outbound "open external URL" action. The inbox only hands the URL
//! over; nothing comes back.

use crate::config::ALLOWED_URL_SCHEMES;
use crate::error::{AppError, Result};
use tokio::process::Command;

/// Opens a URL in a new browsing context
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Reject anything that is not plain http(s).
///
/// Returns the trimmed URL; that is the only form that may be handed on.
pub fn validate_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    let lower = trimmed.to_lowercase();
    let has_host = ALLOWED_URL_SCHEMES
        .iter()
        .find(|scheme| lower.starts_with(**scheme))
        .is_some_and(|scheme| lower.len() > scheme.len());

    // Inner whitespace or control characters never belong in a link
    let clean = !trimmed.chars().any(|c| c.is_whitespace() || c.is_control());

    if !has_host || !clean {
        return Err(AppError::InvalidUrl(url.to_string()));
    }

    Ok(trimmed)
}

/// Hands URLs to the platform's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        let url = validate_url(url)?;
        tracing::info!("Opening external URL: {}", url);

        // Dropped tokio children are reaped by the runtime
        let mut command = platform_command(url);
        command
            .spawn()
            .map_err(|e| AppError::Generic(format!("Failed to open {}: {}", url, e)))?;

        Ok(())
    }
}

/// The URL is always a single argv entry; no shell sits in between.
#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    command
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
