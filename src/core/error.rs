//! Custom error types for siteprobe
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for siteprobe operations
#[derive(Error, Debug)]
pub enum SiteprobeError {
    /// Browser launch errors (bad launch config, spawn failure)
    #[error("Browser launch error: {0}")]
    Launch(String),

    /// Errors surfaced by the CDP connection after launch
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// Navigation did not finish within the configured timeout
    #[error("Navigation to {url} timed out after {timeout_ms} ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    /// Target URL failed to parse
    #[error("Invalid target URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No Chrome/Chromium executable found
    #[error("No Chrome or Chromium executable found. Install Chrome or set SITEPROBE_CHROME to its path")]
    ChromeNotFound,

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for siteprobe operations
pub type Result<T> = std::result::Result<T, SiteprobeError>;

impl SiteprobeError {
    /// Create a launch error
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Render an error together with its full source chain on one line.
///
/// Used when logging failures so nested causes (CDP errors wrapping IO
/// errors, etc.) are not lost.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
