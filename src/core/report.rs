//! Probe outcome reporting
//!
//! A probe never fails the process; it produces a report instead.

use serde::{Deserialize, Serialize};

/// Outcome of a single probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Target URL that was probed
    pub url: String,
    /// Whether the full sequence completed
    pub success: bool,
    /// Page title, when navigation got far enough to read one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Error description on failure, including the cause chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the browser was closed during cleanup
    pub browser_closed: bool,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl ProbeReport {
    /// Create a successful report
    pub fn success(url: impl Into<String>, title: Option<String>, elapsed_ms: u64) -> Self {
        Self {
            url: url.into(),
            success: true,
            title,
            error: None,
            browser_closed: true,
            elapsed_ms,
        }
    }

    /// Create a failed report
    pub fn failure(
        url: impl Into<String>,
        error: impl Into<String>,
        browser_closed: bool,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            url: url.into(),
            success: false,
            title: None,
            error: Some(error.into()),
            browser_closed,
            elapsed_ms,
        }
    }

    /// Human-readable one-paragraph summary
    pub fn summary(&self) -> String {
        if self.success {
            match &self.title {
                Some(title) => format!(
                    "OK: {} answered in {} ms with title {:?}",
                    self.url, self.elapsed_ms, title
                ),
                None => format!(
                    "OK: {} answered in {} ms with no title",
                    self.url, self.elapsed_ms
                ),
            }
        } else {
            format!(
                "FAILED: {} after {} ms: {}{}",
                self.url,
                self.elapsed_ms,
                self.error.as_deref().unwrap_or("unknown error"),
                if self.browser_closed {
                    ""
                } else {
                    " (browser was not closed)"
                }
            )
        }
    }
}
