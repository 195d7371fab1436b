//! siteprobe - Headless-Browser Page Smoke Check
//!
//! Launches a headless Chrome/Chromium via chromiumoxide, navigates to a
//! target URL, reads back the page title, and closes the browser. Failures
//! are logged and reported, never propagated: the probe is a diagnostic,
//! not a gate.
//!
//! # Architecture
//!
//! - **Core**: configuration, error handling, and the probe report
//! - **Browser**: executable discovery and the browser session lifecycle
//! - **Probe**: the linear launch → navigate → title → close sequence
//!
//! # Usage
//!
//! ```rust,no_run
//! use siteprobe::{probe, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let report = probe::run(&config).await;
//!     println!("{}", report.summary());
//! }
//! ```

pub mod browser;
pub mod core;
pub mod probe;

// Re-export commonly used items
pub use crate::core::{Config, ProbeReport, Result, SiteprobeError};
pub use browser::BrowserSession;
