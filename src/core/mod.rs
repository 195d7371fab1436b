//! Core module - shared infrastructure for siteprobe
//!
//! Contains configuration, error handling, and probe reporting.

pub mod config;
pub mod error;
pub mod report;

pub use config::{BrowserConfig, Config, ProbeConfig};
pub use error::{error_chain, Result, SiteprobeError};
pub use report::ProbeReport;
