//! Configuration management for siteprobe
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/siteprobe/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::core::error::{Result, SiteprobeError};

/// Default target for the probe. A simple and reliable website.
pub const DEFAULT_URL: &str = "https://example.com";

/// Default navigation timeout in milliseconds.
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Default settle delay after the title is read, in milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 1_000;

/// Main configuration for siteprobe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Probe configuration
    pub probe: ProbeConfig,
    /// Browser configuration
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Probe target and timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Target URL to navigate to
    pub url: String,
    /// Navigation timeout in milliseconds
    pub navigation_timeout_ms: u64,
    /// Delay after the title is read, before cleanup, in milliseconds
    pub settle_ms: u64,
}

/// Browser launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run without a visible window
    pub headless: bool,
    /// Explicit Chrome/Chromium executable path. Auto-detected when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,
    /// Disable the Chromium sandbox (needed in most containers)
    pub no_sandbox: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe: ProbeConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: env::var("SITEPROBE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string()),
            navigation_timeout_ms: env::var("SITEPROBE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NAVIGATION_TIMEOUT_MS),
            settle_ms: env::var("SITEPROBE_SETTLE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SETTLE_MS),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: !env::var("SITEPROBE_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            chrome_path: env::var("SITEPROBE_CHROME").ok().map(PathBuf::from),
            no_sandbox: env::var("SITEPROBE_NO_SANDBOX")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("siteprobe")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(SiteprobeError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| SiteprobeError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SiteprobeError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| SiteprobeError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SiteprobeError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| SiteprobeError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Validate the target URL, returning its parsed form
    pub fn target_url(&self) -> Result<Url> {
        Url::parse(&self.probe.url)
            .map_err(|e| SiteprobeError::invalid_url(&self.probe.url, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.probe.navigation_timeout_ms, 30_000);
        assert_eq!(config.probe.settle_ms, 1_000);
        assert!(config.browser.headless);
        assert!(!config.browser.no_sandbox);
    }

    #[test]
    fn test_target_url_parses_default() {
        let config = Config::default();
        let url = config.target_url().unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_target_url_rejects_garbage() {
        let mut config = Config::default();
        config.probe.url = "not a url".to_string();
        assert!(matches!(
            config.target_url(),
            Err(SiteprobeError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("navigation_timeout_ms"));
        assert!(toml_str.contains("headless"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.probe.url = "https://rust-lang.org".to_string();
        config.browser.no_sandbox = true;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.probe.url, "https://rust-lang.org");
        assert!(parsed.browser.no_sandbox);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("siteprobe"));
    }
}
