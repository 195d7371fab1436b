//! Probe integration tests
//!
//! Exercises the full launch → navigate → close sequence. Cases that need
//! a real Chrome/Chromium (and network) are `#[ignore]`d and skip
//! themselves when no executable is discoverable.

use std::path::PathBuf;
use std::time::Duration;

use siteprobe::browser::detect_chrome;
use siteprobe::{probe, Config};
use tokio::time::timeout;

/// Helper to build a probe config for tests
fn test_config(url: &str) -> Config {
    let mut config = Config::default();
    config.probe.url = url.to_string();
    config.probe.settle_ms = 100;
    config.browser.headless = true;
    // CI containers run as root
    config.browser.no_sandbox = true;
    config
}

fn chrome_available() -> bool {
    detect_chrome().is_some()
}

/// Launch failure: no browser was opened, so none is closed
#[tokio::test]
async fn test_launch_failure_reports_without_close() {
    let mut config = test_config("https://example.com");
    config.browser.chrome_path = Some(PathBuf::from("/this/path/does/not/exist/chrome"));

    let report = timeout(Duration::from_secs(30), probe::run(&config))
        .await
        .expect("launch failure should resolve quickly");

    assert!(!report.success);
    assert!(!report.browser_closed);
    assert!(report.error.is_some());
    assert!(report.title.is_none());
}

/// Full happy path against a simple and reliable website
#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_probe_reads_title_from_live_page() {
    if !chrome_available() {
        eprintln!("Skipping test: no Chrome/Chromium executable found");
        return;
    }

    let config = test_config("https://example.com");
    let report = timeout(Duration::from_secs(90), probe::run(&config))
        .await
        .expect("probe timed out");

    assert!(report.success, "probe failed: {:?}", report.error);
    assert!(report.browser_closed);
    let title = report.title.expect("example.com has a title");
    assert!(title.contains("Example"), "unexpected title: {title}");
}

/// Unreachable host: the error is reported and the browser still closes
#[tokio::test]
#[ignore] // Requires Chrome/Chromium
async fn test_navigation_failure_still_closes_browser() {
    if !chrome_available() {
        eprintln!("Skipping test: no Chrome/Chromium executable found");
        return;
    }

    let config = test_config("https://siteprobe-smoke.invalid");
    let report = timeout(Duration::from_secs(90), probe::run(&config))
        .await
        .expect("probe timed out");

    assert!(!report.success);
    assert!(report.browser_closed, "browser must be closed after a failed navigation");
    assert!(report.error.is_some());
}

/// Navigation slower than the configured bound maps to a timeout failure
#[tokio::test]
#[ignore] // Requires Chrome/Chromium
async fn test_navigation_timeout_is_reported() {
    if !chrome_available() {
        eprintln!("Skipping test: no Chrome/Chromium executable found");
        return;
    }

    // Non-routable address: the connection attempt hangs until the bound hits
    let mut config = test_config("http://10.255.255.1/");
    config.probe.navigation_timeout_ms = 1_500;

    let report = timeout(Duration::from_secs(90), probe::run(&config))
        .await
        .expect("probe timed out");

    assert!(!report.success);
    assert!(report.browser_closed);
    let error = report.error.expect("timeout produces an error");
    assert!(
        error.contains("timed out") || error.contains("Browser error"),
        "unexpected error: {error}"
    );
}
