//! The probe sequence
//!
//! One linear async pass: launch the browser, open a page, navigate with a
//! bounded timeout, read the title, settle, and close. Cleanup runs on
//! every path where the launch succeeded, and every failure is folded into
//! the report instead of propagating.

use std::time::{Duration, Instant};

use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use crate::browser::BrowserSession;
use crate::core::{error_chain, Config, ProbeReport, Result, SiteprobeError};

/// Run the probe described by `config` and report the outcome.
///
/// Never returns an error: failures are logged and recorded in the report.
pub async fn run(config: &Config) -> ProbeReport {
    let url = config.probe.url.clone();
    let started = Instant::now();
    info!(url = %url, "starting probe");

    // Reject a malformed target before a browser is spent on it
    if let Err(err) = config.target_url() {
        error!(error = %error_chain(&err), "invalid probe target");
        return ProbeReport::failure(url, error_chain(&err), false, elapsed_ms(started));
    }

    let session = match BrowserSession::launch(&config.browser).await {
        Ok(session) => session,
        Err(err) => {
            // Nothing was opened, so there is nothing to close
            error!(error = %error_chain(&err), "browser launch failed");
            return ProbeReport::failure(url, error_chain(&err), false, elapsed_ms(started));
        }
    };
    info!(executable = %session.executable().display(), "browser launched");

    let outcome = drive(&session, config).await;

    let close_result = session.close().await;
    let browser_closed = close_result.is_ok();
    match &close_result {
        Ok(()) => info!("browser closed"),
        Err(err) => warn!(error = %error_chain(err), "browser close failed"),
    }

    match outcome {
        Ok(title) => match close_result {
            Ok(()) => ProbeReport::success(url, title, elapsed_ms(started)),
            Err(err) => {
                let mut report =
                    ProbeReport::failure(url, error_chain(&err), false, elapsed_ms(started));
                report.title = title;
                report
            }
        },
        Err(err) => {
            error!(error = %error_chain(&err), "probe failed");
            ProbeReport::failure(url, error_chain(&err), browser_closed, elapsed_ms(started))
        }
    }
}

/// The fallible middle of the sequence, between launch and cleanup.
async fn drive(session: &BrowserSession, config: &Config) -> Result<Option<String>> {
    let page = session.new_page().await?;
    info!("new page created");

    let nav_timeout = Duration::from_millis(config.probe.navigation_timeout_ms);
    match timeout(nav_timeout, page.goto(config.probe.url.clone())).await {
        Ok(navigated) => {
            navigated?;
        }
        Err(_) => {
            return Err(SiteprobeError::NavigationTimeout {
                url: config.probe.url.clone(),
                timeout_ms: config.probe.navigation_timeout_ms,
            });
        }
    }

    let title = page.get_title().await?;
    info!(
        url = %config.probe.url,
        title = title.as_deref().unwrap_or("<none>"),
        "navigation complete"
    );

    // Brief wait so in-flight browser work settles before teardown
    sleep(Duration::from_millis(config.probe.settle_ms)).await;

    Ok(title)
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_fails_before_launch() {
        let mut config = Config::default();
        config.probe.url = "definitely not a url".to_string();

        let report = run(&config).await;

        assert!(!report.success);
        assert!(!report.browser_closed);
        assert!(report
            .error
            .expect("failure report carries an error")
            .contains("Invalid target URL"));
    }
}
