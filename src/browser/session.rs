//! Browser session lifecycle
//!
//! Wraps a chromiumoxide browser process together with the task that
//! drives its CDP event handler. The session is the one shared resource
//! of a probe run; `close` consumes it, so it can only be released once.

use std::path::{Path, PathBuf};

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::browser::detect::detect_chrome;
use crate::core::{BrowserConfig, Result, SiteprobeError};

/// A launched browser process plus its event-handler task
pub struct BrowserSession {
    browser: CdpBrowser,
    handler: JoinHandle<()>,
    executable: PathBuf,
}

impl BrowserSession {
    /// Launch a browser according to `config`.
    ///
    /// Resolves the executable (explicit path or platform detection),
    /// builds the CDP launch config, starts the process, and spawns the
    /// task that drives chromiumoxide's event handler. The handler task
    /// ends on its own when the connection drops.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let executable = config
            .chrome_path
            .clone()
            .or_else(detect_chrome)
            .ok_or(SiteprobeError::ChromeNotFound)?;
        debug!(executable = %executable.display(), "resolved browser executable");

        let mut builder = CdpConfig::builder().chrome_executable(&executable);
        if !config.headless {
            builder = builder.with_head();
        }
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        let cdp_config = builder.build().map_err(SiteprobeError::Launch)?;

        let (browser, mut handler) = CdpBrowser::launch(cdp_config).await?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            executable,
        })
    }

    /// Open a new blank page
    pub async fn new_page(&self) -> Result<Page> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    /// Whether the CDP connection is still alive
    pub fn is_connected(&self) -> bool {
        !self.handler.is_finished()
    }

    /// Path of the executable this session was launched with
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Close the browser and tear down the handler task.
    ///
    /// Consumes the session. If the connection already dropped, the
    /// process is gone and only the handler task is cleaned up.
    pub async fn close(mut self) -> Result<()> {
        if !self.is_connected() {
            warn!("browser connection already dropped; skipping close");
            self.handler.abort();
            return Ok(());
        }

        let closed = self.browser.close().await;
        if closed.is_ok() {
            // Reap the child process before dropping the handle.
            let _ = self.browser.wait().await;
        }
        self.handler.abort();
        closed?;
        Ok(())
    }
}
