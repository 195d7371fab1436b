//! siteprobe - Headless-Browser Page Smoke Check
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use siteprobe::{probe, Config};

/// siteprobe - Headless-Browser Page Smoke Check
#[derive(Parser, Debug)]
#[command(name = "siteprobe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target URL to probe
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// Navigation timeout in milliseconds
    #[arg(long, short = 't')]
    timeout_ms: Option<u64>,

    /// Settle delay after the title is read, in milliseconds
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Chrome/Chromium executable path (auto-detected when omitted)
    #[arg(long)]
    chrome: Option<PathBuf>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Disable the Chromium sandbox (needed in most containers)
    #[arg(long)]
    no_sandbox: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "siteprobe=debug"
    } else {
        "siteprobe=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // The probe swallows its own failures; this guard catches anything
    // escaping the async entry point. Either way the process exits 0.
    if let Err(err) = run(args).await {
        error!("top-level error: {:#}", err);
    }

    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref url) = args.url {
        config.probe.url = url.clone();
    }

    if let Some(timeout_ms) = args.timeout_ms {
        config.probe.navigation_timeout_ms = timeout_ms;
    }

    if let Some(settle_ms) = args.settle_ms {
        config.probe.settle_ms = settle_ms;
    }

    if let Some(ref chrome) = args.chrome {
        config.browser.chrome_path = Some(chrome.clone());
    }

    if args.headed {
        config.browser.headless = false;
    }

    if args.no_sandbox {
        config.browser.no_sandbox = true;
    }

    let report = probe::run(&config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
