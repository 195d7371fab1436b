//! Chrome/Chromium executable discovery
//!
//! Launch preparation is environment-specific: the candidate install
//! locations differ per operating system, so discovery runs before any
//! browser process is started.

use std::path::PathBuf;

/// Detect an installed Chrome or Chromium browser.
///
/// Checks common installation paths for the current platform, then falls
/// back to searching `PATH`. Returns the first executable that exists, or
/// `None` if no browser could be located.
pub fn detect_chrome() -> Option<PathBuf> {
    candidate_paths()
        .into_iter()
        .find(|path| path.exists())
        .or_else(search_path)
}

/// Look for a well-known browser binary name on `PATH`.
fn search_path() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let names = if cfg!(target_os = "windows") {
        &["chrome.exe", "msedge.exe"][..]
    } else {
        &[
            "google-chrome",
            "google-chrome-stable",
            "chromium",
            "chromium-browser",
            "chrome",
        ][..]
    };
    for dir in std::env::split_paths(&path_var) {
        for name in names {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Candidate Chrome/Chromium executable paths for the current platform.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        ));
        paths.push(PathBuf::from(
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("Applications/Google Chrome.app/Contents/MacOS/Google Chrome"));
            paths.push(home.join("Applications/Chromium.app/Contents/MacOS/Chromium"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("/usr/bin/google-chrome"));
        paths.push(PathBuf::from("/usr/bin/google-chrome-stable"));
        paths.push(PathBuf::from("/usr/bin/chromium-browser"));
        paths.push(PathBuf::from("/usr/bin/chromium"));
        paths.push(PathBuf::from("/usr/local/bin/google-chrome"));
        paths.push(PathBuf::from("/usr/local/bin/chromium"));
        paths.push(PathBuf::from("/snap/bin/chromium"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(program_files) = std::env::var("ProgramFiles") {
            paths.push(PathBuf::from(format!(
                "{}\\Google\\Chrome\\Application\\chrome.exe",
                program_files
            )));
            paths.push(PathBuf::from(format!(
                "{}\\Chromium\\Application\\chrome.exe",
                program_files
            )));
        }
        if let Ok(program_files_x86) = std::env::var("ProgramFiles(x86)") {
            paths.push(PathBuf::from(format!(
                "{}\\Google\\Chrome\\Application\\chrome.exe",
                program_files_x86
            )));
        }
        if let Ok(local_app_data) = std::env::var("LOCALAPPDATA") {
            paths.push(PathBuf::from(format!(
                "{}\\Google\\Chrome\\Application\\chrome.exe",
                local_app_data
            )));
        }
    }

    paths
}
