use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

/// Opens a shortcut's URL outside the TUI.
pub trait Launcher: Send + Sync {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Hands the URL to the desktop's default browser.
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&self, url: &Url) -> Result<()> {
        info!(%url, "opening in browser");
        open::that_detached(url.as_str())
            .with_context(|| format!("Failed to open {url} in browser"))
    }
}
