//! Headless Chromium session used to render the rates page before scraping.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::FetchError;

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launches headless Chromium with its DevTools endpoint on `debug_port`.
    /// Runs without a sandbox and without `/dev/shm`, so it works inside containers.
    pub async fn launch(debug_port: u16) -> Result<Self, FetchError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .port(debug_port)
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .build()
            .map_err(|e| FetchError::Browser(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| FetchError::Browser(format!("failed to launch Chromium: {e}")))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("Chromium started on debug port {}", debug_port);
        Ok(Self { browser, handler })
    }

    /// Opens `url`, gives client-side rendering `wait` to settle and returns the
    /// rendered markup.
    pub async fn render(&self, url: &str, wait: Duration) -> Result<String, FetchError> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| FetchError::Browser(format!("failed to open {url}: {e}")))?;

        tokio::time::sleep(wait).await;

        let html = page.content().await;
        if let Err(e) = page.close().await {
            warn!("Failed to close page: {}", e);
        }

        html.map_err(|e| FetchError::Browser(format!("failed to read page content: {e}")))
    }

    /// Shuts the browser down and waits for the process to exit.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.handler.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
