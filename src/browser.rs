//! Browser lifecycle management over CDP

use std::path::{Path, PathBuf};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::EnableParams;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SuiteConfig;
use crate::error::{HarnessError, HarnessResult};

/// Handle to a running Chrome instance plus its CDP event loop task.
pub struct BrowserHandle {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserHandle {
    /// Launch Chrome sized to the configured viewport.
    pub async fn launch(config: &SuiteConfig) -> HarnessResult<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport.width, config.viewport.height);
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(HarnessError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        info!(headless = config.headless, "browser launched");

        // The handler stream must be polled for the browser to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("CDP handler stopped: {}", e);
                    break;
                }
            }
        });

        Ok(Self { browser, handler_task })
    }

    /// Open a fresh page with the network domain enabled so response
    /// captures can subscribe.
    pub async fn new_page(&self) -> HarnessResult<Page> {
        let page = self.browser.new_page("about:blank").await?;
        page.execute(EnableParams::default()).await?;
        debug!("opened new page");
        Ok(page)
    }

    /// Screenshot the most recently opened page into `dir`, used by the
    /// runner when a journey fails.
    pub async fn failure_screenshot(
        &self,
        dir: &Path,
        name: &str,
    ) -> HarnessResult<Option<PathBuf>> {
        let pages = self.browser.pages().await?;
        let Some(page) = pages.last() else {
            return Ok(None);
        };

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.png", name));
        page.save_screenshot(ScreenshotParams::builder().full_page(true).build(), &path)
            .await?;
        warn!("failure screenshot written to {}", path.display());
        Ok(Some(path))
    }

    /// Shut the browser down and wait for the event loop to drain.
    pub async fn close(mut self) -> HarnessResult<()> {
        self.browser.close().await?;
        let _ = self.handler_task.await;
        info!("browser closed");
        Ok(())
    }
}

/// Quote a Rust string as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_quotes_and_escapes() {
        assert_eq!(js_string("plain"), r#""plain""#);
        assert_eq!(js_string(r#"O'Neil "quoted""#), r#""O'Neil \"quoted\"""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }
}
