//! Journey runner: ordered, single-worker execution with one retry
//!
//! Journeys run strictly in declaration order against one browser and one
//! remote account; there is no parallelism to coordinate. A failed
//! journey is retried once on a fresh page, a second failure is recorded
//! with a screenshot of the page it died on. No compensating transactions
//! exist: whatever a failed journey already submitted stays submitted.

use std::time::Instant;

use chromiumoxide::Page;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::browser::BrowserHandle;
use crate::config::SuiteConfig;
use crate::error::HarnessResult;
use crate::fixtures::{FixtureStore, RunContext};

pub type JourneyFuture<'a> = BoxFuture<'a, HarnessResult<()>>;
pub type JourneyFn = for<'a> fn(&'a mut JourneyEnv) -> JourneyFuture<'a>;

/// A named user journey.
pub struct Journey {
    pub name: &'static str,
    pub run: JourneyFn,
}

/// Everything a journey gets to touch: read-only config, the fixture
/// store, the shared browser, and the per-run context.
pub struct JourneyEnv {
    pub config: SuiteConfig,
    pub store: FixtureStore,
    pub browser: BrowserHandle,
    pub ctx: RunContext,
    page: Option<Page>,
}

impl JourneyEnv {
    pub fn new(
        config: SuiteConfig,
        store: FixtureStore,
        browser: BrowserHandle,
        ctx: RunContext,
    ) -> Self {
        Self { config, store, browser, ctx, page: None }
    }

    /// Fresh page with the stored session replayed and the index loaded,
    /// the starting state every journey assumes. At most one journey page
    /// is open at a time: the previous one is closed here, so tabs do not
    /// accumulate across retries and failure screenshots hit the live
    /// page.
    pub async fn open_page(&mut self) -> HarnessResult<Page> {
        if let Some(old) = self.page.take() {
            if let Err(e) = old.close().await {
                warn!("could not close previous page: {}", e);
            }
        }

        let page = self.browser.new_page().await?;
        if let Some(session) = &self.ctx.session {
            session.restore(&page).await?;
        }
        page.goto(self.config.index_url()).await?;
        page.wait_for_navigation().await?;
        self.page = Some(page.clone());
        Ok(page)
    }

    /// Close the tracked page, then the browser.
    pub async fn shutdown(self) -> HarnessResult<()> {
        if let Some(page) = self.page {
            if let Err(e) = page.close().await {
                warn!("could not close final page: {}", e);
            }
        }
        self.browser.close().await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyResult {
    pub name: String,
    pub success: bool,
    pub attempts: usize,
    pub duration_ms: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<JourneyResult>,
}

/// Sequential runner with a bounded per-journey retry budget.
pub struct Runner {
    retries: usize,
}

impl Default for Runner {
    fn default() -> Self {
        // Suite-wide single-retry policy.
        Self { retries: 1 }
    }
}

impl Runner {
    pub fn new(retries: usize) -> Self {
        Self { retries }
    }

    pub async fn run(
        &self,
        env: &mut JourneyEnv,
        journeys: &[Journey],
    ) -> HarnessResult<SuiteResult> {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} journey(s)...", journeys.len());

        for journey in journeys {
            let result = self.run_journey(env, journey).await;
            if result.success {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!("");
        info!("Journey results: {} passed, {} failed ({} ms)", passed, failed, duration_ms);

        Ok(SuiteResult { total: journeys.len(), passed, failed, duration_ms, results })
    }

    async fn run_journey(&self, env: &mut JourneyEnv, journey: &Journey) -> JourneyResult {
        let start = Instant::now();
        let mut attempts = 0;
        let mut last_error = None;

        while attempts <= self.retries {
            attempts += 1;
            match (journey.run)(env).await {
                Ok(()) => {
                    return JourneyResult {
                        name: journey.name.to_string(),
                        success: true,
                        attempts,
                        duration_ms: start.elapsed().as_millis() as u64,
                        error: None,
                    };
                }
                Err(e) => {
                    let screenshot = format!("{}-attempt-{}", journey.name, attempts);
                    if let Err(shot_err) = env
                        .browser
                        .failure_screenshot(&env.store.results_dir(), &screenshot)
                        .await
                    {
                        warn!("could not capture failure screenshot: {}", shot_err);
                    }
                    if attempts <= self.retries {
                        warn!("{} failed (attempt {}): {}, retrying", journey.name, attempts, e);
                    }
                    last_error = Some(e.to_string());
                }
            }
        }

        JourneyResult {
            name: journey.name.to_string(),
            success: false,
            attempts,
            duration_ms: start.elapsed().as_millis() as u64,
            error: last_error,
        }
    }

    /// Write the aggregate result file into `results/`.
    pub fn write_results(&self, store: &FixtureStore, suite: &SuiteResult) -> HarnessResult<()> {
        let path = store.save_result("test-results.json", &serde_json::to_value(suite)?)?;
        info!("Results written to: {}", path.display());
        Ok(())
    }
}
