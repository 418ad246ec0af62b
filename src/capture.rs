//! Awaitable network-response capture
//!
//! Journeys that need a backend payload (the account listing rendered by
//! the overview screen) subscribe *before* the click that triggers the
//! request, then await the first matching response under a bounded
//! timeout. No match within the bound is an explicit error, never a hang.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::network::{
    EventResponseReceived, GetResponseBodyParams, RequestId,
};
use chromiumoxide::Page;
use futures::{Stream, StreamExt};
use tokio::time::{sleep, timeout, Instant};
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

/// A response observed and decoded by a capture.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    pub url: String,
    pub status: i64,
    pub body: serde_json::Value,
}

/// One-shot subscription for the first 200 response whose URL contains a
/// fragment.
pub struct ResponseCapture {
    page: Page,
    events: Pin<Box<dyn Stream<Item = Arc<EventResponseReceived>> + Send + Sync>>,
    pattern: String,
}

impl ResponseCapture {
    /// Register the listener. Must happen before the triggering action or
    /// the response can be missed.
    pub async fn subscribe(page: &Page, url_fragment: &str) -> HarnessResult<Self> {
        let events = page.event_listener::<EventResponseReceived>().await?;
        Ok(Self {
            page: page.clone(),
            events: Box::pin(events),
            pattern: url_fragment.to_string(),
        })
    }

    /// Wait for the first matching response and decode its JSON body.
    pub async fn await_match(mut self, wait: Duration) -> HarnessResult<CapturedResponse> {
        let deadline = Instant::now() + wait;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(self.timeout_error(wait));
            }

            let event = match timeout(remaining, self.events.next()).await {
                Ok(Some(event)) => event,
                // Stream ended (page closed) or the deadline elapsed.
                Ok(None) | Err(_) => return Err(self.timeout_error(wait)),
            };

            if !matches(&event.response.url, event.response.status, &self.pattern) {
                continue;
            }

            debug!(url = %event.response.url, "captured matching response");
            let body = self.fetch_body(event.request_id.clone()).await?;
            return Ok(CapturedResponse {
                url: event.response.url.clone(),
                status: event.response.status,
                body,
            });
        }
    }

    fn timeout_error(&self, wait: Duration) -> HarnessError {
        HarnessError::CaptureTimeout {
            pattern: self.pattern.clone(),
            timeout_ms: wait.as_millis() as u64,
        }
    }

    /// The body may not be available the instant the response event fires;
    /// retry briefly before giving up.
    async fn fetch_body(&self, request_id: RequestId) -> HarnessResult<serde_json::Value> {
        let mut last_err = None;
        for _ in 0..5 {
            match self
                .page
                .execute(GetResponseBodyParams::new(request_id.clone()))
                .await
            {
                Ok(resp) => {
                    if resp.result.base64_encoded {
                        return Err(HarnessError::Capture(
                            "expected a JSON body, got base64-encoded content".to_string(),
                        ));
                    }
                    return Ok(serde_json::from_str(&resp.result.body)?);
                }
                Err(e) => {
                    last_err = Some(e);
                    sleep(Duration::from_millis(100)).await;
                }
            }
        }
        Err(last_err
            .map(HarnessError::from)
            .unwrap_or_else(|| HarnessError::Capture("response body never became readable".to_string())))
    }
}

fn matches(url: &str, status: i64, pattern: &str) -> bool {
    status == 200 && url.contains(pattern)
}
