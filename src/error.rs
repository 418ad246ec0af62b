//! Error types for the E2E harness

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Browser launch failed: {0}")]
    Launch(String),

    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("Timed out after {timeout_ms} ms waiting for selector: {selector}")]
    SelectorTimeout { selector: String, timeout_ms: u64 },

    #[error("No response matching '{pattern}' arrived within {timeout_ms} ms")]
    CaptureTimeout { pattern: String, timeout_ms: u64 },

    #[error("Response capture failed: {0}")]
    Capture(String),

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Missing fixture: {0}")]
    MissingFixture(PathBuf),

    #[error("API request to {url} returned status {status}")]
    Api { status: u16, url: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
