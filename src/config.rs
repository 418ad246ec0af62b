//! Environment-scoped suite configuration
//!
//! `TEST_ENV` selects an `env/.env.<env>` file; values already present in
//! the process environment win over the file. The loaded config is
//! read-only for the lifetime of the run.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

/// Suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// UI base URL, e.g. https://parabank.parasoft.com
    pub base_url: String,

    /// REST proxy base URL, e.g. .../parabank/services_proxy
    pub api_base_url: String,

    /// Fallback login credentials
    pub credentials: DefaultCredentials,

    /// Wait bounds for navigation and element expectations
    pub timeouts: Timeouts,

    /// Run the browser headless
    pub headless: bool,

    /// Browser viewport
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timeouts {
    /// Full page navigations
    pub navigation: Duration,

    /// Element visibility expectations
    pub element: Duration,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://parabank.parasoft.com".to_string(),
            api_base_url: "https://parabank.parasoft.com/parabank/services_proxy".to_string(),
            credentials: DefaultCredentials {
                username: "john".to_string(),
                password: "demo".to_string(),
            },
            timeouts: Timeouts {
                navigation: Duration::from_millis(30_000),
                element: Duration::from_millis(5_000),
            },
            headless: true,
            viewport: Viewport { width: 1280, height: 720 },
        }
    }
}

impl SuiteConfig {
    /// Load configuration for the environment named by `TEST_ENV`.
    pub fn load() -> HarnessResult<Self> {
        let env = std::env::var("TEST_ENV").unwrap_or_else(|_| "prod".to_string());
        Self::load_env(&env)
    }

    /// Load configuration for a named environment.
    pub fn load_env(env: &str) -> HarnessResult<Self> {
        let env_file = format!("env/.env.{}", env.to_lowercase());
        if Path::new(&env_file).exists() {
            debug!("loading environment file {}", env_file);
            dotenvy::from_path(&env_file)
                .map_err(|e| HarnessError::Config(format!("{}: {}", env_file, e)))?;
        } else {
            debug!("no {} file, using process environment only", env_file);
        }

        let defaults = Self::default();

        Ok(Self {
            base_url: env_or("BASE_URL", &defaults.base_url),
            api_base_url: env_or("API_BASE_URL", &defaults.api_base_url),
            credentials: DefaultCredentials {
                username: env_or("DEFAULT_USERNAME", &defaults.credentials.username),
                password: env_or("DEFAULT_PASSWORD", &defaults.credentials.password),
            },
            timeouts: Timeouts {
                navigation: millis_or("NAVIGATION_TIMEOUT", defaults.timeouts.navigation)?,
                element: millis_or("ELEMENT_TIMEOUT", defaults.timeouts.element)?,
            },
            headless: defaults.headless,
            viewport: defaults.viewport,
        })
    }

    /// Index page URL, the usual journey starting point.
    pub fn index_url(&self) -> String {
        format!("{}/parabank/index.htm", self.base_url)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn millis_or(key: &str, default: Duration) -> HarnessResult<Duration> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| HarnessError::Config(format!("{} must be an integer (ms): {}", key, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.timeouts.navigation, Duration::from_millis(30_000));
        assert_eq!(config.timeouts.element, Duration::from_millis(5_000));
        assert_eq!(config.credentials.username, "john");
        assert!(config.headless);
    }

    #[test]
    fn test_index_url() {
        let config = SuiteConfig::default();
        assert_eq!(
            config.index_url(),
            "https://parabank.parasoft.com/parabank/index.htm"
        );
    }

    #[test]
    fn test_millis_or_rejects_garbage() {
        std::env::set_var("PARABANK_TEST_TIMEOUT", "soon");
        let err = millis_or("PARABANK_TEST_TIMEOUT", Duration::from_millis(1)).unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
        std::env::remove_var("PARABANK_TEST_TIMEOUT");
    }
}
