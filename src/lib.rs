//! ParaBank E2E Test Suite
//!
//! This crate drives the ParaBank banking demo through a real browser and
//! cross-checks the same backend over HTTP:
//! - Launches headless Chrome via chromiumoxide (CDP)
//! - Registers a fresh user and snapshots the session for reuse
//! - Models each UI screen as a page object over the shared [`BasePage`]
//! - Captures the account-listing API response into a JSON fixture
//! - Validates the REST surface directly with reqwest
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Journey Runner (tests/journeys.rs)        │
//! ├────────────────────────────────────────────────────────────┤
//! │  setup::global_setup / setup::auth_setup                   │
//! │    └── SessionSnapshot + UserCredentials persisted         │
//! │  runner::Runner                                            │
//! │    ├── journeys in declaration order, single worker        │
//! │    ├── single retry per journey, screenshot on failure     │
//! │    └── SuiteResult -> results/test-results.json            │
//! ├────────────────────────────────────────────────────────────┤
//! │  pages::*        one page object per screen                │
//! │  capture         awaitable network-response subscription   │
//! │  fixtures        test-data/*.json store + RunContext       │
//! │  api             BankApiClient over the REST surface       │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod browser;
pub mod capture;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod journeys;
pub mod pages;
pub mod runner;
pub mod session;
pub mod setup;
pub mod testdata;

pub use browser::BrowserHandle;
pub use config::SuiteConfig;
pub use error::{HarnessError, HarnessResult};
pub use fixtures::{FixtureStore, RunContext, UserCredentials};
pub use runner::{Journey, JourneyEnv, Runner};
