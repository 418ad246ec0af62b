//! Accounts overview screen
//!
//! Navigating here doubles as the snapshot point: the account-listing
//! response the screen renders from is captured verbatim into the
//! `accountBalance.json` fixture for later balance math and API specs.

use chromiumoxide::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::time::{sleep, Duration, Instant};
use tracing::info;

use crate::browser::js_string;
use crate::capture::ResponseCapture;
use crate::config::Timeouts;
use crate::error::{HarnessError, HarnessResult};
use crate::fixtures::{AccountSnapshot, FixtureStore};
use crate::pages::base::BasePage;

const OVERVIEW_LINK: &str = r#"a[href*="overview.htm"]"#;
const ACCOUNT_TABLE: &str = "#accountTable";
const TOTAL_CELL: &str = "#accountTable tr:last-child td:nth-child(2)";

/// Backend path fragment of the account-listing request.
const LISTING_FRAGMENT: &str = "/bank/customers";

static NON_CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("static regex"));

/// Parse a rendered currency string ("$1,234.56") into a float.
pub fn parse_currency(text: &str) -> HarnessResult<f64> {
    let cleaned = NON_CURRENCY.replace_all(text, "");
    cleaned.parse::<f64>().map_err(|_| {
        HarnessError::AssertionFailed(format!("not a currency amount: '{}'", text.trim()))
    })
}

pub struct AccountsOverviewPage {
    base: BasePage,
    store: FixtureStore,
}

impl AccountsOverviewPage {
    pub fn new(page: Page, timeouts: Timeouts, store: FixtureStore) -> Self {
        Self { base: BasePage::new(page, timeouts), store }
    }

    /// Click through to the overview, capture the listing response into
    /// the fixture store, and wait for the table to render.
    pub async fn navigate_to_overview(&self) -> HarnessResult<AccountSnapshot> {
        let capture = ResponseCapture::subscribe(self.base.page(), LISTING_FRAGMENT).await?;
        self.base.click(OVERVIEW_LINK).await?;

        let response = capture.await_match(self.base.timeouts().element).await?;
        let snapshot: AccountSnapshot = serde_json::from_value(response.body)?;
        self.store.save_account_snapshot(&snapshot)?;
        info!(accounts = snapshot.0.len(), "captured account snapshot");

        self.base.wait_for_selector(ACCOUNT_TABLE).await?;
        Ok(snapshot)
    }

    /// Aggregate balance from the table's last row.
    pub async fn total_balance(&self) -> HarnessResult<f64> {
        self.base.wait_for_selector(TOTAL_CELL).await?;
        let text = self.base.inner_text(TOTAL_CELL).await?;
        parse_currency(&text)
    }

    /// Assert a row links to the given account id.
    pub async fn verify_account_listed(&self, account_id: &str) -> HarnessResult<()> {
        let script = format!(
            r#"(function() {{
                const links = document.querySelectorAll('#accountTable a');
                return Array.from(links).some(a => a.innerText.trim() === {id});
            }})()"#,
            id = js_string(account_id)
        );

        let deadline = Instant::now() + self.base.timeouts().element;
        loop {
            let found: bool = self.base.page().evaluate(script.clone()).await?.into_value()?;
            if found {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::AssertionFailed(format!(
                    "account {} not listed in overview",
                    account_id
                )));
            }
            sleep(Duration::from_millis(100)).await;
        }
    }

    /// Assert the displayed total matches within a two-decimal tolerance.
    pub async fn verify_balance(&self, expected: f64) -> HarnessResult<()> {
        let actual = self.total_balance().await?;
        if (actual - expected).abs() >= 0.01 {
            return Err(HarnessError::AssertionFailed(format!(
                "overview balance {:.2} differs from expected {:.2}",
                actual, expected
            )));
        }
        Ok(())
    }
}
