//! Login screen

use std::time::Duration;

use chromiumoxide::Page;

use crate::config::Timeouts;
use crate::error::HarnessResult;
use crate::pages::base::BasePage;

pub struct LoginPage {
    base: BasePage,
}

impl LoginPage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Log in and wait for the left panel to render (10s override).
    pub async fn login(&self, username: &str, password: &str) -> HarnessResult<()> {
        self.base.login(username, password).await?;
        self.base
            .wait_for_selector_with("#leftPanel", Duration::from_secs(10))
            .await
    }

    pub async fn verify_login_success(&self) -> HarnessResult<()> {
        self.base.assert_visible("#leftPanel").await
    }
}
