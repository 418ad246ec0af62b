//! Open-new-account screen

use std::time::Duration;

use chromiumoxide::Page;

use crate::config::Timeouts;
use crate::error::HarnessResult;
use crate::pages::base::BasePage;

const OPEN_ACCOUNT_LINK: &str = r#"a[href*="openaccount.htm"]"#;
const TYPE_DROPDOWN: &str = "#type";
const FROM_ACCOUNT_DROPDOWN: &str = "#fromAccountId";
const OPEN_BUTTON: &str = r#"input[value="Open New Account"]"#;
const NEW_ACCOUNT_LINK: &str = "a#newAccountId";

/// Account types as the UI's option values encode them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn option_value(self) -> &'static str {
        match self {
            AccountType::Checking => "0",
            AccountType::Savings => "1",
        }
    }
}

pub struct OpenAccountPage {
    base: BasePage,
}

impl OpenAccountPage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    pub async fn navigate_to_open_account(&self) -> HarnessResult<()> {
        self.base.click_and_navigate(OPEN_ACCOUNT_LINK).await?;
        self.base.wait_for_selector(TYPE_DROPDOWN).await
    }

    pub async fn select_account_type(&self, account_type: AccountType) -> HarnessResult<()> {
        self.base
            .select_option_value(TYPE_DROPDOWN, account_type.option_value())
            .await
    }

    /// Pick the funding account by dropdown position.
    pub async fn select_from_account(&self, index: usize) -> HarnessResult<()> {
        self.base.select_option_index(FROM_ACCOUNT_DROPDOWN, index).await
    }

    /// Submit and wait (10s override) for the new-account link to render.
    pub async fn submit(&self) -> HarnessResult<()> {
        self.base.click(OPEN_BUTTON).await?;
        self.base
            .wait_for_selector_with(NEW_ACCOUNT_LINK, Duration::from_secs(10))
            .await
    }

    /// Account id scraped from the confirmation link text.
    pub async fn new_account_id(&self) -> HarnessResult<String> {
        let text = self.base.inner_text(NEW_ACCOUNT_LINK).await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_option_values() {
        assert_eq!(AccountType::Checking.option_value(), "0");
        assert_eq!(AccountType::Savings.option_value(), "1");
    }
}
