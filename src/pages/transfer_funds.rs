//! Transfer-funds screen

use chromiumoxide::Page;

use crate::api::format_amount;
use crate::config::Timeouts;
use crate::error::HarnessResult;
use crate::pages::base::BasePage;

const TRANSFER_LINK: &str = r#"a[href*="transfer.htm"]"#;
const AMOUNT_INPUT: &str = "#amount";
const FROM_ACCOUNT_SELECT: &str = "#fromAccountId";
const TO_ACCOUNT_SELECT: &str = "#toAccountId";
const TRANSFER_BUTTON: &str = r#"input[value="Transfer"]"#;
const RESULT_PANEL: &str = "#rightPanel";

pub struct TransferFundsPage {
    base: BasePage,
}

impl TransferFundsPage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    /// Open the transfer form and wait for both dropdowns to populate.
    pub async fn navigate_to_transfer(&self) -> HarnessResult<()> {
        self.base.click_and_navigate(TRANSFER_LINK).await?;
        self.base.assert_visible(FROM_ACCOUNT_SELECT).await?;
        self.base.assert_visible(TO_ACCOUNT_SELECT).await
    }

    /// First candidate account id, read from the dropdown's option values.
    pub async fn first_account_id(&self) -> HarnessResult<String> {
        self.base.option_value(FROM_ACCOUNT_SELECT, 0).await
    }

    /// Second candidate account id.
    pub async fn second_account_id(&self) -> HarnessResult<String> {
        self.base.option_value(FROM_ACCOUNT_SELECT, 1).await
    }

    /// Fill the amount, transfer from the second account to the first, and
    /// assert the literal success heading.
    pub async fn perform_transfer(&self, amount: f64) -> HarnessResult<()> {
        self.base.fill(AMOUNT_INPUT, &format_amount(amount)).await?;

        let from = self.second_account_id().await?;
        let to = self.first_account_id().await?;
        self.base.select_option_value(FROM_ACCOUNT_SELECT, &from).await?;
        self.base.select_option_value(TO_ACCOUNT_SELECT, &to).await?;

        self.base.click(TRANSFER_BUTTON).await?;
        self.base.page().wait_for_navigation().await?;
        self.base
            .assert_text_contains(RESULT_PANEL, "Transfer Complete!")
            .await
    }
}
