//! Bill-pay screen

use std::time::Duration;

use chromiumoxide::Page;

use crate::api::format_amount;
use crate::config::Timeouts;
use crate::error::HarnessResult;
use crate::pages::base::BasePage;
use crate::testdata;

const BILL_PAY_LINK: &str = r#"#leftPanel a[href*="billpay.htm"]"#;
const PAYEE_NAME: &str = r#"input[name="payee.name"]"#;
const PAYEE_STREET: &str = r#"input[name="payee.address.street"]"#;
const PAYEE_CITY: &str = r#"input[name="payee.address.city"]"#;
const PAYEE_STATE: &str = r#"input[name="payee.address.state"]"#;
const PAYEE_ZIP: &str = r#"input[name="payee.address.zipCode"]"#;
const PAYEE_PHONE: &str = r#"input[name="payee.phoneNumber"]"#;
const PAYEE_ACCOUNT: &str = r#"input[name="payee.accountNumber"]"#;
const VERIFY_ACCOUNT: &str = r#"input[name="verifyAccount"]"#;
const AMOUNT_INPUT: &str = r#"input[name="amount"]"#;
const FROM_ACCOUNT_SELECT: &str = r#"select[name="fromAccountId"]"#;
const SEND_PAYMENT_BUTTON: &str = r#"input[value="Send Payment"]"#;
const RESULT_PANEL: &str = "#rightPanel";

/// Keystroke pacing for the address fields, mirroring human-speed entry.
const TYPE_DELAY: Duration = Duration::from_millis(100);

pub struct BillPayPage {
    base: BasePage,
}

impl BillPayPage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    pub async fn navigate_to_bill_pay(&self) -> HarnessResult<()> {
        self.base.click_and_navigate(BILL_PAY_LINK).await?;
        self.base.assert_visible(PAYEE_NAME).await
    }

    /// Fill the payee block with the given name and random address data.
    /// The 10-digit payee account number is generated once and entered in
    /// both the account and confirmation fields.
    pub async fn fill_payee_information(&self, payee_name: &str) -> HarnessResult<()> {
        self.base.fill(PAYEE_NAME, payee_name).await?;
        self.base
            .type_with_delay(PAYEE_STREET, &testdata::street_address(), TYPE_DELAY)
            .await?;
        self.base.type_with_delay(PAYEE_CITY, &testdata::city(), TYPE_DELAY).await?;
        self.base.type_with_delay(PAYEE_STATE, &testdata::state(), TYPE_DELAY).await?;
        self.base.type_with_delay(PAYEE_ZIP, &testdata::zip_code(), TYPE_DELAY).await?;
        self.base.fill(PAYEE_PHONE, &testdata::phone_number()).await?;

        let account_number = testdata::numeric_string(10);
        self.base.fill(PAYEE_ACCOUNT, &account_number).await?;
        self.base.fill(VERIFY_ACCOUNT, &account_number).await?;
        Ok(())
    }

    /// Fill the amount and pay from the first listed account.
    pub async fn fill_payment_details(&self, amount: f64) -> HarnessResult<()> {
        self.base.fill(AMOUNT_INPUT, &format_amount(amount)).await?;
        let from = self.base.option_value(FROM_ACCOUNT_SELECT, 0).await?;
        self.base.select_option_value(FROM_ACCOUNT_SELECT, &from).await
    }

    pub async fn submit_payment(&self) -> HarnessResult<()> {
        self.base.click(SEND_PAYMENT_BUTTON).await?;
        self.base.page().wait_for_navigation().await?;
        Ok(())
    }

    /// The confirmation must name the payee and the currency-formatted
    /// amount.
    pub async fn verify_payment_success(&self, payee_name: &str, amount: f64) -> HarnessResult<()> {
        self.base
            .assert_text_contains(RESULT_PANEL, "Bill Payment Complete")
            .await?;
        self.base.assert_text_contains(RESULT_PANEL, payee_name).await?;
        self.base
            .assert_text_contains(RESULT_PANEL, &format!("${:.2}", amount))
            .await
    }
}
