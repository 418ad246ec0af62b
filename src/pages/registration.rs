//! Registration screen

use std::time::Duration;

use chromiumoxide::Page;

use crate::config::Timeouts;
use crate::error::HarnessResult;
use crate::fixtures::UserCredentials;
use crate::pages::base::BasePage;

const REGISTER_LINK: &str = r#"a[href*="register.htm"]"#;
const REGISTER_BUTTON: &str = r#"input[value="Register"]"#;
const SUCCESS_HEADING: &str = "h1.title";

pub struct RegistrationPage {
    base: BasePage,
}

impl RegistrationPage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    pub async fn navigate_to_register(&self) -> HarnessResult<()> {
        self.base.click_and_navigate(REGISTER_LINK).await
    }

    /// Fill the fixed registration field set from a generated identity.
    pub async fn fill_registration_form(&self, user: &UserCredentials) -> HarnessResult<()> {
        self.base.fill(r#"input[id="customer.firstName"]"#, &user.first_name).await?;
        self.base.fill(r#"input[id="customer.lastName"]"#, &user.last_name).await?;
        self.base.fill(r#"input[id="customer.address.street"]"#, &user.address).await?;
        self.base.fill(r#"input[id="customer.address.city"]"#, &user.city).await?;
        self.base.fill(r#"input[id="customer.address.state"]"#, &user.state).await?;
        self.base.fill(r#"input[id="customer.address.zipCode"]"#, &user.zip_code).await?;
        self.base.fill(r#"input[id="customer.phoneNumber"]"#, &user.phone).await?;
        self.base.fill(r#"input[id="customer.ssn"]"#, &user.ssn).await?;
        self.base.fill(r#"input[id="customer.username"]"#, &user.username).await?;
        self.base.fill(r#"input[id="customer.password"]"#, &user.password).await?;
        self.base.fill(r#"input[id="repeatedPassword"]"#, &user.password).await?;
        Ok(())
    }

    /// Submit and wait (10s override) for the success heading.
    pub async fn submit_registration(&self) -> HarnessResult<()> {
        self.base.click(REGISTER_BUTTON).await?;
        self.base
            .wait_for_selector_with(SUCCESS_HEADING, Duration::from_secs(10))
            .await
    }

    pub async fn verify_successful_registration(&self) -> HarnessResult<()> {
        self.base.assert_visible(SUCCESS_HEADING).await
    }
}
