//! One-time setup routines
//!
//! Two independent alternatives, both ending with a persisted session
//! snapshot so journeys skip interactive login:
//! - [`global_setup`]: register a freshly generated user on the live
//!   deployment and capture the resulting session.
//! - [`auth_setup`]: log in with stored (or default) credentials and
//!   capture the session.

use tracing::{info, warn};

use crate::browser::BrowserHandle;
use crate::config::SuiteConfig;
use crate::error::HarnessResult;
use crate::fixtures::{FixtureStore, RunContext, UserCredentials};
use crate::pages::base::BasePage;
use crate::pages::login::LoginPage;
use crate::pages::registration::RegistrationPage;
use crate::session::SessionSnapshot;

/// Register a new random user and persist credentials + session.
pub async fn global_setup(
    config: &SuiteConfig,
    store: &FixtureStore,
    browser: &BrowserHandle,
) -> HarnessResult<RunContext> {
    let page = browser.new_page().await?;
    let base = BasePage::new(page.clone(), config.timeouts);
    base.navigate_to(&config.index_url()).await?;

    let credentials = UserCredentials::generate();
    let registration = RegistrationPage::new(page.clone(), config.timeouts);
    registration.navigate_to_register().await?;
    registration.fill_registration_form(&credentials).await?;
    registration.submit_registration().await?;
    registration.verify_successful_registration().await?;

    let session = SessionSnapshot::capture(&page, &config.base_url).await?;
    store.save_session(&session)?;
    store.save_credentials(&credentials)?;
    info!(username = %credentials.username, "setup complete");
    if let Err(e) = page.close().await {
        warn!("could not close setup page: {}", e);
    }

    let mut ctx = RunContext::new(credentials);
    ctx.session = Some(session);
    Ok(ctx)
}

/// Log in with previously stored credentials (default login if none) and
/// persist a fresh session snapshot.
pub async fn auth_setup(
    config: &SuiteConfig,
    store: &FixtureStore,
    browser: &BrowserHandle,
) -> HarnessResult<RunContext> {
    let page = browser.new_page().await?;
    let login = LoginPage::new(page.clone(), config.timeouts);
    login.base().navigate_to(&config.index_url()).await?;

    let credentials = store.load_credentials_or(&config.credentials);
    login.login(&credentials.username, &credentials.password).await?;
    login.verify_login_success().await?;

    let session = SessionSnapshot::capture(&page, &config.base_url).await?;
    store.save_session(&session)?;
    info!(username = %credentials.username, "authenticated, session snapshot saved");
    if let Err(e) = page.close().await {
        warn!("could not close setup page: {}", e);
    }

    let mut ctx = RunContext::new(credentials);
    ctx.session = Some(session);
    Ok(ctx)
}
