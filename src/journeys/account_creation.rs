//! Open a new savings account and verify the overview reflects it

use futures::FutureExt;
use tracing::info;

use crate::pages::accounts_overview::AccountsOverviewPage;
use crate::pages::base::BasePage;
use crate::pages::open_account::{AccountType, OpenAccountPage};
use crate::runner::{JourneyEnv, JourneyFuture};

pub fn run(env: &mut JourneyEnv) -> JourneyFuture<'_> {
    async move {
        let page = env.open_page().await?;
        let timeouts = env.config.timeouts;

        let base = BasePage::new(page.clone(), timeouts);
        base.verify_logged_in().await?;
        base.assert_text_contains("#leftPanel", &env.ctx.credentials.greeting()).await?;

        let overview = AccountsOverviewPage::new(page.clone(), timeouts, env.store.clone());
        let snapshot = overview.navigate_to_overview().await?;
        let initial_balance = overview.total_balance().await?;
        env.ctx.accounts = Some(snapshot);

        let open_account = OpenAccountPage::new(page.clone(), timeouts);
        open_account.navigate_to_open_account().await?;
        open_account.select_account_type(AccountType::Savings).await?;
        open_account.select_from_account(0).await?;
        open_account.submit().await?;
        let new_account_id = open_account.new_account_id().await?;
        info!(account = %new_account_id, "opened savings account");

        // Account creation moves no funds: the new row must appear and the
        // aggregate balance must be unchanged.
        let snapshot = overview.navigate_to_overview().await?;
        env.ctx.accounts = Some(snapshot);
        overview.verify_account_listed(&new_account_id).await?;
        overview.verify_balance(initial_balance).await?;

        Ok(())
    }
    .boxed()
}
