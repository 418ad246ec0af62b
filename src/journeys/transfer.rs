//! Internal transfer between two owned accounts

use futures::FutureExt;

use crate::pages::accounts_overview::AccountsOverviewPage;
use crate::pages::transfer_funds::TransferFundsPage;
use crate::runner::{JourneyEnv, JourneyFuture};

const TRANSFER_AMOUNT: f64 = 100.0;

pub fn run(env: &mut JourneyEnv) -> JourneyFuture<'_> {
    async move {
        let page = env.open_page().await?;
        let timeouts = env.config.timeouts;

        let overview = AccountsOverviewPage::new(page.clone(), timeouts, env.store.clone());
        let snapshot = overview.navigate_to_overview().await?;
        let initial_balance = overview.total_balance().await?;
        env.ctx.accounts = Some(snapshot);

        let transfer = TransferFundsPage::new(page.clone(), timeouts);
        transfer.navigate_to_transfer().await?;
        transfer.perform_transfer(TRANSFER_AMOUNT).await?;

        // Money moved between owned accounts, so the aggregate must not
        // change.
        let snapshot = overview.navigate_to_overview().await?;
        env.ctx.accounts = Some(snapshot);
        overview.verify_balance(initial_balance).await?;

        Ok(())
    }
    .boxed()
}
