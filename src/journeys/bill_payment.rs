//! Bill payment to a freshly generated payee

use futures::FutureExt;

use crate::pages::accounts_overview::AccountsOverviewPage;
use crate::pages::bill_pay::BillPayPage;
use crate::runner::{JourneyEnv, JourneyFuture};
use crate::testdata;

const PAYMENT_AMOUNT: f64 = 100.0;

pub fn run(env: &mut JourneyEnv) -> JourneyFuture<'_> {
    async move {
        let page = env.open_page().await?;
        let timeouts = env.config.timeouts;

        let overview = AccountsOverviewPage::new(page.clone(), timeouts, env.store.clone());
        let snapshot = overview.navigate_to_overview().await?;
        let initial_balance = overview.total_balance().await?;
        env.ctx.accounts = Some(snapshot);

        let payee_name = testdata::full_name();
        let bill_pay = BillPayPage::new(page.clone(), timeouts);
        bill_pay.navigate_to_bill_pay().await?;
        bill_pay.fill_payee_information(&payee_name).await?;
        bill_pay.fill_payment_details(PAYMENT_AMOUNT).await?;
        bill_pay.submit_payment().await?;
        bill_pay.verify_payment_success(&payee_name, PAYMENT_AMOUNT).await?;

        let snapshot = overview.navigate_to_overview().await?;
        env.ctx.accounts = Some(snapshot);
        overview.verify_balance(initial_balance - PAYMENT_AMOUNT).await?;

        Ok(())
    }
    .boxed()
}
