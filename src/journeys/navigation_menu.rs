//! Walks the header menu per the cases in test-data/navigation-menu.json

use futures::FutureExt;
use tracing::info;

use crate::pages::navigation::{MenuItem, NavigationMenu};
use crate::runner::{JourneyEnv, JourneyFuture};

pub fn run(env: &mut JourneyEnv) -> JourneyFuture<'_> {
    async move {
        let cases = env.store.load_menu_cases()?;
        let page = env.open_page().await?;
        let menu = NavigationMenu::new(page, env.config.timeouts);

        for case in cases {
            info!(item = ?case.name, "navigation case");
            menu.click_item(case.name).await?;
            if case.name.is_external() {
                // Products and Locations leave the demo site entirely.
                menu.verify_external_host(case.name).await?;
                menu.return_to_base(&env.config.index_url()).await?;
            } else {
                menu.verify_current_url(&case.url_path).await?;
                menu.click_item(MenuItem::Home).await?;
            }
        }

        Ok(())
    }
    .boxed()
}
