//! Header navigation menu
//!
//! Menu entries are a fixed enumerated set resolved to locators and
//! expected destinations through [`MenuItem`], instead of a string-keyed
//! locator dictionary.

use chromiumoxide::Page;
use serde::{Deserialize, Serialize};

use crate::config::Timeouts;
use crate::error::{HarnessError, HarnessResult};
use crate::pages::base::BasePage;

/// Named targets in the header panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuItem {
    Home,
    AboutUs,
    Services,
    Products,
    Locations,
    AdminPage,
    Contact,
}

impl MenuItem {
    /// CSS locator inside the header panel.
    pub fn selector(self) -> &'static str {
        match self {
            MenuItem::Home => "#headerPanel li.home a",
            MenuItem::AboutUs => r##"#headerPanel a[href*="about.htm"]"##,
            MenuItem::Services => r##"#headerPanel a[href*="services.htm"]"##,
            MenuItem::Products => r##"#headerPanel a[href*="products"]"##,
            MenuItem::Locations => r##"#headerPanel a[href*="solutions"]"##,
            MenuItem::AdminPage => r##"#headerPanel a[href*="admin.htm"]"##,
            MenuItem::Contact => "#headerPanel li.contact a",
        }
    }

    /// Products and Locations leave the application for the vendor site;
    /// the caller must navigate back explicitly.
    pub fn is_external(self) -> bool {
        matches!(self, MenuItem::Products | MenuItem::Locations)
    }

    /// Host expected after following an external entry.
    pub fn external_host(self) -> Option<&'static str> {
        self.is_external().then_some("parasoft.com")
    }
}

pub struct NavigationMenu {
    base: BasePage,
}

impl NavigationMenu {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { base: BasePage::new(page, timeouts) }
    }

    pub async fn click_item(&self, item: MenuItem) -> HarnessResult<()> {
        self.base.click_and_navigate(item.selector()).await
    }

    /// Assert the current URL contains the expected fragment.
    pub async fn verify_current_url(&self, expected_fragment: &str) -> HarnessResult<()> {
        let url = self.base.current_url().await?;
        if !url.contains(expected_fragment) {
            return Err(HarnessError::AssertionFailed(format!(
                "expected URL containing '{}', got: {}",
                expected_fragment, url
            )));
        }
        Ok(())
    }

    /// Assert we ended on an external entry's vendor host.
    pub async fn verify_external_host(&self, item: MenuItem) -> HarnessResult<()> {
        let host = item.external_host().ok_or_else(|| {
            HarnessError::AssertionFailed(format!("{:?} is not an external menu entry", item))
        })?;
        self.verify_current_url(host).await
    }

    /// Explicit recovery after an external entry.
    pub async fn return_to_base(&self, base_url: &str) -> HarnessResult<()> {
        self.base.navigate_to(base_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_serde_names() {
        let item: MenuItem = serde_json::from_str(r#""aboutUs""#).unwrap();
        assert_eq!(item, MenuItem::AboutUs);
        let item: MenuItem = serde_json::from_str(r#""adminPage""#).unwrap();
        assert_eq!(item, MenuItem::AdminPage);
        assert_eq!(serde_json::to_string(&MenuItem::Home).unwrap(), r#""home""#);
    }

    #[test]
    fn test_external_entries() {
        assert!(MenuItem::Products.is_external());
        assert!(MenuItem::Locations.is_external());
        assert!(!MenuItem::AboutUs.is_external());
        assert_eq!(MenuItem::Products.external_host(), Some("parasoft.com"));
        assert_eq!(MenuItem::Home.external_host(), None);
    }

    #[test]
    fn test_every_item_has_a_header_scoped_selector() {
        for item in [
            MenuItem::Home,
            MenuItem::AboutUs,
            MenuItem::Services,
            MenuItem::Products,
            MenuItem::Locations,
            MenuItem::AdminPage,
            MenuItem::Contact,
        ] {
            assert!(item.selector().starts_with("#headerPanel"));
        }
    }
}
