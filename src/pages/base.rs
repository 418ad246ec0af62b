//! Shared page plumbing: locator waits, form filling, login

use std::time::Duration;

use chromiumoxide::Page;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::browser::js_string;
use crate::config::Timeouts;
use crate::error::{HarnessError, HarnessResult};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Selectors shared by every screen.
const USERNAME_INPUT: &str = r#"input[name="username"]"#;
const PASSWORD_INPUT: &str = r#"input[name="password"]"#;
const LOGIN_BUTTON: &str = r#"input[value="Log In"]"#;
const WELCOME_MARKER: &str = "#leftPanel p.smallText";

/// Base page object: holds the live page handle and the suite's wait
/// bounds. Concrete screens compose this.
#[derive(Clone)]
pub struct BasePage {
    page: Page,
    timeouts: Timeouts,
}

impl BasePage {
    pub fn new(page: Page, timeouts: Timeouts) -> Self {
        Self { page, timeouts }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub async fn navigate_to(&self, url: &str) -> HarnessResult<()> {
        debug!("navigate to {}", url);
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    pub async fn current_url(&self) -> HarnessResult<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    /// Block until the selector is visible, bounded by the element timeout.
    pub async fn wait_for_selector(&self, selector: &str) -> HarnessResult<()> {
        self.wait_for_selector_with(selector, self.timeouts.element).await
    }

    /// Same, with an explicit override (some screens allow up to 10s).
    pub async fn wait_for_selector_with(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> HarnessResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_visible(selector).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::SelectorTimeout {
                    selector: selector.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn is_visible(&self, selector: &str) -> HarnessResult<bool> {
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                if (!el) return false;
                const rect = el.getBoundingClientRect();
                return rect.width > 0 && rect.height > 0;
            }})()"#,
            sel = js_string(selector)
        );
        Ok(self.page.evaluate(script).await?.into_value()?)
    }

    /// Wait for the element, then click it.
    pub async fn click(&self, selector: &str) -> HarnessResult<()> {
        self.click_with(selector, self.timeouts.element).await
    }

    pub async fn click_with(&self, selector: &str, timeout: Duration) -> HarnessResult<()> {
        self.wait_for_selector_with(selector, timeout).await?;
        self.page.find_element(selector).await?.click().await?;
        Ok(())
    }

    /// Click a control that triggers a full page navigation.
    pub async fn click_and_navigate(&self, selector: &str) -> HarnessResult<()> {
        self.click(selector).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// Set an input's value, firing the input/change events the page's
    /// scripts listen for.
    pub async fn fill(&self, selector: &str, value: &str) -> HarnessResult<()> {
        self.wait_for_selector(selector).await?;
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.focus();
                el.value = {val};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = js_string(selector),
            val = js_string(value)
        );
        let ok: bool = self.page.evaluate(script).await?.into_value()?;
        if !ok {
            return Err(HarnessError::AssertionFailed(format!(
                "fill target disappeared: {}",
                selector
            )));
        }
        Ok(())
    }

    /// Type through the keyboard with a per-character delay.
    pub async fn type_with_delay(
        &self,
        selector: &str,
        text: &str,
        delay: Duration,
    ) -> HarnessResult<()> {
        self.wait_for_selector(selector).await?;
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        for ch in text.chars() {
            element.type_str(ch.to_string()).await?;
            sleep(delay).await;
        }
        Ok(())
    }

    pub async fn inner_text(&self, selector: &str) -> HarnessResult<String> {
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                return el ? el.innerText : null;
            }})()"#,
            sel = js_string(selector)
        );
        let text: Option<String> = self.page.evaluate(script).await?.into_value()?;
        text.ok_or_else(|| {
            HarnessError::AssertionFailed(format!("no element for text read: {}", selector))
        })
    }

    pub async fn attribute(&self, selector: &str, name: &str) -> HarnessResult<Option<String>> {
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                return el ? el.getAttribute({attr}) : null;
            }})()"#,
            sel = js_string(selector),
            attr = js_string(name)
        );
        Ok(self.page.evaluate(script).await?.into_value()?)
    }

    /// Select a dropdown option by its value attribute.
    pub async fn select_option_value(&self, selector: &str, value: &str) -> HarnessResult<()> {
        self.wait_for_selector(selector).await?;
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.value = {val};
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return el.value === {val};
            }})()"#,
            sel = js_string(selector),
            val = js_string(value)
        );
        let ok: bool = self.page.evaluate(script).await?.into_value()?;
        if !ok {
            return Err(HarnessError::AssertionFailed(format!(
                "no option with value '{}' in {}",
                value, selector
            )));
        }
        Ok(())
    }

    /// Select a dropdown option by position.
    pub async fn select_option_index(&self, selector: &str, index: usize) -> HarnessResult<()> {
        self.wait_for_selector(selector).await?;
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                if (!el || el.options.length <= {idx}) return false;
                el.selectedIndex = {idx};
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = js_string(selector),
            idx = index
        );
        let ok: bool = self.page.evaluate(script).await?.into_value()?;
        if !ok {
            return Err(HarnessError::AssertionFailed(format!(
                "no option at index {} in {}",
                index, selector
            )));
        }
        Ok(())
    }

    /// Value attribute of the nth option (0-based) of a dropdown.
    pub async fn option_value(&self, selector: &str, index: usize) -> HarnessResult<String> {
        self.wait_for_selector(selector).await?;
        let script = format!(
            r#"(function() {{
                const el = document.querySelector({sel});
                if (!el || el.options.length <= {idx}) return null;
                return el.options[{idx}].value;
            }})()"#,
            sel = js_string(selector),
            idx = index
        );
        let value: Option<String> = self.page.evaluate(script).await?.into_value()?;
        value.ok_or_else(|| {
            HarnessError::AssertionFailed(format!("no option at index {} in {}", index, selector))
        })
    }

    pub async fn assert_visible(&self, selector: &str) -> HarnessResult<()> {
        self.wait_for_selector(selector).await
    }

    pub async fn assert_text_contains(&self, selector: &str, needle: &str) -> HarnessResult<()> {
        self.wait_for_selector(selector).await?;
        let text = self.inner_text(selector).await?;
        if !text.contains(needle) {
            return Err(HarnessError::AssertionFailed(format!(
                "expected '{}' to contain '{}', got: {}",
                selector,
                needle,
                text.trim()
            )));
        }
        Ok(())
    }

    /// Fill the two login fields and submit.
    pub async fn login(&self, username: &str, password: &str) -> HarnessResult<()> {
        self.fill(USERNAME_INPUT, username).await?;
        self.fill(PASSWORD_INPUT, password).await?;
        self.click(LOGIN_BUTTON).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// Block (up to 10s) until the Welcome marker renders.
    pub async fn verify_logged_in(&self) -> HarnessResult<()> {
        self.wait_for_selector_with(WELCOME_MARKER, Duration::from_secs(10)).await?;
        self.assert_text_contains(WELCOME_MARKER, "Welcome").await
    }
}
