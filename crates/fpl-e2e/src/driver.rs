//! Abstract browser driver for case scenarios.
//!
//! The suite talks to the browser through the [`CaseDriver`] trait so the
//! page objects and tab assertions stay backend-agnostic: the default
//! backend is CDP via chromiumoxide (see [`crate::browser`], feature
//! `browser`), and [`MockDriver`] serves unit and integration tests
//! without a running browser.

use crate::locator::Locator;
use crate::result::{E2eError, E2eResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handle describing a located DOM element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Selector the element was resolved from
    pub selector: String,
    /// Element text content, if any
    pub text_content: Option<String>,
    /// Whether the element is currently rendered visibly
    pub visible: bool,
}

impl ElementHandle {
    /// Create a handle for a visible element
    #[must_use]
    pub fn visible(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            text_content: Some(text.into()),
            visible: true,
        }
    }
}

/// Browser configuration for a driver backend
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Timeout for navigation
    pub navigation_timeout: Duration,
    /// Timeout for element queries
    pub element_timeout: Duration,
    /// Chromium executable path override
    pub executable_path: Option<String>,
    /// Sandbox mode (disable for containers/CI)
    pub sandbox: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            navigation_timeout: Duration::from_secs(60),
            element_timeout: Duration::from_secs(30),
            executable_path: None,
            sandbox: true,
        }
    }
}

impl DriverConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headless mode
    #[must_use]
    pub const fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set navigation timeout
    #[must_use]
    pub const fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Set chromium executable path
    #[must_use]
    pub fn executable_path(mut self, path: impl Into<String>) -> Self {
        self.executable_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

/// Abstract driver trait for case scenarios.
///
/// Implementations: `ChromiumDriver` (default backend, feature `browser`)
/// and [`MockDriver`] for tests.
#[async_trait]
pub trait CaseDriver: Send {
    /// Navigate to a URL
    async fn navigate(&mut self, url: &str) -> E2eResult<()>;

    /// Get the current URL
    async fn current_url(&mut self) -> E2eResult<String>;

    /// Click the first element matching the locator
    async fn click(&mut self, locator: &Locator) -> E2eResult<()>;

    /// Fill a form field with text
    async fn fill_field(&mut self, locator: &Locator, value: &str) -> E2eResult<()>;

    /// Select an option in a dropdown
    async fn select_option(&mut self, locator: &Locator, option: &str) -> E2eResult<()>;

    /// Attach a file to an upload input
    async fn attach_file(&mut self, locator: &Locator, file_path: &str) -> E2eResult<()>;

    /// Wait until an element matching the locator is present
    async fn wait_for_element(&mut self, locator: &Locator) -> E2eResult<()>;

    /// Assert an element matching `selector` is visible and contains `text`.
    ///
    /// Fails loudly; callers (notably the tab assertion helpers) propagate
    /// the failure unmodified.
    async fn see_element_with_text(&mut self, selector: &str, text: &str) -> E2eResult<()>;

    /// Assert the page shows the given text anywhere
    async fn see_text(&mut self, text: &str) -> E2eResult<()>;

    /// Assert the given scope does not show the text
    async fn dont_see_text(&mut self, scope: &Locator, text: &str) -> E2eResult<()>;

    /// Grab the text content of the first matching element
    async fn grab_text(&mut self, locator: &Locator) -> E2eResult<String>;
}

/// Mock driver for unit testing.
///
/// Records every call in order and is permissive by default: all
/// assertions pass unless visible texts are scripted via
/// [`MockDriver::with_visible_texts`].
#[derive(Debug, Default)]
pub struct MockDriver {
    /// Current URL
    pub current_url: String,
    /// When set, `see_*` assertions only pass for texts in this list
    visible_texts: Option<Vec<String>>,
    /// Queued results for `grab_text`, consumed front to back
    grabbed_texts: Vec<String>,
    /// Number of upcoming `wait_for_element` calls that should fail
    failing_waits: u32,
    /// Call history for verification
    call_history: Vec<String>,
}

impl MockDriver {
    /// Create new mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict visible texts; assertions for other texts will fail
    #[must_use]
    pub fn with_visible_texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_texts = Some(texts.into_iter().map(Into::into).collect());
        self
    }

    /// Queue a result for the next `grab_text` call
    pub fn push_grabbed_text(&mut self, text: impl Into<String>) {
        self.grabbed_texts.push(text.into());
    }

    /// Make the next `n` `wait_for_element` calls fail
    pub fn fail_next_waits(&mut self, n: u32) {
        self.failing_waits = n;
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.call_history
    }

    /// Check if a call with the given prefix was recorded
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.call_history.iter().any(|c| c.starts_with(prefix))
    }

    /// Count calls with the given prefix
    #[must_use]
    pub fn call_count(&self, prefix: &str) -> usize {
        self.call_history
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn text_is_visible(&self, text: &str) -> bool {
        self.visible_texts
            .as_ref()
            .map_or(true, |texts| texts.iter().any(|t| t.contains(text)))
    }
}

#[async_trait]
impl CaseDriver for MockDriver {
    async fn navigate(&mut self, url: &str) -> E2eResult<()> {
        self.call_history.push(format!("navigate:{url}"));
        self.current_url = url.to_string();
        Ok(())
    }

    async fn current_url(&mut self) -> E2eResult<String> {
        Ok(self.current_url.clone())
    }

    async fn click(&mut self, locator: &Locator) -> E2eResult<()> {
        self.call_history.push(format!("click:{}", locator.selector()));
        Ok(())
    }

    async fn fill_field(&mut self, locator: &Locator, value: &str) -> E2eResult<()> {
        self.call_history
            .push(format!("fill:{}={value}", locator.selector()));
        Ok(())
    }

    async fn select_option(&mut self, locator: &Locator, option: &str) -> E2eResult<()> {
        self.call_history
            .push(format!("select:{}={option}", locator.selector()));
        Ok(())
    }

    async fn attach_file(&mut self, locator: &Locator, file_path: &str) -> E2eResult<()> {
        self.call_history
            .push(format!("attach:{}={file_path}", locator.selector()));
        Ok(())
    }

    async fn wait_for_element(&mut self, locator: &Locator) -> E2eResult<()> {
        self.call_history
            .push(format!("wait:{}", locator.selector()));
        if self.failing_waits > 0 {
            self.failing_waits -= 1;
            return Err(E2eError::ElementNotFound {
                selector: locator.selector().to_string(),
            });
        }
        Ok(())
    }

    async fn see_element_with_text(&mut self, selector: &str, text: &str) -> E2eResult<()> {
        self.call_history
            .push(format!("see_element_with_text:{selector}:{text}"));
        if self.text_is_visible(text) {
            Ok(())
        } else {
            Err(E2eError::assertion(selector, text))
        }
    }

    async fn see_text(&mut self, text: &str) -> E2eResult<()> {
        self.call_history.push(format!("see_text:{text}"));
        if self.text_is_visible(text) {
            Ok(())
        } else {
            Err(E2eError::AssertionFailed {
                message: format!("expected page to show '{text}'"),
            })
        }
    }

    async fn dont_see_text(&mut self, scope: &Locator, text: &str) -> E2eResult<()> {
        self.call_history
            .push(format!("dont_see_text:{}:{text}", scope.selector()));
        // Scripted visible texts govern negative assertions too; the
        // permissive default passes either way.
        let scripted_visible = self
            .visible_texts
            .as_ref()
            .is_some_and(|texts| texts.iter().any(|t| t.contains(text)));
        if scripted_visible {
            Err(E2eError::AssertionFailed {
                message: format!(
                    "expected {} not to show '{text}'",
                    scope.selector()
                ),
            })
        } else {
            Ok(())
        }
    }

    async fn grab_text(&mut self, locator: &Locator) -> E2eResult<String> {
        self.call_history
            .push(format!("grab_text:{}", locator.selector()));
        if self.grabbed_texts.is_empty() {
            Err(E2eError::ElementNotFound {
                selector: locator.selector().to_string(),
            })
        } else {
            Ok(self.grabbed_texts.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_navigation() {
        let mut driver = MockDriver::new();
        driver.navigate("https://manage-case.local/cases").await.unwrap();
        assert_eq!(driver.current_url().await.unwrap(), "https://manage-case.local/cases");
        assert!(driver.was_called("navigate:https://manage-case.local"));
    }

    #[tokio::test]
    async fn test_mock_permissive_assertion_passes() {
        let mut driver = MockDriver::new();
        driver.see_element_with_text("//tr[1]", "Care order").await.unwrap();
        assert_eq!(driver.call_count("see_element_with_text"), 1);
    }

    #[tokio::test]
    async fn test_mock_scripted_visibility_fails_unknown_text() {
        let mut driver = MockDriver::new().with_visible_texts(["Care order"]);
        assert!(driver.see_element_with_text("//tr[1]", "Care order").await.is_ok());
        let err = driver
            .see_element_with_text("//tr[1]", "Supervision order")
            .await
            .unwrap_err();
        assert!(matches!(err, E2eError::AssertionFailed { .. }));
    }

    #[tokio::test]
    async fn test_mock_scripted_visibility_fails_negative_assertion() {
        let mut driver = MockDriver::new().with_visible_texts(["Draft orders"]);
        let scope = Locator::css(".mat-tab-list");
        let err = driver.dont_see_text(&scope, "Draft orders").await.unwrap_err();
        assert!(matches!(err, E2eError::AssertionFailed { .. }));
        assert!(driver.dont_see_text(&scope, "Orders tab").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_permissive_negative_assertion_passes() {
        let mut driver = MockDriver::new();
        driver
            .dont_see_text(&Locator::css(".mat-tab-list"), "Draft orders")
            .await
            .unwrap();
        assert!(driver.was_called("dont_see_text:.mat-tab-list:Draft orders"));
    }

    #[tokio::test]
    async fn test_mock_grab_text_consumes_queue() {
        let mut driver = MockDriver::new();
        driver.push_grabbed_text("CASE-1234");
        let text = driver.grab_text(&Locator::css(".heading-h1")).await.unwrap();
        assert_eq!(text, "CASE-1234");
        assert!(driver.grab_text(&Locator::css(".heading-h1")).await.is_err());
    }

    #[test]
    fn test_driver_config_builder() {
        let config = DriverConfig::new()
            .headless(false)
            .viewport(1280, 720)
            .no_sandbox();
        assert!(!config.headless);
        assert_eq!(config.viewport_width, 1280);
        assert!(!config.sandbox);
    }
}
