//! Locator abstraction for addressing rendered case-detail elements.
//!
//! The case UI renders tabs, nested panels and collection tables, so most
//! selectors here are XPath. A [`Locator`] is pure data: building one never
//! touches the page. Evaluation happens in the driver, which turns the
//! locator into a DOM query expression via [`Selector::to_query`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for element waits (30 seconds, case pages are slow)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval for element waits (250ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Selector for locating elements in the rendered case view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g. `#orderTypeAndDocument_type`)
    Css(String),
    /// XPath selector (tab/panel structural queries)
    XPath(String),
    /// CSS selector filtered by contained text
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
    /// XPath selector filtered by contained text
    XPathWithText {
        /// Base XPath selector
        xpath: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::XPath(selector.into())
    }

    /// Whether this selector is XPath-based
    #[must_use]
    pub const fn is_xpath(&self) -> bool {
        matches!(self, Self::XPath(_) | Self::XPathWithText { .. })
    }

    /// Convert to a DOM query expression returning the first match
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
            Self::XPathWithText { xpath, text } => {
                format!(
                    "(() => {{ const r = document.evaluate({xpath:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null); \
                     for (let i = 0; i < r.snapshotLength; i++) {{ const el = r.snapshotItem(i); \
                     if (el.textContent.includes({text:?})) return el; }} return null; }})()"
                )
            }
        }
    }

    /// Convert to a DOM query expression counting all matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length")
            }
            Self::XPathWithText { xpath, text } => {
                format!(
                    "(() => {{ const r = document.evaluate({xpath:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null); \
                     let n = 0; for (let i = 0; i < r.snapshotLength; i++) {{ \
                     if (r.snapshotItem(i).textContent.includes({text:?})) n++; }} return n; }})()"
                )
            }
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) | Self::XPath(s) => write!(f, "{s}"),
            Self::CssWithText { css: s, text } | Self::XPathWithText { xpath: s, text } => {
                write!(f, "{s}[text*=\"{text}\"]")
            }
        }
    }
}

/// Locator options for customizing wait behavior
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Timeout for element waits
    pub timeout: Duration,
    /// Polling interval for element waits
    pub poll_interval: Duration,
    /// Whether the element must be visible
    pub visible: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            visible: true,
        }
    }
}

/// A locator for finding elements in the case view.
#[derive(Debug, Clone)]
pub struct Locator {
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Create a locator from a selector
    #[must_use]
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Create an XPath locator
    #[must_use]
    pub fn xpath(xpath: impl Into<String>) -> Self {
        Self::new(Selector::XPath(xpath.into()))
    }

    /// Create a CSS locator
    #[must_use]
    pub fn css(css: impl Into<String>) -> Self {
        Self::new(Selector::Css(css.into()))
    }

    /// Filter by contained text content
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let selector = match self.selector {
            Selector::Css(css) | Selector::CssWithText { css, .. } => Selector::CssWithText {
                css,
                text: text.into(),
            },
            Selector::XPath(xpath) | Selector::XPathWithText { xpath, .. } => {
                Selector::XPathWithText {
                    xpath,
                    text: text.into(),
                }
            }
        };
        Self {
            selector,
            options: self.options,
        }
    }

    /// Scope an XPath locator to the Nth row (1-based) of the located table.
    ///
    /// CSS selectors pass through unchanged; row scoping only has meaning for
    /// the structural table queries produced by the tab helpers.
    #[must_use]
    pub fn row(self, n: usize) -> Self {
        let selector = match self.selector {
            Selector::XPath(xpath) => Selector::XPath(format!("{xpath}//tr[{n}]")),
            Selector::XPathWithText { xpath, text } => Selector::XPathWithText {
                xpath: format!("{xpath}//tr[{n}]"),
                text,
            },
            other => other,
        };
        Self {
            selector,
            options: self.options,
        }
    }

    /// Set a custom timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Get the options
    #[must_use]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod selector_tests {
        use super::*;

        #[test]
        fn test_css_query() {
            let query = Selector::css("#order_title").to_query();
            assert!(query.contains("querySelector"));
            assert!(query.contains("#order_title"));
        }

        #[test]
        fn test_xpath_query() {
            let query = Selector::xpath("//mat-tab-body//tr").to_query();
            assert!(query.contains("document.evaluate"));
            assert!(query.contains("FIRST_ORDERED_NODE_TYPE"));
        }

        #[test]
        fn test_xpath_count_query() {
            let query = Selector::xpath("//tr").to_count_query();
            assert!(query.contains("SNAPSHOT"));
            assert!(query.contains("snapshotLength"));
        }

        #[test]
        fn test_xpath_with_text_query_filters_on_content() {
            let selector = Selector::XPathWithText {
                xpath: "//tr".to_string(),
                text: "Care order".to_string(),
            };
            let query = selector.to_query();
            assert!(query.contains("textContent.includes"));
            assert!(query.contains("Care order"));
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_with_text_upgrades_xpath() {
            let locator = Locator::xpath("//tr").with_text("Care order");
            assert!(matches!(
                locator.selector(),
                Selector::XPathWithText { .. }
            ));
        }

        #[test]
        fn test_with_text_upgrades_css() {
            let locator = Locator::css("label").with_text("Yes");
            assert!(matches!(locator.selector(), Selector::CssWithText { .. }));
        }

        #[test]
        fn test_row_scoping_appends_one_based_index() {
            let locator = Locator::xpath("//table").row(1);
            assert_eq!(
                locator.selector(),
                &Selector::XPath("//table//tr[1]".to_string())
            );
        }

        #[test]
        fn test_row_scoping_preserves_text_filter() {
            let locator = Locator::xpath("//table").with_text("SW1A 1AA").row(2);
            assert_eq!(
                locator.selector(),
                &Selector::XPathWithText {
                    xpath: "//table//tr[2]".to_string(),
                    text: "SW1A 1AA".to_string(),
                }
            );
        }

        #[test]
        fn test_row_scoping_ignores_css() {
            let locator = Locator::css("table").row(1);
            assert_eq!(locator.selector(), &Selector::Css("table".to_string()));
        }

        #[test]
        fn test_custom_timeout() {
            let locator = Locator::css("button").with_timeout(Duration::from_secs(5));
            assert_eq!(locator.options().timeout, Duration::from_secs(5));
        }
    }
}
