//! Real browser backend over the Chrome DevTools Protocol.
//!
//! Compiled with the `browser` feature. All page interaction goes through
//! `evaluate` with the query expressions produced by
//! [`Selector::to_query`](crate::locator::Selector::to_query), so the same
//! locators drive both this backend and the mock.

use crate::driver::{CaseDriver, DriverConfig};
use crate::locator::Locator;
use crate::result::{E2eError, E2eResult};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::dom::SetFileInputFilesParams;
use chromiumoxide::page::Page;
use futures::StreamExt;

/// CDP-backed case driver
#[derive(Debug)]
pub struct ChromiumDriver {
    config: DriverConfig,
    #[allow(dead_code)]
    browser: Browser,
    page: Page,
    #[allow(dead_code)]
    handle: tokio::task::JoinHandle<()>,
}

impl ChromiumDriver {
    /// Launch a browser and open a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::BrowserLaunch`] when chromium cannot be started.
    pub async fn launch(config: DriverConfig) -> E2eResult<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport_width, config.viewport_height);
        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(ref path) = config.executable_path {
            builder = builder.chrome_executable(path);
        }
        let cdp_config = builder.build().map_err(|e| E2eError::BrowserLaunch {
            message: e.to_string(),
        })?;

        let (browser, mut handler) =
            Browser::launch(cdp_config)
                .await
                .map_err(|e| E2eError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| E2eError::BrowserLaunch {
                message: e.to_string(),
            })?;

        Ok(Self {
            config,
            browser,
            page,
            handle,
        })
    }

    async fn eval<T: serde::de::DeserializeOwned>(&self, expr: String) -> E2eResult<T> {
        let result = self
            .page
            .evaluate(expr)
            .await
            .map_err(|e| E2eError::PageError {
                message: e.to_string(),
            })?;
        result.into_value().map_err(|e| E2eError::PageError {
            message: e.to_string(),
        })
    }

    async fn eval_unit(&self, expr: String) -> E2eResult<()> {
        self.page
            .evaluate(expr)
            .await
            .map_err(|e| E2eError::PageError {
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn element_expr(locator: &Locator) -> String {
        locator.selector().to_query()
    }

    async fn element_exists(&self, locator: &Locator) -> E2eResult<bool> {
        let expr = format!("(() => {{ const el = {}; return el !== null && el !== undefined; }})()",
            Self::element_expr(locator));
        self.eval(expr).await
    }
}

#[async_trait]
impl CaseDriver for ChromiumDriver {
    async fn navigate(&mut self, url: &str) -> E2eResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| E2eError::NavigationError {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn current_url(&mut self) -> E2eResult<String> {
        let url = self.page.url().await.map_err(|e| E2eError::PageError {
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_default())
    }

    async fn click(&mut self, locator: &Locator) -> E2eResult<()> {
        self.wait_for_element(locator).await?;
        self.eval_unit(format!(
            "(() => {{ const el = {}; el.click(); }})()",
            Self::element_expr(locator)
        ))
        .await
    }

    async fn fill_field(&mut self, locator: &Locator, value: &str) -> E2eResult<()> {
        self.wait_for_element(locator).await?;
        // The frontend is Angular; it only picks the value up from input
        // events, not from direct property writes.
        self.eval_unit(format!(
            "(() => {{ const el = {}; el.value = {value:?}; \
             el.dispatchEvent(new Event('input', {{bubbles: true}})); \
             el.dispatchEvent(new Event('change', {{bubbles: true}})); }})()",
            Self::element_expr(locator)
        ))
        .await
    }

    async fn select_option(&mut self, locator: &Locator, option: &str) -> E2eResult<()> {
        self.wait_for_element(locator).await?;
        let found: bool = self
            .eval(format!(
                "(() => {{ const el = {}; \
                 const idx = Array.from(el.options).findIndex(o => o.textContent.trim() === {option:?}); \
                 if (idx < 0) return false; el.selectedIndex = idx; \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); return true; }})()",
                Self::element_expr(locator)
            ))
            .await?;
        if found {
            Ok(())
        } else {
            Err(E2eError::ElementNotFound {
                selector: format!("{} option '{option}'", locator.selector()),
            })
        }
    }

    async fn attach_file(&mut self, locator: &Locator, file_path: &str) -> E2eResult<()> {
        self.wait_for_element(locator).await?;
        let result = self
            .page
            .evaluate(Self::element_expr(locator))
            .await
            .map_err(|e| E2eError::PageError {
                message: e.to_string(),
            })?;
        let object_id = result
            .object()
            .object_id
            .clone()
            .ok_or_else(|| E2eError::ElementNotFound {
                selector: locator.selector().to_string(),
            })?;
        let params = SetFileInputFilesParams::builder()
            .files(vec![file_path.to_string()])
            .object_id(object_id)
            .build()
            .map_err(|e| E2eError::PageError { message: e })?;
        self.page
            .execute(params)
            .await
            .map_err(|e| E2eError::PageError {
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn wait_for_element(&mut self, locator: &Locator) -> E2eResult<()> {
        let timeout = locator.options().timeout.min(self.config.element_timeout);
        let poll = locator.options().poll_interval;
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.element_exists(locator).await? {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(E2eError::Timeout {
                    ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(poll).await;
        }
    }

    async fn see_element_with_text(&mut self, selector: &str, text: &str) -> E2eResult<()> {
        let locator = Locator::xpath(selector).with_text(text);
        let visible: bool = self
            .eval(format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 return !!(el.offsetWidth || el.offsetHeight || el.getClientRects().length); }})()",
                Self::element_expr(&locator)
            ))
            .await?;
        if visible {
            Ok(())
        } else {
            Err(E2eError::assertion(selector, text))
        }
    }

    async fn see_text(&mut self, text: &str) -> E2eResult<()> {
        let present: bool = self
            .eval(format!(
                "document.body.textContent.includes({text:?})"
            ))
            .await?;
        if present {
            Ok(())
        } else {
            Err(E2eError::AssertionFailed {
                message: format!("expected page to show '{text}'"),
            })
        }
    }

    async fn dont_see_text(&mut self, scope: &Locator, text: &str) -> E2eResult<()> {
        let present: bool = self
            .eval(format!(
                "(() => {{ const el = {}; return el ? el.textContent.includes({text:?}) : false; }})()",
                Self::element_expr(scope)
            ))
            .await?;
        if present {
            Err(E2eError::AssertionFailed {
                message: format!("expected scope not to show '{text}'"),
            })
        } else {
            Ok(())
        }
    }

    async fn grab_text(&mut self, locator: &Locator) -> E2eResult<String> {
        self.wait_for_element(locator).await?;
        let text: Option<String> = self
            .eval(format!(
                "(() => {{ const el = {}; return el ? el.textContent.trim() : null; }})()",
                Self::element_expr(locator)
            ))
            .await?;
        text.ok_or_else(|| E2eError::ElementNotFound {
            selector: locator.selector().to_string(),
        })
    }
}
