//! Case list / search screen.

use crate::driver::CaseDriver;
use crate::locator::Locator;
use crate::result::E2eResult;

use super::PageObject;

/// The case list screen
#[derive(Debug, Clone, Copy)]
pub struct CaseListPage;

impl CaseListPage {
    const CASE_NAME_FILTER: &'static str = "#caseName";
    const STATE_FILTER: &'static str = "#wb-case-state";
    const APPLY_BUTTON: &'static str = "button[type='submit']";

    /// Filter the list by case name and state, then apply
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn search_for_cases_with_name<D: CaseDriver>(
        driver: &mut D,
        name: &str,
        state: &str,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::CASE_NAME_FILTER), name)
            .await?;
        driver
            .select_option(&Locator::css(Self::STATE_FILTER), state)
            .await?;
        driver.click(&Locator::css(Self::APPLY_BUTTON)).await
    }

    /// Selector for the result row linking to a case
    #[must_use]
    pub fn result_row_selector(case_id: &str) -> String {
        format!("//ccd-search-result/table//tr[.//a[contains(@href,\"{case_id}\")]]")
    }

    /// Assert the case appears in the search results
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn see_case_in_search_result<D: CaseDriver>(
        driver: &mut D,
        case_id: &str,
    ) -> E2eResult<()> {
        driver
            .wait_for_element(&Locator::xpath(Self::result_row_selector(case_id)))
            .await
    }
}

impl PageObject for CaseListPage {
    fn url_pattern(&self) -> &str {
        "/cases"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::CASE_NAME_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;

    #[tokio::test]
    async fn test_search_fills_filters_then_applies() {
        let mut driver = MockDriver::new();
        CaseListPage::search_for_cases_with_name(&mut driver, "smoke test case", "Open")
            .await
            .unwrap();
        assert!(driver.was_called("fill:#caseName=smoke test case"));
        assert!(driver.was_called("select:#wb-case-state=Open"));
        assert!(driver.was_called("click:button[type='submit']"));
    }

    #[test]
    fn test_result_row_selector_embeds_case_id() {
        let selector = CaseListPage::result_row_selector("1234-5678-9012-3456");
        assert!(selector.contains("contains(@href,\"1234-5678-9012-3456\")"));
        assert!(selector.starts_with("//ccd-search-result"));
    }
}
