//! "Review agreed case management order" event page.

use crate::driver::CaseDriver;
use crate::locator::Locator;
use crate::result::E2eResult;

use super::PageObject;

/// The review agreed CMO event page
#[derive(Debug, Clone, Copy)]
pub struct ReviewAgreedCmoEventPage;

impl ReviewAgreedCmoEventPage {
    const CMO_TO_REVIEW_LIST: &'static str = "#cmoToReviewList";
    const SEAL_CMO: &'static str = "#reviewCMODecision_decision-SEND_TO_ALL_PARTIES";
    const RETURN_CMO: &'static str = "#reviewCMODecision_decision-JUDGE_REQUESTED_CHANGES";
    const CHANGES_REQUESTED: &'static str = "#reviewCMODecision_changesRequestedByJudge";
    const AMENDED_DOCUMENT: &'static str = "#reviewCMODecision_judgeAmendedDocument";

    /// Select which hearing's CMO to review
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_cmo_to_review<D: CaseDriver>(
        driver: &mut D,
        hearing: &str,
    ) -> E2eResult<()> {
        driver
            .wait_for_element(&Locator::css(Self::CMO_TO_REVIEW_LIST))
            .await?;
        driver
            .select_option(&Locator::css(Self::CMO_TO_REVIEW_LIST), hearing)
            .await
    }

    /// Seal the CMO and send to all parties
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_seal_cmo<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
        driver.click(&Locator::css(Self::SEAL_CMO)).await
    }

    /// Seal the C21 draft at the given index
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_seal_c21<D: CaseDriver>(driver: &mut D, index: usize) -> E2eResult<()> {
        driver
            .click(&Locator::css(format!(
                "#reviewDecision{index}_decision-SEND_TO_ALL_PARTIES"
            )))
            .await
    }

    /// Return the CMO to the local authority for changes
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_return_cmo_for_changes<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
        driver.click(&Locator::css(Self::RETURN_CMO)).await
    }

    /// Return the C21 draft at the given index for changes
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_return_c21_for_changes<D: CaseDriver>(
        driver: &mut D,
        index: usize,
    ) -> E2eResult<()> {
        driver
            .click(&Locator::css(format!(
                "#reviewDecision{index}_decision-JUDGE_REQUESTED_CHANGES"
            )))
            .await
    }

    /// Note the changes the judge requests on the CMO
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_changes_requested<D: CaseDriver>(
        driver: &mut D,
        note: &str,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::CHANGES_REQUESTED), note)
            .await
    }

    /// Note the changes requested on the C21 draft at the given index
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_changes_requested_c21<D: CaseDriver>(
        driver: &mut D,
        index: usize,
        note: &str,
    ) -> E2eResult<()> {
        driver
            .fill_field(
                &Locator::css(format!("#reviewDecision{index}_changesRequestedByJudge")),
                note,
            )
            .await
    }

    /// Upload the judge-amended CMO document
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn upload_amended_cmo<D: CaseDriver>(driver: &mut D, file: &str) -> E2eResult<()> {
        driver
            .attach_file(&Locator::css(Self::AMENDED_DOCUMENT), file)
            .await
    }
}

impl PageObject for ReviewAgreedCmoEventPage {
    fn url_pattern(&self) -> &str {
        "/trigger/reviewAgreedCmo"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::CMO_TO_REVIEW_LIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;

    #[tokio::test]
    async fn test_select_cmo_waits_then_selects() {
        let mut driver = MockDriver::new();
        ReviewAgreedCmoEventPage::select_cmo_to_review(&mut driver, "1 Jan 2050")
            .await
            .unwrap();
        assert!(driver.history()[0].starts_with("wait:#cmoToReviewList"));
        assert!(driver.history()[1].starts_with("select:#cmoToReviewList=1 Jan 2050"));
    }

    #[tokio::test]
    async fn test_c21_decisions_are_indexed() {
        let mut driver = MockDriver::new();
        ReviewAgreedCmoEventPage::select_seal_c21(&mut driver, 1).await.unwrap();
        ReviewAgreedCmoEventPage::select_return_c21_for_changes(&mut driver, 2)
            .await
            .unwrap();
        assert!(driver.history()[0].contains("reviewDecision1_decision-SEND_TO_ALL_PARTIES"));
        assert!(driver.history()[1].contains("reviewDecision2_decision-JUDGE_REQUESTED_CHANGES"));
    }
}
