//! Shared judge and legal advisor fragment, reused by the order and
//! hearing event pages.

use crate::driver::CaseDriver;
use crate::fixtures::JudgeAndLegalAdvisor;
use crate::locator::Locator;
use crate::result::E2eResult;

const TITLE_RADIO_GROUP: &str = "#judgeAndLegalAdvisor_judgeTitle";
const LAST_NAME: &str = "#judgeAndLegalAdvisor_judgeLastName";
const EMAIL: &str = "#judgeAndLegalAdvisor_judgeEmailAddress";
const LEGAL_ADVISOR_NAME: &str = "#judgeAndLegalAdvisor_legalAdvisorName";
const USE_ALLOCATED_JUDGE: &str = "#judgeAndLegalAdvisor_useAllocatedJudge_Yes";
const USE_ALTERNATE_JUDGE: &str = "#judgeAndLegalAdvisor_useAllocatedJudge_No";

/// Select the judge title radio by its label
///
/// # Errors
///
/// Propagates driver failures.
pub async fn select_judge_title<D: CaseDriver>(driver: &mut D, title: &str) -> E2eResult<()> {
    driver
        .click(
            &Locator::xpath(format!(
                "//*[@id=\"{}\"]//label",
                TITLE_RADIO_GROUP.trim_start_matches('#')
            ))
            .with_text(title),
        )
        .await
}

/// Fill the judge last name
///
/// # Errors
///
/// Propagates driver failures.
pub async fn enter_judge_last_name<D: CaseDriver>(driver: &mut D, name: &str) -> E2eResult<()> {
    driver.fill_field(&Locator::css(LAST_NAME), name).await
}

/// Fill the judge email address
///
/// # Errors
///
/// Propagates driver failures.
pub async fn enter_judge_email<D: CaseDriver>(driver: &mut D, email: &str) -> E2eResult<()> {
    driver.fill_field(&Locator::css(EMAIL), email).await
}

/// Fill the legal advisor name
///
/// # Errors
///
/// Propagates driver failures.
pub async fn enter_legal_advisor_name<D: CaseDriver>(driver: &mut D, name: &str) -> E2eResult<()> {
    driver
        .fill_field(&Locator::css(LEGAL_ADVISOR_NAME), name)
        .await
}

/// Use the judge already allocated to the case
///
/// # Errors
///
/// Propagates driver failures.
pub async fn use_allocated_judge<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
    driver.click(&Locator::css(USE_ALLOCATED_JUDGE)).await
}

/// Enter a different judge than the allocated one
///
/// # Errors
///
/// Propagates driver failures.
pub async fn use_alternate_judge<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
    driver.click(&Locator::css(USE_ALTERNATE_JUDGE)).await
}

/// Fill the whole fragment from a fixture
///
/// # Errors
///
/// Propagates driver failures.
pub async fn enter<D: CaseDriver>(
    driver: &mut D,
    details: &JudgeAndLegalAdvisor,
) -> E2eResult<()> {
    select_judge_title(driver, &details.judge_title).await?;
    enter_judge_last_name(driver, &details.judge_last_name).await?;
    enter_judge_email(driver, &details.judge_email).await?;
    enter_legal_advisor_name(driver, &details.legal_advisor_name).await
}
