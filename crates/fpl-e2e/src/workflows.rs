//! Multi-step scenario orchestration.
//!
//! Each workflow is a strictly sequential script over a [`CaseDriver`]:
//! sign in as a persona, walk an event's pages, submit, and check the
//! confirmation banner. Cross-scenario state (like a created case id) is
//! returned to the caller, never kept here.

use crate::config::{Persona, SuiteConfig};
use crate::driver::CaseDriver;
use crate::fixtures::{self, HearingDetails};
use crate::locator::Locator;
use crate::pages::{
    CaseEvent, CaseViewPage, ManageHearingsEventPage, UploadAdditionalApplicationsEventPage,
};
use crate::result::E2eResult;

const USERNAME: &str = "#username";
const PASSWORD: &str = "#password";
const SIGN_IN_BUTTON: &str = "input[type='submit']";
const SIGN_OUT_LINK: &str = "a[href*='logout']";
const CREATE_CASE_LINK: &str = "a[href='/cases/case-create']";
const CASE_NAME: &str = "#caseName";
const CASE_HEADING: &str = ".heading-h1";

/// Sign in as the given persona.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn sign_in<D: CaseDriver>(
    driver: &mut D,
    config: &SuiteConfig,
    persona: Persona,
) -> E2eResult<()> {
    let user = config.user(persona);
    tracing::info!(?persona, email = %user.email, "signing in");
    driver.navigate(&config.base_url).await?;
    driver
        .fill_field(&Locator::css(USERNAME), &user.email)
        .await?;
    driver
        .fill_field(&Locator::css(PASSWORD), &user.password)
        .await?;
    driver.click(&Locator::css(SIGN_IN_BUTTON)).await
}

/// Sign out of the current session.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn sign_out<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
    driver.click(&Locator::css(SIGN_OUT_LINK)).await
}

/// Open a case's detail page and wait for the tabs to render.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn navigate_to_case_details<D: CaseDriver>(
    driver: &mut D,
    config: &SuiteConfig,
    case_id: &str,
) -> E2eResult<()> {
    driver.navigate(&config.case_details_url(case_id)).await?;
    driver
        .wait_for_element(&Locator::css(".mat-tab-list"))
        .await
}

/// Sign out, sign in as another persona and open the case.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn switch_user_and_navigate_to_case<D: CaseDriver>(
    driver: &mut D,
    config: &SuiteConfig,
    persona: Persona,
    case_id: &str,
) -> E2eResult<()> {
    tracing::info!(?persona, case_id, "switching user");
    sign_out(driver).await?;
    sign_in(driver, config, persona).await?;
    navigate_to_case_details(driver, config, case_id).await
}

/// Sign in as the local authority and create a named case.
///
/// Returns the created case id grabbed from the case heading.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn login_and_create_case<D: CaseDriver>(
    driver: &mut D,
    config: &SuiteConfig,
    case_name: &str,
) -> E2eResult<String> {
    sign_in(driver, config, Persona::LocalAuthority).await?;
    driver.click(&Locator::css(CREATE_CASE_LINK)).await?;
    driver
        .fill_field(&Locator::css(CASE_NAME), case_name)
        .await?;
    complete_event(driver, "Save and continue").await?;
    let case_id = driver.grab_text(&Locator::css(CASE_HEADING)).await?;
    tracing::info!(case_id = %case_id, "case created");
    Ok(case_id)
}

/// Click an event's final submit button (e.g. "Save and continue").
///
/// # Errors
///
/// Propagates driver failures.
pub async fn complete_event<D: CaseDriver>(driver: &mut D, button_label: &str) -> E2eResult<()> {
    driver
        .click(&Locator::css("button[type='submit']").with_text(button_label))
        .await
}

/// Advance a multi-page event with "Continue".
///
/// # Errors
///
/// Propagates driver failures.
pub async fn go_to_next_page<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
    driver
        .click(&Locator::css("button").with_text("Continue"))
        .await
}

/// Book a hearing through the manage hearings event.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn create_hearing<D: CaseDriver>(
    driver: &mut D,
    hearing: &HearingDetails,
) -> E2eResult<()> {
    tracing::info!(venue = %hearing.venue, "booking hearing");
    CaseViewPage::go_to_new_actions(driver, CaseEvent::ManageHearings).await?;
    ManageHearingsEventPage::enter_hearing_details(driver, hearing).await?;
    ManageHearingsEventPage::enter_venue(driver, hearing).await?;
    go_to_next_page(driver).await?;
    ManageHearingsEventPage::enter_judge_details(driver, hearing).await?;
    ManageHearingsEventPage::enter_legal_advisor_name(
        driver,
        &hearing.judge_and_legal_advisor.legal_advisor_name,
    )
    .await?;
    go_to_next_page(driver).await?;
    ManageHearingsEventPage::send_notice_of_hearing_with_notes(driver, &hearing.additional_notes)
        .await?;
    complete_event(driver, "Save and continue").await?;
    CaseViewPage::see_event_submission_confirmation(driver, CaseEvent::ManageHearings).await
}

/// Upload a C2 application with notice and pay by account.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn upload_c2<D: CaseDriver>(driver: &mut D, config: &SuiteConfig) -> E2eResult<()> {
    CaseViewPage::go_to_new_actions(driver, CaseEvent::UploadAdditionalApplications).await?;
    UploadAdditionalApplicationsEventPage::select_additional_application_type(driver, "C2_ORDER")
        .await?;
    UploadAdditionalApplicationsEventPage::select_c2_type(driver, "WITH_NOTICE").await?;
    go_to_next_page(driver).await?;
    UploadAdditionalApplicationsEventPage::upload_c2_document(driver, &config.test_file).await?;
    UploadAdditionalApplicationsEventPage::select_c2_additional_orders_requested(
        driver,
        "APPOINTMENT_OF_GUARDIAN",
    )
    .await?;
    go_to_next_page(driver).await?;
    let fee = UploadAdditionalApplicationsEventPage::get_fee_to_pay(driver).await?;
    tracing::info!(%fee, "paying C2 fee");
    UploadAdditionalApplicationsEventPage::use_pba_payment(driver).await?;
    UploadAdditionalApplicationsEventPage::enter_pba_payment_details(
        driver,
        &fixtures::c2_payment(),
    )
    .await?;
    complete_event(driver, "Save and continue").await?;
    CaseViewPage::see_event_submission_confirmation(
        driver,
        CaseEvent::UploadAdditionalApplications,
    )
    .await
}

/// Upload an "other" application (C1 guardian appointment) and pay by
/// account.
///
/// # Errors
///
/// Propagates driver failures.
pub async fn upload_other_applications<D: CaseDriver>(
    driver: &mut D,
    config: &SuiteConfig,
) -> E2eResult<()> {
    CaseViewPage::go_to_new_actions(driver, CaseEvent::UploadAdditionalApplications).await?;
    UploadAdditionalApplicationsEventPage::select_additional_application_type(
        driver,
        "OTHER_ORDER",
    )
    .await?;
    go_to_next_page(driver).await?;
    UploadAdditionalApplicationsEventPage::select_other_application(
        driver,
        "C1 - Appointment of a guardian",
    )
    .await?;
    UploadAdditionalApplicationsEventPage::upload_document(driver, &config.test_file).await?;
    go_to_next_page(driver).await?;
    let fee = UploadAdditionalApplicationsEventPage::get_fee_to_pay(driver).await?;
    tracing::info!(%fee, "paying application fee");
    UploadAdditionalApplicationsEventPage::use_pba_payment(driver).await?;
    UploadAdditionalApplicationsEventPage::enter_pba_payment_details(
        driver,
        &fixtures::c2_payment(),
    )
    .await?;
    complete_event(driver, "Save and continue").await?;
    CaseViewPage::see_event_submission_confirmation(
        driver,
        CaseEvent::UploadAdditionalApplications,
    )
    .await
}
