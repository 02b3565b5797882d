//! "Manage hearings" event page.

use crate::driver::CaseDriver;
use crate::fixtures::HearingDetails;
use crate::locator::Locator;
use crate::result::E2eResult;

use super::{judge_and_legal_advisor, PageObject};

fn date_parts(field: &str, value: &chrono::DateTime<chrono::Utc>) -> Vec<(String, String)> {
    use chrono::{Datelike, Timelike};
    vec![
        (format!("{field}-day"), value.day().to_string()),
        (format!("{field}-month"), value.month().to_string()),
        (format!("{field}-year"), value.year().to_string()),
        (format!("{field}-hour"), value.hour().to_string()),
        (format!("{field}-minute"), value.minute().to_string()),
    ]
}

/// The manage hearings event page
#[derive(Debug, Clone, Copy)]
pub struct ManageHearingsEventPage;

impl ManageHearingsEventPage {
    const HEARING_TYPE_GROUP: &'static str = "#hearingType";
    const PRESENCE_GROUP: &'static str = "#hearingPresence";
    const START_DATE: &'static str = "#hearingStartDate";
    const END_DATE: &'static str = "#hearingEndDate";
    const VENUE_LIST: &'static str = "#hearingVenue";
    const NOTICE_YES: &'static str = "#sendNoticeOfHearing_Yes";
    const NOTICE_NOTES: &'static str = "#noticeOfHearingNotes";

    /// Fill hearing type, attendance and start/end dates
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_hearing_details<D: CaseDriver>(
        driver: &mut D,
        hearing: &HearingDetails,
    ) -> E2eResult<()> {
        driver
            .click(
                &Locator::xpath(format!(
                    "//*[@id=\"{}\"]//label",
                    Self::HEARING_TYPE_GROUP.trim_start_matches('#')
                ))
                .with_text(&hearing.hearing_type),
            )
            .await?;
        driver
            .click(
                &Locator::xpath(format!(
                    "//*[@id=\"{}\"]//label",
                    Self::PRESENCE_GROUP.trim_start_matches('#')
                ))
                .with_text(&hearing.presence),
            )
            .await?;
        for (suffix, value) in date_parts(Self::START_DATE, &hearing.start) {
            driver.fill_field(&Locator::css(suffix), &value).await?;
        }
        for (suffix, value) in date_parts(Self::END_DATE, &hearing.end) {
            driver.fill_field(&Locator::css(suffix), &value).await?;
        }
        Ok(())
    }

    /// Select the hearing venue
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_venue<D: CaseDriver>(
        driver: &mut D,
        hearing: &HearingDetails,
    ) -> E2eResult<()> {
        driver
            .select_option(&Locator::css(Self::VENUE_LIST), &hearing.venue)
            .await
    }

    /// Fill the judge details fragment for the hearing
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_judge_details<D: CaseDriver>(
        driver: &mut D,
        hearing: &HearingDetails,
    ) -> E2eResult<()> {
        judge_and_legal_advisor::select_judge_title(
            driver,
            &hearing.judge_and_legal_advisor.judge_title,
        )
        .await?;
        judge_and_legal_advisor::enter_judge_last_name(
            driver,
            &hearing.judge_and_legal_advisor.judge_last_name,
        )
        .await?;
        judge_and_legal_advisor::enter_judge_email(
            driver,
            &hearing.judge_and_legal_advisor.judge_email,
        )
        .await
    }

    /// Fill the legal advisor name
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_legal_advisor_name<D: CaseDriver>(
        driver: &mut D,
        name: &str,
    ) -> E2eResult<()> {
        judge_and_legal_advisor::enter_legal_advisor_name(driver, name).await
    }

    /// Send a notice of hearing with additional notes
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn send_notice_of_hearing_with_notes<D: CaseDriver>(
        driver: &mut D,
        notes: &str,
    ) -> E2eResult<()> {
        driver.click(&Locator::css(Self::NOTICE_YES)).await?;
        driver
            .fill_field(&Locator::css(Self::NOTICE_NOTES), notes)
            .await
    }
}

impl PageObject for ManageHearingsEventPage {
    fn url_pattern(&self) -> &str {
        "/trigger/manageHearings"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::HEARING_TYPE_GROUP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;
    use crate::fixtures;

    #[tokio::test]
    async fn test_enter_hearing_details_fills_both_date_groups() {
        let mut driver = MockDriver::new();
        ManageHearingsEventPage::enter_hearing_details(&mut driver, &fixtures::hearing_details())
            .await
            .unwrap();
        // type + presence clicks, then 5 parts per date group
        assert_eq!(driver.call_count("click"), 2);
        assert_eq!(driver.call_count("fill:#hearingStartDate"), 5);
        assert_eq!(driver.call_count("fill:#hearingEndDate"), 5);
    }

    #[tokio::test]
    async fn test_enter_venue_uses_dropdown() {
        let mut driver = MockDriver::new();
        ManageHearingsEventPage::enter_venue(&mut driver, &fixtures::hearing_details())
            .await
            .unwrap();
        assert!(driver.was_called("select:#hearingVenue=Aberdeen Tribunal Hearing Centre"));
    }
}
