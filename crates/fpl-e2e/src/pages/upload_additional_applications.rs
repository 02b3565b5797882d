//! "Upload additional applications" event page (C2 and other orders).

use crate::driver::CaseDriver;
use crate::fixtures::PbaPayment;
use crate::locator::Locator;
use crate::result::E2eResult;

use super::PageObject;

/// The upload additional applications event page
#[derive(Debug, Clone, Copy)]
pub struct UploadAdditionalApplicationsEventPage;

impl UploadAdditionalApplicationsEventPage {
    const APPLICATION_TYPE_GROUP: &'static str = "#additionalApplicationType";
    const C2_TYPE_GROUP: &'static str = "#c2Type";
    const C2_DOCUMENT: &'static str = "#temporaryC2Document_document";
    const C2_ORDERS_REQUESTED: &'static str = "#temporaryC2Document_c2AdditionalOrdersRequested";
    const OTHER_APPLICATION_LIST: &'static str = "#temporaryOtherApplicationsBundle_applicationType";
    const OTHER_DOCUMENT: &'static str = "#temporaryOtherApplicationsBundle_document";
    const FEE_AMOUNT: &'static str = ".fee-amount";
    const USE_PBA_YES: &'static str = "#usePbaPayment_Yes";
    const PBA_NUMBER: &'static str = "#pbaNumber";
    const CLIENT_CODE: &'static str = "#clientCode";
    const CUSTOMER_REFERENCE: &'static str = "#fileReference";

    /// Select the application type (`C2_ORDER` / `OTHER_ORDER`)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_additional_application_type<D: CaseDriver>(
        driver: &mut D,
        application_type: &str,
    ) -> E2eResult<()> {
        driver
            .click(&Locator::css(format!(
                "{}-{application_type}",
                Self::APPLICATION_TYPE_GROUP
            )))
            .await
    }

    /// Select the C2 type (`WITH_NOTICE` / `WITHOUT_NOTICE`)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_c2_type<D: CaseDriver>(driver: &mut D, c2_type: &str) -> E2eResult<()> {
        driver
            .click(&Locator::css(format!("{}-{c2_type}", Self::C2_TYPE_GROUP)))
            .await
    }

    /// Attach the C2 application document
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn upload_c2_document<D: CaseDriver>(driver: &mut D, file: &str) -> E2eResult<()> {
        driver
            .attach_file(&Locator::css(Self::C2_DOCUMENT), file)
            .await
    }

    /// Tick an additional order requested with the C2
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_c2_additional_orders_requested<D: CaseDriver>(
        driver: &mut D,
        order: &str,
    ) -> E2eResult<()> {
        driver
            .click(&Locator::css(format!(
                "{}-{order}",
                Self::C2_ORDERS_REQUESTED
            )))
            .await
    }

    /// Select an "other" application type by its label
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_other_application<D: CaseDriver>(
        driver: &mut D,
        application: &str,
    ) -> E2eResult<()> {
        driver
            .select_option(&Locator::css(Self::OTHER_APPLICATION_LIST), application)
            .await
    }

    /// Attach the other application document
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn upload_document<D: CaseDriver>(driver: &mut D, file: &str) -> E2eResult<()> {
        driver
            .attach_file(&Locator::css(Self::OTHER_DOCUMENT), file)
            .await
    }

    /// Read the fee shown for the application
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn get_fee_to_pay<D: CaseDriver>(driver: &mut D) -> E2eResult<String> {
        driver.wait_for_element(&Locator::css(Self::FEE_AMOUNT)).await?;
        driver.grab_text(&Locator::css(Self::FEE_AMOUNT)).await
    }

    /// Choose payment by account
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn use_pba_payment<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
        driver.click(&Locator::css(Self::USE_PBA_YES)).await
    }

    /// Fill the PBA payment details
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_pba_payment_details<D: CaseDriver>(
        driver: &mut D,
        payment: &PbaPayment,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::PBA_NUMBER), &payment.pba_number)
            .await?;
        driver
            .fill_field(&Locator::css(Self::CLIENT_CODE), &payment.client_code)
            .await?;
        driver
            .fill_field(
                &Locator::css(Self::CUSTOMER_REFERENCE),
                &payment.customer_reference,
            )
            .await
    }
}

impl PageObject for UploadAdditionalApplicationsEventPage {
    fn url_pattern(&self) -> &str {
        "/trigger/uploadAdditionalApplications"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::APPLICATION_TYPE_GROUP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;
    use crate::fixtures;

    #[tokio::test]
    async fn test_application_type_suffixes_radio_id() {
        let mut driver = MockDriver::new();
        UploadAdditionalApplicationsEventPage::select_additional_application_type(
            &mut driver,
            "C2_ORDER",
        )
        .await
        .unwrap();
        assert!(driver.was_called("click:#additionalApplicationType-C2_ORDER"));
    }

    #[tokio::test]
    async fn test_pba_details_fill_three_fields() {
        let mut driver = MockDriver::new();
        UploadAdditionalApplicationsEventPage::enter_pba_payment_details(
            &mut driver,
            &fixtures::c2_payment(),
        )
        .await
        .unwrap();
        assert_eq!(driver.call_count("fill:"), 3);
        assert!(driver.was_called("fill:#pbaNumber=PBA0082848"));
    }

    #[tokio::test]
    async fn test_fee_is_grabbed_after_wait() {
        let mut driver = MockDriver::new();
        driver.push_grabbed_text("£255.00");
        let fee = UploadAdditionalApplicationsEventPage::get_fee_to_pay(&mut driver)
            .await
            .unwrap();
        assert_eq!(fee, "£255.00");
        assert!(driver.was_called("wait:.fee-amount"));
    }
}
