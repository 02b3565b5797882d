//! "Create an order" event page.

use crate::driver::CaseDriver;
use crate::fixtures::{Address, JudgeAndLegalAdvisor, Order};
use crate::locator::Locator;
use crate::result::E2eResult;

use super::{address, judge_and_legal_advisor, PageObject};

/// Facts asserted on the check-your-order step
#[derive(Debug, Clone)]
pub struct OrderChecks {
    /// Family man case number shown in the summary
    pub family_man_case_number: String,
    /// Children names line
    pub children: String,
    /// Order type line
    pub order: String,
}

/// The create order event page
#[derive(Debug, Clone, Copy)]
pub struct CreateOrderEventPage;

impl CreateOrderEventPage {
    const TITLE: &'static str = "#order_title";
    const DETAILS: &'static str = "#order_details";
    const TYPE_LIST: &'static str = "#orderTypeAndDocument_type";
    const SUBTYPE_LIST: &'static str = "#orderTypeAndDocument_subtype";
    const ORDER_NAME: &'static str = "#orderTypeAndDocument_orderName";
    const ORDER_DESCRIPTION: &'static str = "#orderTypeAndDocument_orderDescription";
    const DIRECTIONS_YES: &'static str = "#orderFurtherDirections_directionsNeeded-Yes";
    const DIRECTIONS: &'static str = "#orderFurtherDirections_directions";
    const EXCLUSION_YES: &'static str = "#orderExclusionClause_exclusionClauseNeeded-Yes";
    const EXCLUSION_CLAUSE: &'static str = "#orderExclusionClause_exclusionClause";
    const MONTHS: &'static str = "#orderMonths";
    const ALL_CHILDREN_GROUP: &'static str = "#orderAppliesToAllChildren";
    const EPO_TYPE_GROUP: &'static str = "#epoType";
    const EPO_REMOVAL_ADDRESS: &'static str = "#epoRemovalAddress_epoRemovalAddress";
    const EPO_INCLUDE_PHRASE: &'static str = "#epoPhrase_includePhrase";
    const CLOSE_CASE_YES: &'static str = "#closeCaseFromOrder-Yes";
    const CLOSE_CASE_NO: &'static str = "#closeCaseFromOrder-No";
    const UPLOADED_ORDER: &'static str = "#uploadedOrder";

    fn label_in(group: &str) -> String {
        format!("//*[@id=\"{}\"]//label", group.trim_start_matches('#'))
    }

    /// Select the order type, and subtype when the type has one
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_type<D: CaseDriver>(
        driver: &mut D,
        order_type: &str,
        subtype: Option<&str>,
    ) -> E2eResult<()> {
        driver
            .click(&Locator::xpath(Self::label_in(Self::TYPE_LIST)).with_text(order_type))
            .await?;
        if let Some(subtype) = subtype {
            driver
                .click(&Locator::xpath(Self::label_in(Self::SUBTYPE_LIST)).with_text(subtype))
                .await?;
        }
        Ok(())
    }

    /// Name and describe an uploaded order
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_order_name_and_description<D: CaseDriver>(
        driver: &mut D,
        name: &str,
        description: &str,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::ORDER_NAME), name)
            .await?;
        driver
            .fill_field(&Locator::css(Self::ORDER_DESCRIPTION), description)
            .await
    }

    /// Fill the C21 title and details from a fixture
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_c21_order_details<D: CaseDriver>(
        driver: &mut D,
        order: &Order,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::TITLE), &order.title)
            .await?;
        driver
            .fill_field(&Locator::css(Self::DETAILS), &order.details)
            .await
    }

    /// Fill the judge and legal advisor fragment
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_judge_and_legal_advisor<D: CaseDriver>(
        driver: &mut D,
        details: &JudgeAndLegalAdvisor,
    ) -> E2eResult<()> {
        judge_and_legal_advisor::enter(driver, details).await
    }

    /// Use the allocated judge with the given legal advisor
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn use_allocated_judge<D: CaseDriver>(
        driver: &mut D,
        legal_advisor_name: &str,
    ) -> E2eResult<()> {
        judge_and_legal_advisor::use_allocated_judge(driver).await?;
        judge_and_legal_advisor::enter_legal_advisor_name(driver, legal_advisor_name).await
    }

    /// Add further directions to the order
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_directions<D: CaseDriver>(
        driver: &mut D,
        directions: &str,
    ) -> E2eResult<()> {
        driver.click(&Locator::css(Self::DIRECTIONS_YES)).await?;
        driver
            .fill_field(&Locator::css(Self::DIRECTIONS), directions)
            .await
    }

    /// Add an exclusion clause
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_exclusion_clause<D: CaseDriver>(
        driver: &mut D,
        clause: &str,
    ) -> E2eResult<()> {
        driver.click(&Locator::css(Self::EXCLUSION_YES)).await?;
        driver
            .fill_field(&Locator::css(Self::EXCLUSION_CLAUSE), clause)
            .await
    }

    /// Fill the supervision order length in months
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_number_of_months<D: CaseDriver>(
        driver: &mut D,
        months: u32,
    ) -> E2eResult<()> {
        driver
            .fill_field(&Locator::css(Self::MONTHS), &months.to_string())
            .await
    }

    /// Tick "Yes" for each given child index in the child selector
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_children<D: CaseDriver>(
        driver: &mut D,
        children: &[usize],
    ) -> E2eResult<()> {
        for index in children {
            let group = format!("#childSelector_option{index}");
            driver
                .click(&Locator::xpath(Self::label_in(&group)).with_text("Yes"))
                .await?;
        }
        Ok(())
    }

    /// Apply the order to all children
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn use_all_children<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
        driver
            .click(&Locator::xpath(Self::label_in(Self::ALL_CHILDREN_GROUP)).with_text("Yes"))
            .await
    }

    /// Apply the order to a subset of children
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn not_all_children<D: CaseDriver>(driver: &mut D) -> E2eResult<()> {
        driver
            .click(&Locator::xpath(Self::label_in(Self::ALL_CHILDREN_GROUP)).with_text("No"))
            .await
    }

    /// Select the EPO type by its label
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_epo_type<D: CaseDriver>(driver: &mut D, epo_type: &str) -> E2eResult<()> {
        driver
            .click(&Locator::xpath(Self::label_in(Self::EPO_TYPE_GROUP)).with_text(epo_type))
            .await
    }

    /// Enter the EPO removal address manually
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn enter_removal_address<D: CaseDriver>(
        driver: &mut D,
        removal_address: &Address,
    ) -> E2eResult<()> {
        driver
            .wait_for_element(&Locator::css(Self::EPO_REMOVAL_ADDRESS))
            .await?;
        address::enter_address_manually(driver, removal_address).await
    }

    /// Choose whether to include the EPO phrase
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn include_phrase<D: CaseDriver>(driver: &mut D, option: &str) -> E2eResult<()> {
        driver
            .click(&Locator::xpath(Self::label_in(Self::EPO_INCLUDE_PHRASE)).with_text(option))
            .await
    }

    /// Answer the close-case question
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn close_case_from_order<D: CaseDriver>(
        driver: &mut D,
        close: bool,
    ) -> E2eResult<()> {
        let selector = if close {
            Self::CLOSE_CASE_YES
        } else {
            Self::CLOSE_CASE_NO
        };
        driver.click(&Locator::css(selector)).await
    }

    /// Attach an order document
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn upload_order<D: CaseDriver>(driver: &mut D, file: &str) -> E2eResult<()> {
        driver
            .attach_file(&Locator::css(Self::UPLOADED_ORDER), file)
            .await
    }

    /// Verify the check-your-order summary
    ///
    /// # Errors
    ///
    /// Propagates the first failing assertion.
    pub async fn check_order<D: CaseDriver>(
        driver: &mut D,
        checks: &OrderChecks,
    ) -> E2eResult<()> {
        driver.see_text(&checks.family_man_case_number).await?;
        driver.see_text(&checks.children).await?;
        driver.see_text(&checks.order).await
    }
}

impl PageObject for CreateOrderEventPage {
    fn url_pattern(&self) -> &str {
        "/trigger/createOrder"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::TYPE_LIST)
    }
}
