//! Case detail view: tabs, event launcher and tab content assertions.

use crate::driver::CaseDriver;
use crate::locator::Locator;
use crate::result::E2eResult;
use crate::tab::{self, FieldPath, TabValue};

use super::PageObject;

/// Tabs of the case detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Orders tab
    Orders,
    /// Draft orders tab
    DraftOrders,
    /// Hearings tab
    Hearings,
    /// Documents tab
    Documents,
    /// Applicants tab
    Applicants,
    /// Respondents tab
    Respondents,
    /// Children tab
    Children,
    /// Legal basis tab
    LegalBasis,
}

impl Tab {
    /// Rendered tab label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::DraftOrders => "Draft orders",
            Self::Hearings => "Hearings",
            Self::Documents => "Documents",
            Self::Applicants => "Applicants",
            Self::Respondents => "Respondents",
            Self::Children => "Children",
            Self::LegalBasis => "Legal basis",
        }
    }
}

/// Events reachable from the "Next step" dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseEvent {
    /// Submit application
    SubmitApplication,
    /// Add case number
    AddFamilyManCaseNumber,
    /// Send to gatekeeper
    SendToGatekeeper,
    /// Manage hearings
    ManageHearings,
    /// Draft standard directions
    DraftStandardDirections,
    /// Create an order
    CreateOrder,
    /// Upload additional applications
    UploadAdditionalApplications,
    /// Review agreed case management order
    ReviewAgreedCmo,
}

impl CaseEvent {
    /// Dropdown label for the event
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SubmitApplication => "Submit application",
            Self::AddFamilyManCaseNumber => "Add case number",
            Self::SendToGatekeeper => "Send to gatekeeper",
            Self::ManageHearings => "Manage hearings",
            Self::DraftStandardDirections => "Draft standard directions",
            Self::CreateOrder => "Create an order",
            Self::UploadAdditionalApplications => "Upload additional applications",
            Self::ReviewAgreedCmo => "Review agreed CMO",
        }
    }
}

/// Completion state shown against a task in the start-application task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task has been finished (green tick icon)
    Finished,
    /// Task section is completed
    Completed,
    /// Task has been started but not finished
    InProgress,
}

impl TaskStatus {
    /// Title of the status icon rendered next to the task link
    #[must_use]
    pub const fn icon_title(self) -> &'static str {
        match self {
            Self::Finished => "Finished",
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
        }
    }
}

/// The case detail view
#[derive(Debug, Clone, Copy)]
pub struct CaseViewPage;

impl CaseViewPage {
    const NEXT_STEP: &'static str = "#next-step";
    const GO_BUTTON: &'static str = ".event-trigger .button";
    const TAB_LIST: &'static str = ".mat-tab-list";
    const TASK_LIST: &'static str = "//div[contains(@class,\"task-list\")]";

    /// Select a tab by its label
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn select_tab<D: CaseDriver>(driver: &mut D, tab: Tab) -> E2eResult<()> {
        driver
            .click(
                &Locator::xpath("//div[contains(@class,\"mat-tab-label\")]")
                    .with_text(tab.label()),
            )
            .await
    }

    /// Launch an event from the "Next step" dropdown.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn go_to_new_actions<D: CaseDriver>(
        driver: &mut D,
        event: CaseEvent,
    ) -> E2eResult<()> {
        driver
            .select_option(&Locator::css(Self::NEXT_STEP), event.label())
            .await?;
        driver.click(&Locator::css(Self::GO_BUTTON)).await
    }

    /// Assert a simple tab field shows the expected value(s)
    ///
    /// # Errors
    ///
    /// Propagates the first failing assertion.
    pub async fn see_in_tab<D: CaseDriver>(
        driver: &mut D,
        path: &FieldPath,
        value: impl Into<TabValue>,
    ) -> E2eResult<()> {
        tab::see_in_tab(driver, path, value).await
    }

    /// Assert an organisation field shows the expected value(s)
    ///
    /// # Errors
    ///
    /// Propagates the first failing assertion, or rejects a panel-less path.
    pub async fn see_organisation_in_tab<D: CaseDriver>(
        driver: &mut D,
        path: &FieldPath,
        value: impl Into<TabValue>,
    ) -> E2eResult<()> {
        tab::see_organisation_in_tab(driver, path, value).await
    }

    /// Assert the post-submission confirmation banner for an event
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn see_event_submission_confirmation<D: CaseDriver>(
        driver: &mut D,
        event: CaseEvent,
    ) -> E2eResult<()> {
        driver
            .see_text(&format!("has been updated with event: {}", event.label()))
            .await
    }

    /// Assert a tab is not offered at all (e.g. draft orders hidden from
    /// other parties)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn dont_see_tab<D: CaseDriver>(driver: &mut D, tab: Tab) -> E2eResult<()> {
        driver
            .dont_see_text(&Locator::css(Self::TAB_LIST), tab.label())
            .await
    }

    fn task_with_status_selector(task: &str, status: TaskStatus) -> String {
        format!(
            "{}//p[.//a[text()=\"{task}\"] and ..//img[@title=\"{}\"]]",
            Self::TASK_LIST,
            status.icon_title()
        )
    }

    /// Assert a task in the start-application list carries the given status
    /// icon
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn check_task_status<D: CaseDriver>(
        driver: &mut D,
        task: &str,
        status: TaskStatus,
    ) -> E2eResult<()> {
        driver
            .see_element_with_text(&Self::task_with_status_selector(task, status), task)
            .await
    }

    /// Assert a task is listed but has not been started (no status icon)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn check_task_is_not_started<D: CaseDriver>(
        driver: &mut D,
        task: &str,
    ) -> E2eResult<()> {
        driver
            .see_element_with_text(
                &format!(
                    "{}//p[.//a[text()=\"{task}\"] and not(..//img)]",
                    Self::TASK_LIST
                ),
                task,
            )
            .await
    }

    /// Assert a task can be launched (rendered as a link)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn check_task_is_available<D: CaseDriver>(
        driver: &mut D,
        task: &str,
    ) -> E2eResult<()> {
        driver
            .see_element_with_text(&format!("{}//p/a[text()=\"{task}\"]", Self::TASK_LIST), task)
            .await
    }

    /// Assert a task cannot be launched (its name is not among the task
    /// links, e.g. "Submit application" before the mandatory sections are
    /// done)
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn check_task_is_unavailable<D: CaseDriver>(
        driver: &mut D,
        task: &str,
    ) -> E2eResult<()> {
        driver
            .dont_see_text(&Locator::xpath(format!("{}//a", Self::TASK_LIST)), task)
            .await
    }
}

impl PageObject for CaseViewPage {
    fn url_pattern(&self) -> &str {
        "/cases/case-details"
    }

    fn load_marker(&self) -> Locator {
        Locator::css(Self::TAB_LIST)
    }
}
