//! Page objects for the case management screens.
//!
//! Page objects are declarative: field selectors plus thin action wrappers
//! over [`CaseDriver`](crate::driver::CaseDriver). They hold no browser
//! state of their own.

use crate::locator::Locator;

pub mod address;
pub mod case_list;
pub mod case_view;
pub mod create_order;
pub mod judge_and_legal_advisor;
pub mod manage_hearings;
pub mod review_cmo;
pub mod upload_additional_applications;

pub use case_list::CaseListPage;
pub use case_view::{CaseEvent, CaseViewPage, Tab, TaskStatus};
pub use create_order::CreateOrderEventPage;
pub use manage_hearings::ManageHearingsEventPage;
pub use review_cmo::ReviewAgreedCmoEventPage;
pub use upload_additional_applications::UploadAdditionalApplicationsEventPage;

/// Trait for page objects representing one screen or event page.
pub trait PageObject {
    /// URL fragment that identifies this page (e.g. `/trigger/createOrder`)
    fn url_pattern(&self) -> &str;

    /// Element whose presence means the page has finished rendering
    fn load_marker(&self) -> Locator;

    /// Page name for logging
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
