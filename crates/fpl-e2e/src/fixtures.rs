//! Canned test data for scenarios.
//!
//! Values mirror what the lower environments seed, so tab assertions can
//! match rendered text verbatim.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A C21 order entered through the create order event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order title shown in the orders tab
    pub title: String,
    /// Order details text
    pub details: String,
    /// Rendered order type label
    pub type_label: String,
}

/// Judge and legal advisor details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeAndLegalAdvisor {
    /// Judge title radio label
    pub judge_title: String,
    /// Judge last name
    pub judge_last_name: String,
    /// Judge email address
    pub judge_email: String,
    /// Legal advisor full name
    pub legal_advisor_name: String,
}

/// Details for one hearing booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearingDetails {
    /// Hearing type label
    pub hearing_type: String,
    /// Venue name
    pub venue: String,
    /// Attendance (in person / remote)
    pub presence: String,
    /// Hearing start
    pub start: DateTime<Utc>,
    /// Hearing end
    pub end: DateTime<Utc>,
    /// Judge and legal advisor for the hearing
    pub judge_and_legal_advisor: JudgeAndLegalAdvisor,
    /// Notes included in the notice of hearing
    pub additional_notes: String,
}

/// A postal address entered manually
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Building and street line 1
    pub line1: String,
    /// Line 2
    pub line2: String,
    /// Line 3
    pub line3: String,
    /// Town or city
    pub town: String,
    /// Postcode
    pub postcode: String,
    /// Country
    pub country: String,
}

impl Address {
    /// Address lines in rendered order, for tab assertions
    #[must_use]
    pub fn rendered_lines(&self) -> Vec<String> {
        vec![
            self.line1.clone(),
            self.line2.clone(),
            self.line3.clone(),
            self.town.clone(),
            self.postcode.clone(),
            self.country.clone(),
        ]
    }
}

/// Payment by account details for additional applications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PbaPayment {
    /// PBA number (PBA followed by 7 digits)
    pub pba_number: String,
    /// Client code
    pub client_code: String,
    /// Customer reference
    pub customer_reference: String,
}

/// Standard C21 order fixture
#[must_use]
pub fn c21_order() -> Order {
    Order {
        title: "Example Order Title".to_string(),
        details: "Example order details here - Lorem ipsum dolor sit amet".to_string(),
        type_label: "Blank order (C21)".to_string(),
    }
}

/// Default judge and legal advisor fixture
#[must_use]
pub fn judge_and_legal_advisor() -> JudgeAndLegalAdvisor {
    JudgeAndLegalAdvisor {
        judge_title: "Her Honour Judge".to_string(),
        judge_last_name: "Reed".to_string(),
        judge_email: "judge.reed@example.com".to_string(),
        legal_advisor_name: "Ernest Friedrich".to_string(),
    }
}

/// A hearing booking starting shortly after "now"
#[must_use]
pub fn hearing_details() -> HearingDetails {
    let start = Utc::now() + Duration::minutes(5);
    HearingDetails {
        hearing_type: "Case management".to_string(),
        venue: "Aberdeen Tribunal Hearing Centre".to_string(),
        presence: "In person".to_string(),
        start,
        end: start + Duration::minutes(5),
        judge_and_legal_advisor: judge_and_legal_advisor(),
        additional_notes: "The parties should arrive 30 minutes early".to_string(),
    }
}

/// Representative address fixture, matching seeded respondent data
#[must_use]
pub fn representative_address() -> Address {
    Address {
        line1: "Flat 2".to_string(),
        line2: "Caversham House 15-17".to_string(),
        line3: "Church Road".to_string(),
        town: "Reading".to_string(),
        postcode: "RG4 7AA".to_string(),
        country: "United Kingdom".to_string(),
    }
}

/// PBA payment fixture for C2 uploads
#[must_use]
pub fn c2_payment() -> PbaPayment {
    PbaPayment {
        pba_number: "PBA0082848".to_string(),
        client_code: "8888".to_string(),
        customer_reference: "Example reference".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hearing_end_follows_start() {
        let hearing = hearing_details();
        assert!(hearing.end > hearing.start);
    }

    #[test]
    fn test_address_lines_keep_rendered_order() {
        let lines = representative_address().rendered_lines();
        assert_eq!(lines.first().map(String::as_str), Some("Flat 2"));
        assert_eq!(lines.last().map(String::as_str), Some("United Kingdom"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_pba_number_shape() {
        let payment = c2_payment();
        assert!(payment.pba_number.starts_with("PBA"));
        assert_eq!(payment.pba_number.len(), 10);
    }
}
