//! Integration coverage for tab field location and assertion dispatch.
//!
//! Everything here runs against [`MockDriver`]; the scenarios mirror how
//! the case workflows check tab contents after submitting events.

use fpl_e2e::tab::{
    self, organisation_assertions, organisation_field_selector, tab_assertions,
    tab_field_selector, TAB_BODY,
};
use fpl_e2e::{E2eError, FieldPath, MockDriver, TabValue};
use proptest::prelude::*;

fn path(segments: &[&str]) -> FieldPath {
    FieldPath::new(segments.iter().copied()).unwrap()
}

#[tokio::test]
async fn order_checklist_asserts_each_value_in_same_field() {
    let mut driver = MockDriver::new();
    let p = path(&["Orders and directions needed", "Which orders do you need?"]);
    tab::see_in_tab(&mut driver, &p, ["Care order", "Interim care order"])
        .await
        .unwrap();

    let expected = tab_field_selector(&p);
    assert_eq!(driver.call_count("see_element_with_text:"), 2);
    assert!(driver.was_called(&format!("see_element_with_text:{expected}:Care order")));
    assert!(driver.was_called(&format!("see_element_with_text:{expected}:Interim care order")));
}

#[tokio::test]
async fn top_level_field_asserts_against_header_row() {
    let mut driver = MockDriver::new();
    tab::see_in_tab(
        &mut driver,
        &FieldPath::field("Family man case number"),
        "FMN12345",
    )
    .await
    .unwrap();

    assert!(driver.was_called(
        "see_element_with_text:\
         //mat-tab-body//tr[.//th//*[text()=\"Family man case number\"]]:FMN12345"
    ));
}

#[tokio::test]
async fn representative_address_lines_all_check_first_row() {
    let mut driver = MockDriver::new();
    let p = path(&["Respondents 1", "Representative", "Address"]);
    tab::see_organisation_in_tab(
        &mut driver,
        &p,
        vec![
            "Flat 2",
            "Caversham House 15-17",
            "Church Road",
            "Reading",
            "RG4 7AA",
            "United Kingdom",
        ],
    )
    .await
    .unwrap();

    assert_eq!(driver.call_count("see_element_with_text:"), 6);
    let row_scoped = format!("{}//tr[1]", organisation_field_selector(&p).unwrap());
    for call in driver.history() {
        assert!(call.starts_with(&format!("see_element_with_text:{row_scoped}:")));
    }
}

#[tokio::test]
async fn assertion_failure_stops_at_first_missing_value() {
    let mut driver = MockDriver::new().with_visible_texts(["Care order"]);
    let p = path(&["Orders and directions needed", "Which orders do you need?"]);
    let err = tab::see_in_tab(
        &mut driver,
        &p,
        ["Care order", "Supervision order", "Interim care order"],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, E2eError::AssertionFailed { .. }));
    // Failure on the second value means the third is never checked.
    assert_eq!(driver.call_count("see_element_with_text:"), 2);
}

#[tokio::test]
async fn organisation_assertion_rejects_panel_less_path_before_driving() {
    let mut driver = MockDriver::new();
    let err = tab::see_organisation_in_tab(&mut driver, &FieldPath::field("Address"), "Reading")
        .await
        .unwrap_err();

    assert!(matches!(err, E2eError::InvalidFieldPath { .. }));
    assert!(driver.history().is_empty());
}

fn label_strategy() -> impl Strategy<Value = String> {
    // Label text as rendered; quotes excluded since labels are embedded in
    // XPath string literals verbatim.
    "[A-Za-z][A-Za-z0-9 ,?'-]{0,30}"
}

proptest! {
    #[test]
    fn prop_panel_less_paths_never_use_panel_markup(field in label_strategy()) {
        let selector = tab_field_selector(&FieldPath::field(field.clone()));
        prop_assert!(selector.starts_with(TAB_BODY));
        prop_assert!(!selector.contains("complex-panel"));
        let expected = format!("text()=\"{field}\"");
        prop_assert!(selector.contains(&expected));
    }

    #[test]
    fn prop_one_panel_predicate_per_segment_in_order(
        segments in prop::collection::vec(label_strategy(), 2..5)
    ) {
        let p = FieldPath::new(segments.clone()).unwrap();
        let selector = tab_field_selector(&p);
        prop_assert_eq!(
            selector.matches("complex-panel-title").count(),
            segments.len() - 1
        );
        let mut last = 0;
        for panel in p.panels() {
            let pos = selector[last..].find(panel.as_str()).unwrap() + last;
            prop_assert!(pos >= last);
            last = pos + panel.len();
        }
    }

    #[test]
    fn prop_scalar_plan_is_singleton(
        segments in prop::collection::vec(label_strategy(), 1..4),
        value in label_strategy()
    ) {
        let p = FieldPath::new(segments).unwrap();
        let plan = tab_assertions(&p, &TabValue::from(value.clone()));
        prop_assert_eq!(plan.len(), 1);
        prop_assert_eq!(plan[0].selector.clone(), tab_field_selector(&p));
        prop_assert_eq!(plan[0].text.clone(), value);
    }

    #[test]
    fn prop_list_plan_preserves_value_order_and_shares_scope(
        segments in prop::collection::vec(label_strategy(), 1..4),
        values in prop::collection::vec(label_strategy(), 1..6)
    ) {
        let p = FieldPath::new(segments).unwrap();
        let plan = tab_assertions(&p, &TabValue::from(values.clone()));
        prop_assert_eq!(plan.len(), values.len());
        for (assertion, value) in plan.iter().zip(&values) {
            prop_assert_eq!(&assertion.selector, &plan[0].selector);
            prop_assert_eq!(&assertion.text, value);
        }
    }

    #[test]
    fn prop_organisation_queries_carry_panel_and_colon_label(
        segments in prop::collection::vec(label_strategy(), 2..5)
    ) {
        let p = FieldPath::new(segments).unwrap();
        let selector = organisation_field_selector(&p).unwrap();
        prop_assert!(selector.contains("complex-panel-compound-field"));
        prop_assert!(selector.matches("complex-panel-title").count() >= 1);
        let expected = format!("text()=\"{}:\"", p.field_name());
        prop_assert!(selector.contains(&expected));
    }

    #[test]
    fn prop_organisation_list_rows_always_first(
        segments in prop::collection::vec(label_strategy(), 2..4),
        values in prop::collection::vec(label_strategy(), 1..5)
    ) {
        let p = FieldPath::new(segments).unwrap();
        let plan = organisation_assertions(&p, &TabValue::from(values)).unwrap();
        for assertion in &plan {
            prop_assert!(assertion.selector.ends_with("//tr[1]"));
        }
    }
}
