//! Tab field location and assertion for the case detail view.
//!
//! A rendered case is organized as tabs containing either flat labeled
//! fields or nested named panels with sub-fields and collection rows. A
//! [`FieldPath`] addresses one field: zero or more panel titles followed by
//! the field label. This module compiles a path into an XPath structural
//! query and asserts expected values (scalar or ordered list) through a
//! [`CaseDriver`].
//!
//! Query synthesis is pure string composition. Panel and field labels are
//! matched by exact text equality, no trimming or case folding; callers
//! supply label text verbatim as rendered. If a query matches several
//! elements the evaluator's first match wins; nested repeating panels with
//! identical titles are not disambiguated here.

use crate::driver::CaseDriver;
use crate::result::{E2eError, E2eResult};

/// Root scope for all tab field queries
pub const TAB_BODY: &str = "//mat-tab-body";

/// Path to a field in the case detail view.
///
/// Ordered segments: every segment except the last is a nested panel
/// title, the last is the field label. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Build a path from ordered segments.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::InvalidFieldPath`] when no segments are given.
    pub fn new<I, S>(segments: I) -> E2eResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(E2eError::InvalidFieldPath {
                message: "field path must contain at least a field name".to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// Build a path addressing a top-level tab field with no panel scope.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Panel titles, outermost first (empty for top-level fields)
    #[must_use]
    pub fn panels(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The field label (last segment)
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.segments[self.segments.len() - 1].as_str()
    }

    /// Number of segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A path is never empty; kept for clippy symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Expected value for a tab field assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabValue {
    /// Single scalar field value
    Scalar(String),
    /// Ordered values of a collection/repeating field
    List(Vec<String>),
}

impl From<&str> for TabValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for TabValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for TabValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for TabValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TabValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// One planned visibility-with-text assertion.
///
/// Separating the plan from execution keeps query synthesis testable
/// without a browser; [`see_in_tab`] and [`see_organisation_in_tab`]
/// execute plans in order, failing fast on the first miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleText {
    /// XPath selector narrowing the field location
    pub selector: String,
    /// Text expected to be contained in a visible match
    pub text: String,
}

fn panel_scope(panels: &[String]) -> String {
    panels.iter().fold(TAB_BODY.to_string(), |selector, step| {
        format!(
            "{selector}//*[@class=\"complex-panel\" and .//*[@class=\"complex-panel-title\" and .//*[text()=\"{step}\"]]]"
        )
    })
}

/// Compile a path into the simple-field structural query.
///
/// A path with no panel segments addresses a top-level tab row by its
/// header cell text; otherwise each panel segment narrows the scope in
/// order and the leaf matches a simple field by its label span.
#[must_use]
pub fn tab_field_selector(path: &FieldPath) -> String {
    let scope = panel_scope(path.panels());
    let field = path.field_name();
    if path.panels().is_empty() {
        format!("{scope}//tr[.//th//*[text()=\"{field}\"]]")
    } else {
        format!(
            "{scope}//*[@class=\"complex-panel-simple-field\" and .//span[text()=\"{field}\"]]"
        )
    }
}

/// Compile a path into the organisation (compound) field query.
///
/// Organisation fields render their label as a free-floating text node
/// with a trailing colon and their values as table rows, so the leaf
/// predicate differs from the simple-field one. The field must live inside
/// at least one panel.
///
/// # Errors
///
/// Returns [`E2eError::InvalidFieldPath`] when the path carries no panel
/// segments.
pub fn organisation_field_selector(path: &FieldPath) -> E2eResult<String> {
    if path.panels().is_empty() {
        return Err(E2eError::InvalidFieldPath {
            message: format!(
                "organisation field '{}' requires at least one enclosing panel",
                path.field_name()
            ),
        });
    }
    let scope = panel_scope(path.panels());
    let field = path.field_name();
    Ok(format!(
        "{scope}//*[contains(@class,\"complex-panel-compound-field\") and ..//*[text()=\"{field}:\"]]"
    ))
}

/// Plan the assertions for a simple tab field.
///
/// Scalar values produce exactly one assertion. List values produce one
/// containment assertion per element, every one scoped to the same located
/// field (order does not map to row index).
#[must_use]
pub fn tab_assertions(path: &FieldPath, value: &TabValue) -> Vec<VisibleText> {
    let selector = tab_field_selector(path);
    match value {
        TabValue::Scalar(text) => vec![VisibleText {
            selector,
            text: text.clone(),
        }],
        TabValue::List(values) => values
            .iter()
            .map(|text| VisibleText {
                selector: selector.clone(),
                text: text.clone(),
            })
            .collect(),
    }
}

/// Plan the assertions for an organisation field.
///
/// Scalar values assert against the compound field itself. List values
/// assert each element against the first value row of the compound field's
/// table. Checking every element against row 1 (rather than successive
/// rows) mirrors long-standing suite behavior; callers relying on
/// row-per-element semantics must scope rows themselves.
///
/// # Errors
///
/// Returns [`E2eError::InvalidFieldPath`] when the path carries no panel
/// segments.
pub fn organisation_assertions(path: &FieldPath, value: &TabValue) -> E2eResult<Vec<VisibleText>> {
    let selector = organisation_field_selector(path)?;
    Ok(match value {
        TabValue::Scalar(text) => vec![VisibleText {
            selector,
            text: text.clone(),
        }],
        TabValue::List(values) => values
            .iter()
            .map(|text| VisibleText {
                selector: format!("{selector}//tr[1]"),
                text: text.clone(),
            })
            .collect(),
    })
}

/// Assert a simple tab field shows the expected value(s).
///
/// Driver failures propagate unmodified; no retry and no wrapping happen
/// here.
///
/// # Errors
///
/// Returns the first failing visibility assertion from the driver.
pub async fn see_in_tab<D>(
    driver: &mut D,
    path: &FieldPath,
    value: impl Into<TabValue>,
) -> E2eResult<()>
where
    D: CaseDriver + ?Sized,
{
    for assertion in tab_assertions(path, &value.into()) {
        driver
            .see_element_with_text(&assertion.selector, &assertion.text)
            .await?;
    }
    Ok(())
}

/// Assert an organisation field shows the expected value(s).
///
/// # Errors
///
/// Returns [`E2eError::InvalidFieldPath`] for a panel-less path, otherwise
/// the first failing visibility assertion from the driver.
pub async fn see_organisation_in_tab<D>(
    driver: &mut D,
    path: &FieldPath,
    value: impl Into<TabValue>,
) -> E2eResult<()>
where
    D: CaseDriver + ?Sized,
{
    for assertion in organisation_assertions(path, &value.into())? {
        driver
            .see_element_with_text(&assertion.selector, &assertion.text)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> FieldPath {
        FieldPath::new(segments.iter().copied()).unwrap()
    }

    mod field_path_tests {
        use super::*;

        #[test]
        fn test_empty_path_rejected() {
            let err = FieldPath::new(Vec::<String>::new()).unwrap_err();
            assert!(matches!(err, E2eError::InvalidFieldPath { .. }));
        }

        #[test]
        fn test_single_segment_is_field_name() {
            let p = FieldPath::field("Family man case number");
            assert_eq!(p.field_name(), "Family man case number");
            assert!(p.panels().is_empty());
            assert_eq!(p.len(), 1);
        }

        #[test]
        fn test_panels_preserve_order() {
            let p = path(&["Respondents 1", "Representative", "Address"]);
            assert_eq!(p.panels(), ["Respondents 1", "Representative"]);
            assert_eq!(p.field_name(), "Address");
        }
    }

    mod simple_selector_tests {
        use super::*;

        #[test]
        fn test_top_level_field_addresses_header_row() {
            let selector = tab_field_selector(&FieldPath::field("Case name"));
            assert_eq!(
                selector,
                "//mat-tab-body//tr[.//th//*[text()=\"Case name\"]]"
            );
        }

        #[test]
        fn test_top_level_field_has_no_panel_scope() {
            let selector = tab_field_selector(&FieldPath::field("Case name"));
            assert!(!selector.contains("complex-panel"));
        }

        #[test]
        fn test_single_panel_narrows_then_matches_label_span() {
            let selector = tab_field_selector(&path(&[
                "Orders and directions needed",
                "Which orders do you need?",
            ]));
            assert_eq!(
                selector,
                "//mat-tab-body\
                 //*[@class=\"complex-panel\" and .//*[@class=\"complex-panel-title\" and .//*[text()=\"Orders and directions needed\"]]]\
                 //*[@class=\"complex-panel-simple-field\" and .//span[text()=\"Which orders do you need?\"]]"
            );
        }

        #[test]
        fn test_nested_panels_scope_in_order() {
            let selector = tab_field_selector(&path(&["Child 1", "Additional needs", "Details"]));
            let outer = selector.find("Child 1").unwrap();
            let inner = selector.find("Additional needs").unwrap();
            let leaf = selector.find("Details").unwrap();
            assert!(outer < inner && inner < leaf);
            assert_eq!(selector.matches("complex-panel\"").count(), 2);
        }

        #[test]
        fn test_exact_text_matching_no_contains() {
            let selector = tab_field_selector(&path(&["Hearing 1", "Type of hearing"]));
            assert!(selector.contains("text()=\"Type of hearing\""));
            assert!(!selector.contains("contains(text()"));
        }
    }

    mod organisation_selector_tests {
        use super::*;

        #[test]
        fn test_requires_panel_scope() {
            let err = organisation_field_selector(&FieldPath::field("Address")).unwrap_err();
            assert!(matches!(err, E2eError::InvalidFieldPath { .. }));
        }

        #[test]
        fn test_label_carries_trailing_colon() {
            let selector =
                organisation_field_selector(&path(&["Applicant 1", "Address"])).unwrap();
            assert!(selector.contains("text()=\"Address:\""));
        }

        #[test]
        fn test_compound_field_predicate_is_loose_class_match() {
            let selector =
                organisation_field_selector(&path(&["Applicant 1", "Address"])).unwrap();
            assert!(selector.contains("contains(@class,\"complex-panel-compound-field\")"));
            assert!(selector.starts_with(TAB_BODY));
        }

        #[test]
        fn test_nested_panels() {
            let selector = organisation_field_selector(&path(&[
                "Respondents 1",
                "Representative",
                "Address",
            ]))
            .unwrap();
            assert_eq!(selector.matches("complex-panel\"").count(), 2);
            let first = selector.find("Respondents 1").unwrap();
            let second = selector.find("Representative").unwrap();
            assert!(first < second);
        }
    }

    mod assertion_plan_tests {
        use super::*;

        #[test]
        fn test_scalar_plans_exactly_one_assertion() {
            let p = path(&["Hearing 1", "Venue"]);
            let plan = tab_assertions(&p, &TabValue::from("Aberdeen Tribunal Hearing Centre"));
            assert_eq!(plan.len(), 1);
            assert_eq!(plan[0].selector, tab_field_selector(&p));
            assert_eq!(plan[0].text, "Aberdeen Tribunal Hearing Centre");
        }

        #[test]
        fn test_list_plans_one_assertion_per_value_same_scope() {
            let p = path(&["Orders and directions needed", "Which orders do you need?"]);
            let plan = tab_assertions(&p, &TabValue::from(vec!["Care order", "Interim care order"]));
            assert_eq!(plan.len(), 2);
            assert_eq!(plan[0].selector, plan[1].selector);
            assert_eq!(plan[0].text, "Care order");
            assert_eq!(plan[1].text, "Interim care order");
        }

        #[test]
        fn test_organisation_scalar_targets_field_itself() {
            let p = path(&["Applicant 1", "Name"]);
            let plan = organisation_assertions(&p, &TabValue::from("Swansea City Council")).unwrap();
            assert_eq!(plan.len(), 1);
            assert!(!plan[0].selector.ends_with("//tr[1]"));
        }

        #[test]
        fn test_organisation_list_targets_first_row_for_every_value() {
            let p = path(&["Respondents 1", "Representative", "Address"]);
            let plan = organisation_assertions(
                &p,
                &TabValue::from(vec!["Flat 2", "Caversham House 15-17", "Church Road"]),
            )
            .unwrap();
            assert_eq!(plan.len(), 3);
            for assertion in &plan {
                assert!(assertion.selector.ends_with("//tr[1]"));
            }
            // Row scoping never advances past the first row.
            assert!(plan.iter().all(|a| !a.selector.contains("//tr[2]")));
        }

        #[test]
        fn test_organisation_plan_rejects_panel_less_path() {
            let err =
                organisation_assertions(&FieldPath::field("Address"), &TabValue::from("x"))
                    .unwrap_err();
            assert!(matches!(err, E2eError::InvalidFieldPath { .. }));
        }
    }
}
