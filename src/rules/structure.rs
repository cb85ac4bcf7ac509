//! Page landmark checks - WCAG 1.3.1.

use scraper::{Html, Selector};

use super::dom::{non_empty_attr, snippet};
use super::{Issue, Severity};

/// Check for a main landmark and distinguishable navigation regions.
///
/// Navigation labels are only required once more than one navigation
/// region exists on the page.
pub fn check_structure(doc: &Html) -> Vec<Issue> {
    let main = Selector::parse("main, [role=\"main\"]").expect("valid selector");
    let nav = Selector::parse("nav, [role=\"navigation\"]").expect("valid selector");
    let mut issues = Vec::new();

    if doc.select(&main).next().is_none() {
        issues.push(
            Issue::new(Severity::Warning, "1.3.1", "No main landmark found")
                .with_suggestion("Add <main> element to identify main content"),
        );
    }

    let navs: Vec<_> = doc.select(&nav).collect();
    if navs.len() > 1 {
        for el in navs {
            if non_empty_attr(el, "aria-label").is_none()
                && non_empty_attr(el, "aria-labelledby").is_none()
            {
                issues.push(
                    Issue::new(
                        Severity::Warning,
                        "1.3.1",
                        "Multiple navigation regions - consider adding aria-label",
                    )
                    .with_element(snippet(el))
                    .with_suggestion(
                        "When multiple navs exist, label each: <nav aria-label=\"Main navigation\">",
                    ),
                );
            }
        }
    }

    issues
}
