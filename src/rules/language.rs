//! Document language checks - WCAG 3.1.1.

use scraper::{Html, Selector};

use super::dom::{non_empty_attr, snippet};
use super::{Issue, Severity};

/// Check that the root element declares a language.
pub fn check_language(doc: &Html) -> Vec<Issue> {
    let html = Selector::parse("html").expect("valid selector");
    let mut issues = Vec::new();

    if let Some(el) = doc.select(&html).next() {
        if non_empty_attr(el, "lang").is_none() {
            issues.push(
                Issue::new(Severity::Error, "3.1.1", "HTML element missing lang attribute")
                    .with_element(snippet(el))
                    .with_suggestion("Add lang=\"en\" to <html> element"),
            );
        }
    }

    issues
}
