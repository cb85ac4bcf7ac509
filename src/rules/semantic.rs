//! Semantic HTML misuse checks - WCAG 4.1.2.

use scraper::{Html, Selector};

use super::dom::{non_empty_attr, snippet};
use super::{Issue, Severity};

/// Check for generic containers given interactive semantics.
///
/// A div with a click handler or `role="button"` hides the control from
/// keyboard and assistive-technology users; a native button does not.
pub fn check_semantic(doc: &Html) -> Vec<Issue> {
    let div = Selector::parse("div").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&div) {
        let clickable = non_empty_attr(el, "onclick").is_some()
            || el.value().attr("role") == Some("button");
        if clickable {
            issues.push(
                Issue::new(Severity::Error, "4.1.2", "Div used as button")
                    .with_element(snippet(el))
                    .with_suggestion("Use <button> element instead of div with onclick"),
            );
        }
    }

    issues
}
