//! Button content checks - WCAG 4.1.2.

use scraper::{Html, Selector};

use super::dom::{has_embedded_image, snippet, trimmed_text};
use super::{Issue, Severity};

/// Check that buttons expose an accessible name.
pub fn check_buttons(doc: &Html) -> Vec<Issue> {
    let button = Selector::parse("button").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&button) {
        if trimmed_text(el).is_empty() && !has_embedded_image(el) {
            issues.push(
                Issue::new(Severity::Error, "4.1.2", "Button has no text content")
                    .with_element(snippet(el))
                    .with_suggestion("Add text content or aria-label to button"),
            );
        }
    }

    issues
}
