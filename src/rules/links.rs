//! Link text and target checks - WCAG 2.4.4.

use scraper::{Html, Selector};

use super::dom::{has_embedded_image, snippet, trimmed_text};
use super::{Issue, Severity};

/// Link phrases that carry no meaning out of context.
const GENERIC_PHRASES: &[&str] = &["click here", "read more", "more", "link", "here"];

/// Check that links have content and a target.
///
/// The three checks are independent; one element can fire all of them.
pub fn check_links(doc: &Html) -> Vec<Issue> {
    let anchor = Selector::parse("a").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&anchor) {
        let text = trimmed_text(el);

        if text.is_empty() && !has_embedded_image(el) {
            issues.push(
                Issue::new(Severity::Error, "2.4.4", "Empty link with no text or image")
                    .with_element(snippet(el))
                    .with_suggestion("Add descriptive link text or alt text on linked image"),
            );
        }

        if GENERIC_PHRASES.contains(&text.to_lowercase().as_str()) {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "2.4.4",
                    format!("Generic link text: \"{}\"", text),
                )
                .with_element(snippet(el))
                .with_suggestion("Use descriptive link text that makes sense out of context"),
            );
        }

        let href_blank = el
            .value()
            .attr("href")
            .map(|h| h.trim().is_empty())
            .unwrap_or(true);
        if href_blank {
            issues.push(
                Issue::new(Severity::Error, "2.4.4", "Link missing href attribute")
                    .with_element(snippet(el))
                    .with_suggestion("All links must have a valid href attribute"),
            );
        }
    }

    issues
}
