//! Heading hierarchy checks - WCAG 1.3.1, 2.4.6.

use scraper::{Html, Selector};

use super::dom::{snippet, trimmed_text};
use super::{Issue, Severity};

/// Check heading presence, h1 usage, and level continuity.
///
/// The h1 checks are count-based, not nesting-based. The skipped-level
/// check walks headings in document order; the very first heading is
/// exempt (it has no previous level).
pub fn check_headings(doc: &Html) -> Vec<Issue> {
    let heading = Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
    let headings: Vec<_> = doc.select(&heading).collect();
    let mut issues = Vec::new();

    if headings.is_empty() {
        issues.push(
            Issue::new(
                Severity::Warning,
                "2.4.6",
                "No headings found - consider adding headings for structure",
            )
            .with_suggestion("Use h1-h6 elements to provide page structure"),
        );
        return issues;
    }

    let h1_count = headings.iter().filter(|h| h.value().name() == "h1").count();
    if h1_count == 0 {
        issues.push(
            Issue::new(Severity::Error, "2.4.6", "No h1 heading found")
                .with_suggestion("Every page should have exactly one h1 element"),
        );
    } else if h1_count > 1 {
        issues.push(
            Issue::new(
                Severity::Warning,
                "2.4.6",
                format!("Multiple h1 headings found ({})", h1_count),
            )
            .with_suggestion("Use only one h1 per page"),
        );
    }

    let mut prev_level = 0u32;
    for h in &headings {
        let name = h.value().name();
        let level = name[1..].parse::<u32>().unwrap_or(0);

        if prev_level > 0 && level > prev_level + 1 {
            issues.push(
                Issue::new(
                    Severity::Error,
                    "1.3.1",
                    format!("Heading level skipped: {} follows h{}", name, prev_level),
                )
                .with_element(snippet(*h))
                .with_suggestion("Never skip heading levels (e.g., h1 -> h3)"),
            );
        }

        if trimmed_text(*h).is_empty() {
            issues.push(
                Issue::new(Severity::Error, "2.4.6", format!("Empty heading: {}", name))
                    .with_element(snippet(*h))
                    .with_suggestion("All headings must contain text content"),
            );
        }

        prev_level = level;
    }

    issues
}
