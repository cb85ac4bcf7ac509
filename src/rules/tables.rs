//! Data table checks - WCAG 1.3.1.

use scraper::{Html, Selector};

use super::dom::{non_empty_attr, snippet};
use super::{Issue, Severity};

/// Check tables for captions, header cells, and header scope.
///
/// The scope check fires once per header cell, independently.
pub fn check_tables(doc: &Html) -> Vec<Issue> {
    let table = Selector::parse("table").expect("valid selector");
    let caption = Selector::parse("caption").expect("valid selector");
    let th = Selector::parse("th").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&table) {
        if el.select(&caption).next().is_none() {
            issues.push(
                Issue::new(Severity::Warning, "1.3.1", "Table missing caption")
                    .with_element(snippet(el))
                    .with_suggestion("Add <caption> to describe table purpose"),
            );
        }

        let headers: Vec<_> = el.select(&th).collect();
        if headers.is_empty() {
            issues.push(
                Issue::new(Severity::Warning, "1.3.1", "Table has no header cells (th)")
                    .with_element(snippet(el))
                    .with_suggestion("Use <th> elements for table headers"),
            );
        }

        for header in headers {
            if non_empty_attr(header, "scope").is_none() {
                issues.push(
                    Issue::new(
                        Severity::Warning,
                        "1.3.1",
                        "Table header missing scope attribute",
                    )
                    .with_element(snippet(header))
                    .with_suggestion("Add scope=\"col\" or scope=\"row\" to <th> elements"),
                );
            }
        }
    }

    issues
}
