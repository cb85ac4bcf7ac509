//! Image alt text checks - WCAG 1.1.1.

use scraper::{Html, Selector};

use super::dom::snippet;
use super::{Issue, Severity};

/// Alt text openers that describe the medium instead of the content.
const REDUNDANT_DESCRIPTORS: &[&str] = &["image of", "picture of", "graphic of", "photo of"];

/// Check that every image carries appropriate alt text.
///
/// A missing `alt` attribute is an error; `alt=""` is accepted silently
/// (decorative-image convention).
pub fn check_images(doc: &Html) -> Vec<Issue> {
    let img = Selector::parse("img").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&img) {
        match el.value().attr("alt") {
            None => {
                issues.push(
                    Issue::new(Severity::Error, "1.1.1", "Image missing alt attribute")
                        .with_element(snippet(el))
                        .with_suggestion(
                            "Add alt=\"\" for decorative images or descriptive alt text for meaningful images",
                        ),
                );
            }
            Some(alt) if !alt.trim().is_empty() => {
                let lowered = alt.to_lowercase();
                if REDUNDANT_DESCRIPTORS.iter().any(|p| lowered.contains(p)) {
                    issues.push(
                        Issue::new(
                            Severity::Warning,
                            "1.1.1",
                            format!("Alt text may be overly descriptive: \"{}\"", alt),
                        )
                        .with_element(snippet(el))
                        .with_suggestion("Describe content/function, not that it's an image"),
                    );
                }
            }
            Some(_) => {}
        }
    }

    issues
}
