//! Shared helpers for walking the parsed document tree.

use scraper::{ElementRef, Selector};

/// Maximum length of an element snippet attached to an issue.
const SNIPPET_LEN: usize = 100;

/// Serialize an element and truncate it for display.
pub fn snippet(el: ElementRef) -> String {
    el.html().chars().take(SNIPPET_LEN).collect()
}

/// Concatenated text content of an element, trimmed.
pub fn trimmed_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Whether the element contains an `img` descendant.
pub fn has_embedded_image(el: ElementRef) -> bool {
    let img = Selector::parse("img").expect("valid selector");
    el.select(&img).next().is_some()
}

/// Attribute value, treating an empty string as absent.
///
/// Most attribute checks in the audit follow this convention: `lang=""`
/// is as good as no `lang` at all.
pub fn non_empty_attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).filter(|v| !v.is_empty())
}
