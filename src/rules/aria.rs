//! ARIA role usage checks - WCAG 4.1.2.

use scraper::{Html, Selector};

use super::dom::snippet;
use super::{Issue, Severity};

/// Native element equivalent for roles that should not be hand-rolled.
fn native_equivalent(role: &str) -> Option<&'static str> {
    match role {
        "button" => Some("<button>"),
        "link" => Some("<a href=\"\">"),
        "checkbox" => Some("<input type=\"checkbox\">"),
        "radio" => Some("<input type=\"radio\">"),
        "textbox" => Some("<input type=\"text\">"),
        _ => None,
    }
}

/// Flag ARIA roles with a built-in native equivalent.
pub fn check_aria(doc: &Html) -> Vec<Issue> {
    let with_role = Selector::parse("[role]").expect("valid selector");
    let mut issues = Vec::new();

    for el in doc.select(&with_role) {
        let role = el.value().attr("role").unwrap_or("");
        if let Some(native) = native_equivalent(role) {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "4.1.2",
                    format!("ARIA role=\"{}\" used - native HTML preferred", role),
                )
                .with_element(snippet(el))
                .with_suggestion(format!("Use {} instead of ARIA role", native)),
            );
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discouraged_role_is_warning() {
        let doc = Html::parse_document("<body><span role=\"link\">terms</span></body>");
        let issues = check_aria(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("role=\"link\""));
        assert!(issues[0].suggestion.contains("<a href=\"\">"));
    }

    #[test]
    fn test_landmark_roles_pass() {
        let doc = Html::parse_document(
            "<body><div role=\"main\"></div><div role=\"navigation\"></div></body>",
        );
        assert!(check_aria(&doc).is_empty());
    }

    #[test]
    fn test_each_discouraged_role_names_native_control() {
        for (role, native) in [
            ("button", "<button>"),
            ("checkbox", "<input type=\"checkbox\">"),
            ("radio", "<input type=\"radio\">"),
            ("textbox", "<input type=\"text\">"),
        ] {
            let doc =
                Html::parse_document(&format!("<body><div role=\"{}\"></div></body>", role));
            let issues = check_aria(&doc);
            assert_eq!(issues.len(), 1, "role {} should warn", role);
            assert!(issues[0].suggestion.contains(native));
        }
    }
}
