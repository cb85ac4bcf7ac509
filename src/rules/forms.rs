//! Form labeling checks - WCAG 1.3.1, 3.3.2.

use std::collections::HashSet;

use scraper::{Html, Selector};

use super::dom::{non_empty_attr, snippet};
use super::{Issue, Severity};

/// Input types that need no visible label.
const UNLABELED_TYPES: &[&str] = &["hidden", "submit", "button", "reset"];

/// Check that form controls are labeled and fieldsets have legends.
///
/// A label resolves through `label[for=id]`, `aria-label`, or
/// `aria-labelledby`, in that order.
pub fn check_forms(doc: &Html) -> Vec<Issue> {
    let control = Selector::parse("input, select, textarea").expect("valid selector");
    let label = Selector::parse("label").expect("valid selector");
    let fieldset = Selector::parse("fieldset").expect("valid selector");
    let legend = Selector::parse("legend").expect("valid selector");
    let mut issues = Vec::new();

    // for-targets of every label, resolved once per document
    let label_targets: HashSet<&str> = doc
        .select(&label)
        .filter_map(|l| non_empty_attr(l, "for"))
        .collect();

    for el in doc.select(&control) {
        let input_type = el.value().attr("type").unwrap_or("text");
        if UNLABELED_TYPES.contains(&input_type) {
            continue;
        }

        let has_label = non_empty_attr(el, "id")
            .map(|id| label_targets.contains(id))
            .unwrap_or(false);
        let has_aria = non_empty_attr(el, "aria-label").is_some()
            || non_empty_attr(el, "aria-labelledby").is_some();

        if !has_label && !has_aria {
            let name = el.value().attr("name").unwrap_or("unnamed");
            issues.push(
                Issue::new(
                    Severity::Error,
                    "3.3.2",
                    format!("Form input missing label: {}", name),
                )
                .with_element(snippet(el))
                .with_suggestion("Associate a <label> element or add aria-label attribute"),
            );
        }
    }

    for el in doc.select(&fieldset) {
        if el.select(&legend).next().is_none() {
            issues.push(
                Issue::new(Severity::Warning, "1.3.1", "Fieldset missing legend")
                    .with_element(snippet(el))
                    .with_suggestion("Add <legend> to describe the group of form fields"),
            );
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_input_passes() {
        let doc = Html::parse_document(
            "<form><label for=\"email\">Email</label><input type=\"text\" id=\"email\"></form>",
        );
        assert!(check_forms(&doc).is_empty());
    }

    #[test]
    fn test_aria_label_passes() {
        let doc = Html::parse_document("<form><input type=\"text\" aria-label=\"Search\"></form>");
        assert!(check_forms(&doc).is_empty());
    }

    #[test]
    fn test_aria_labelledby_passes() {
        let doc = Html::parse_document(
            "<form><span id=\"q\">Query</span><input type=\"text\" aria-labelledby=\"q\"></form>",
        );
        assert!(check_forms(&doc).is_empty());
    }

    #[test]
    fn test_unlabeled_input_is_error() {
        let doc = Html::parse_document("<form><input type=\"text\" name=\"city\"></form>");
        let issues = check_forms(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "Form input missing label: city");
    }

    #[test]
    fn test_unnamed_input_message() {
        let doc = Html::parse_document("<form><textarea></textarea></form>");
        let issues = check_forms(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Form input missing label: unnamed");
    }

    #[test]
    fn test_hidden_and_buttons_skipped() {
        let doc = Html::parse_document(
            "<form>\
             <input type=\"hidden\" name=\"csrf\">\
             <input type=\"submit\" value=\"Go\">\
             <input type=\"button\" value=\"Do\">\
             <input type=\"reset\" value=\"Clear\">\
             </form>",
        );
        assert!(check_forms(&doc).is_empty());
    }

    #[test]
    fn test_select_needs_label() {
        let doc = Html::parse_document("<form><select name=\"country\"></select></form>");
        let issues = check_forms(&doc);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("country"));
    }

    #[test]
    fn test_fieldset_without_legend_is_warning() {
        let doc = Html::parse_document(
            "<form><fieldset><input type=\"text\" aria-label=\"a\"></fieldset></form>",
        );
        let issues = check_forms(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("legend"));
    }

    #[test]
    fn test_fieldset_with_legend_passes() {
        let doc = Html::parse_document(
            "<form><fieldset><legend>Shipping</legend></fieldset></form>",
        );
        assert!(check_forms(&doc).is_empty());
    }
}
