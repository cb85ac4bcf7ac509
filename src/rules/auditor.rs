//! Audit runner that executes all rules in their fixed order.

use scraper::Html;

use super::{
    check_aria, check_buttons, check_forms, check_headings, check_images, check_language,
    check_links, check_semantic, check_structure, check_tables, Issue, Rule,
};

impl Rule {
    /// Run this rule against a parsed document.
    pub fn run(&self, doc: &Html) -> Vec<Issue> {
        match self {
            Rule::Images => check_images(doc),
            Rule::Headings => check_headings(doc),
            Rule::Links => check_links(doc),
            Rule::Forms => check_forms(doc),
            Rule::Structure => check_structure(doc),
            Rule::Semantic => check_semantic(doc),
            Rule::Tables => check_tables(doc),
            Rule::Buttons => check_buttons(doc),
            Rule::Language => check_language(doc),
            Rule::Aria => check_aria(doc),
        }
    }
}

/// Runs the full rule set against parsed documents.
///
/// The configured WCAG level is carried for display; rule selection is
/// the same at AA and AAA.
pub struct Auditor {
    wcag_level: String,
}

impl Auditor {
    pub fn new(wcag_level: impl Into<String>) -> Self {
        Self {
            wcag_level: wcag_level.into(),
        }
    }

    pub fn wcag_level(&self) -> &str {
        &self.wcag_level
    }

    /// Audit a parsed document.
    ///
    /// Each invocation starts from an empty collector; issues appear in
    /// rule execution order, then document order within a rule.
    pub fn audit(&self, doc: &Html) -> Vec<Issue> {
        audit(doc)
    }

    /// Parse raw markup and audit it.
    pub fn audit_html(&self, html: &str) -> Vec<Issue> {
        let doc = Html::parse_document(html);
        self.audit(&doc)
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new("AA")
    }
}

/// Run every rule against the document, in order.
pub fn audit(doc: &Html) -> Vec<Issue> {
    Rule::ALL.iter().flat_map(|rule| rule.run(doc)).collect()
}
