//! Core types for audit results.

use serde::{Deserialize, Serialize};

/// Severity levels for accessibility issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// The fixed set of audit rules.
///
/// The set is closed on purpose: the rules and their execution order are
/// part of the observable contract (issue ordering follows rule order,
/// then document order within a rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "images")]
    Images,
    #[serde(rename = "headings")]
    Headings,
    #[serde(rename = "links")]
    Links,
    #[serde(rename = "forms")]
    Forms,
    #[serde(rename = "structure")]
    Structure,
    #[serde(rename = "semantic")]
    Semantic,
    #[serde(rename = "tables")]
    Tables,
    #[serde(rename = "buttons")]
    Buttons,
    #[serde(rename = "language")]
    Language,
    #[serde(rename = "aria")]
    Aria,
}

impl Rule {
    /// All rules in execution order.
    pub const ALL: [Rule; 10] = [
        Rule::Images,
        Rule::Headings,
        Rule::Links,
        Rule::Forms,
        Rule::Structure,
        Rule::Semantic,
        Rule::Tables,
        Rule::Buttons,
        Rule::Language,
        Rule::Aria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Images => "images",
            Rule::Headings => "headings",
            Rule::Links => "links",
            Rule::Forms => "forms",
            Rule::Structure => "structure",
            Rule::Semantic => "semantic",
            Rule::Tables => "tables",
            Rule::Buttons => "buttons",
            Rule::Language => "language",
            Rule::Aria => "aria",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "images" => Some(Rule::Images),
            "headings" => Some(Rule::Headings),
            "links" => Some(Rule::Links),
            "forms" => Some(Rule::Forms),
            "structure" => Some(Rule::Structure),
            "semantic" => Some(Rule::Semantic),
            "tables" => Some(Rule::Tables),
            "buttons" => Some(Rule::Buttons),
            "language" => Some(Rule::Language),
            "aria" => Some(Rule::Aria),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single accessibility issue.
///
/// Immutable once created by a rule. `element` is a truncated snippet of
/// the offending node and may be empty for page-level issues.
/// `line_number` is always 0: no source-position tracking is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub wcag_criterion: String,
    pub message: String,
    pub element: String,
    #[serde(default)]
    pub line_number: usize,
    #[serde(default)]
    pub suggestion: String,
}

impl Issue {
    /// Create an issue with no element snippet attached.
    pub fn new(severity: Severity, wcag: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            wcag_criterion: wcag.to_string(),
            message: message.into(),
            element: String::new(),
            line_number: 0,
            suggestion: String::new(),
        }
    }

    /// Attach an element snippet.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    /// Attach a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }
}

/// Aggregate of one audit run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSummary {
    pub issues: Vec<Issue>,
}

impl AuditSummary {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_round_trip() {
        for s in ["error", "warning", "info"] {
            let sev: Severity = s.parse().unwrap();
            assert_eq!(sev.to_string(), s);
        }
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(Rule::ALL[0], Rule::Images);
        assert_eq!(Rule::ALL[9], Rule::Aria);
        for rule in Rule::ALL {
            assert_eq!(Rule::parse(rule.as_str()), Some(rule));
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary = AuditSummary::new(vec![
            Issue::new(Severity::Error, "1.1.1", "a"),
            Issue::new(Severity::Warning, "1.3.1", "b"),
            Issue::new(Severity::Error, "2.4.6", "c"),
        ]);
        assert_eq!(summary.error_count(), 2);
        assert_eq!(summary.count(Severity::Warning), 1);
        assert_eq!(summary.count(Severity::Info), 0);
        assert!(summary.has_errors());
        assert!(!summary.is_clean());
    }
}
