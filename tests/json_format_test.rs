//! Tests for the JSON report wire format.
//!
//! Every emitted Issue must survive a serialize/parse round trip with
//! identical field values, and the field names are part of the contract.

use std::path::PathBuf;

use a11ycheck::rules::Auditor;
use a11ycheck::Issue;

fn audit_fixture(name: &str) -> Vec<Issue> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name);
    let html = std::fs::read_to_string(path).expect("fixture should exist");
    Auditor::default().audit_html(&html)
}

#[test]
fn test_every_emitted_issue_round_trips() {
    let issues = audit_fixture("inaccessible.html");
    assert!(!issues.is_empty());

    let json = serde_json::to_string_pretty(&issues).unwrap();
    let parsed: Vec<Issue> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), issues.len());
    for (original, round_tripped) in issues.iter().zip(&parsed) {
        assert_eq!(original, round_tripped);
    }
}

#[test]
fn test_report_is_a_json_array_of_objects() {
    let issues = audit_fixture("inaccessible.html");
    let json = serde_json::to_string_pretty(&issues).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let array = value.as_array().expect("report should be an array");
    assert_eq!(array.len(), issues.len());

    for item in array {
        let obj = item.as_object().expect("each issue should be an object");
        for field in [
            "severity",
            "wcag_criterion",
            "message",
            "element",
            "line_number",
            "suggestion",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        let severity = obj["severity"].as_str().unwrap();
        assert!(matches!(severity, "error" | "warning" | "info"));
        assert_eq!(obj["line_number"].as_u64(), Some(0));
    }
}

#[test]
fn test_clean_audit_serializes_to_empty_array() {
    let issues = audit_fixture("accessible.html");
    let json = serde_json::to_string_pretty(&issues).unwrap();
    assert_eq!(json, "[]");
}
