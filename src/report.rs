//! Output formatting for audit and contrast results.
//!
//! Two formats for the auditor:
//! - Text: severity-grouped report for human readability
//! - JSON: a pretty-printed array of Issue objects
//!
//! The contrast checker renders a single result with a fixed WCAG
//! reference table.

use colored::*;

use crate::contrast::{AdjustmentSuggestions, ContrastResult, WcagLevel};
use crate::rules::{AuditSummary, Issue, Severity};

const RULE_WIDTH: usize = 60;

// =============================================================================
// Audit report
// =============================================================================

/// Write audit results as human-readable text, grouped by severity.
pub fn write_text(filename: &str, issues: &[Issue]) {
    if issues.is_empty() {
        if filename.is_empty() {
            println!("{} No accessibility issues found!", "✓".green());
        } else {
            println!("{} No accessibility issues found in {}!", "✓".green(), filename);
        }
        return;
    }

    println!();
    if filename.is_empty() {
        println!("{}", "Accessibility Audit Results".bold());
    } else {
        println!("{} {}", "Accessibility Audit Results for".bold(), filename);
    }
    println!("{}", "=".repeat(RULE_WIDTH));

    let summary = AuditSummary::new(issues.to_vec());
    println!(
        "\nSummary: {} errors, {} warnings, {} info",
        summary.error_count(),
        summary.count(Severity::Warning),
        summary.count(Severity::Info),
    );

    let sections = [
        (Severity::Error, "ERRORS:".red().bold()),
        (Severity::Warning, "WARNINGS:".yellow().bold()),
        (Severity::Info, "INFO:".blue().bold()),
    ];

    for (severity, header) in sections {
        let group: Vec<&Issue> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }

        println!("\n{}", header);
        println!("{}", "-".repeat(RULE_WIDTH));
        for issue in group {
            println!("\nWCAG {}: {}", issue.wcag_criterion, issue.message);
            if !issue.element.is_empty() {
                println!("  Element: {}", issue.element.dimmed());
            }
            if !issue.suggestion.is_empty() {
                println!("  {} {}", "→".cyan(), issue.suggestion);
            }
        }
    }
}

/// Write audit results as a JSON array of Issue objects.
pub fn write_json(issues: &[Issue]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(issues)?;
    println!("{}", json);
    Ok(())
}

/// Separator printed between per-file text reports in a directory run.
pub fn write_file_separator() {
    println!("\n{}\n", "=".repeat(RULE_WIDTH));
}

/// Closing summary for a directory run.
pub fn write_run_summary(files_checked: usize, total_errors: usize) {
    println!("\nAudit complete: {} files checked", files_checked);
    if total_errors > 0 {
        println!(
            "{} Total errors found: {}",
            "⚠".yellow(),
            total_errors.to_string().red()
        );
    } else {
        println!("{} No critical errors found", "✓".green());
    }
}

// =============================================================================
// Contrast report
// =============================================================================

fn check_mark(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Render a contrast check with the fixed WCAG 2.1 reference table.
pub fn write_contrast(result: &ContrastResult) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "WCAG COLOR CONTRAST CHECK".bold());
    println!("{}", "=".repeat(RULE_WIDTH));

    println!("\nForeground: {}", result.foreground);
    println!("Background: {}", result.background);

    println!("\nContrast Ratio: {}", format!("{:.2}:1", result.ratio).bold());
    println!(
        "Required Ratio: {:.1}:1 (Level {}, {} text)",
        result.required,
        result.level,
        if result.large_text { "Large" } else { "Normal" },
    );

    if result.passes {
        println!("\nStatus: {} {}", "✓".green(), "PASS".green().bold());
    } else {
        println!("\nStatus: {} {}", "✗".red(), "FAIL".red().bold());
    }
    println!("Grade: {}", result.grade);

    println!("\n{}", "-".repeat(RULE_WIDTH));
    println!("WCAG 2.1 Requirements:");
    println!("  Normal text (< 18pt or < 14pt bold):");
    println!("    Level AA:  4.5:1 {}", check_mark(result.ratio >= 4.5));
    println!("    Level AAA: 7.0:1 {}", check_mark(result.ratio >= 7.0));
    println!("  Large text (>= 18pt or >= 14pt bold):");
    println!("    Level AA:  3.0:1 {}", check_mark(result.ratio >= 3.0));
    println!("    Level AAA: 4.5:1 {}", check_mark(result.ratio >= 4.5));

    if !result.passes {
        println!("\n{}", "-".repeat(RULE_WIDTH));
        println!("Suggestions:");
        if result.ratio < 3.0 {
            println!("  • Contrast is very low - consider a completely different color");
        } else if result.ratio < 4.5 {
            if result.large_text {
                println!("  • Acceptable for large text only (18pt+ or 14pt+ bold)");
            } else {
                println!("  • Darken the foreground or lighten the background");
                println!("  • Or use only for large text (18pt+ or 14pt+ bold)");
            }
        } else if result.ratio < 7.0 && result.level == WcagLevel::AAA {
            println!("  • Meets AA but not AAA - consider increasing contrast for AAA");
        }
    }

    println!("{}\n", "=".repeat(RULE_WIDTH));
}

/// Render the fixed-step adjustment search results.
pub fn write_adjustments(suggestions: &AdjustmentSuggestions) {
    println!("\nSuggestions to achieve {}:1 ratio:", suggestions.target);
    println!("{}", "-".repeat(RULE_WIDTH));

    if let Some(adj) = &suggestions.darken_foreground {
        println!(
            "{} Darken foreground to {} → {:.2}:1",
            "✓".green(),
            adj.color,
            adj.ratio
        );
    }
    if let Some(adj) = &suggestions.lighten_background {
        println!(
            "{} Lighten background to {} → {:.2}:1",
            "✓".green(),
            adj.color,
            adj.ratio
        );
    }
    if suggestions.darken_foreground.is_none() && suggestions.lighten_background.is_none() {
        println!("No single-direction adjustment reaches the target ratio");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_json_round_trip() {
        let issues = vec![
            Issue::new(Severity::Error, "1.1.1", "Image missing alt attribute")
                .with_element("<img src=\"a.png\">")
                .with_suggestion("Add alt text"),
            Issue::new(Severity::Warning, "2.4.6", "No headings found"),
        ];

        let json = serde_json::to_string_pretty(&issues).unwrap();
        let parsed: Vec<Issue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, issues);
    }

    #[test]
    fn test_json_wire_field_names() {
        let issue = Issue::new(Severity::Error, "3.1.1", "m");
        let value = serde_json::to_value(&issue).unwrap();
        let obj = value.as_object().unwrap();
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
        assert_eq!(obj["severity"], "error");
        assert_eq!(obj["line_number"], 0);
    }
}
