//! Command-line interface for a11ycheck.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use scraper::Html;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::contrast::{self, WcagLevel};
use crate::report;
use crate::rules::{Auditor, Issue, Severity};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Markup extensions collected when auditing a directory.
const MARKUP_EXTENSIONS: &[&str] = &["html", "htm"];

/// WCAG accessibility checks for web projects.
///
/// a11ycheck provides two independent checks: a static HTML auditor
/// that flags WCAG violations (missing alt text, broken heading
/// hierarchy, unlabeled form inputs, missing landmarks, improper ARIA
/// usage), and a color-contrast calculator that grades a foreground/
/// background pair against WCAG AA and AAA thresholds.
#[derive(Parser)]
#[command(name = "a11ycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit HTML files for WCAG violations
    Audit(AuditArgs),
    /// Check color contrast against WCAG thresholds
    Contrast(ContrastArgs),
}

/// Arguments for the audit command.
#[derive(Parser)]
pub struct AuditArgs {
    /// Path to audit (HTML file or directory)
    pub path: PathBuf,

    /// WCAG conformance level to report against
    #[arg(long = "wcag-level", default_value = "AA")]
    pub wcag_level: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for the contrast command.
#[derive(Parser)]
pub struct ContrastArgs {
    /// Foreground color (hex, rgb(), or named)
    pub foreground: String,

    /// Background color (hex, rgb(), or named)
    pub background: String,

    /// WCAG conformance level: AA or AAA
    #[arg(short, long, default_value = "AA")]
    pub level: String,

    /// Apply the relaxed large-text thresholds (18pt+, or 14pt+ bold)
    #[arg(long)]
    pub large_text: bool,

    /// Search for color adjustments when the check fails
    #[arg(long)]
    pub suggest: bool,
}

/// Collect markup files under a directory, recursively.
///
/// Unreadable entries (permission errors, dangling symlinks) are reported
/// to stderr and counted, without stopping the walk.
fn collect_markup_files(root: &Path) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut failures = 0;

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories, but never the walk root itself
            let name = e.file_name().to_string_lossy();
            e.depth() == 0 || !(e.file_type().is_dir() && name.starts_with('.'))
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Error reading directory entry: {}", e);
                failures += 1;
                continue;
            }
        };
        if entry.file_type().is_file() {
            let ext = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            if MARKUP_EXTENSIONS.contains(&ext) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    // Deterministic report order regardless of directory iteration order.
    files.sort();
    (files, failures)
}

/// Read, parse, and audit a single file.
fn audit_file(auditor: &Auditor, path: &Path) -> anyhow::Result<Vec<Issue>> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let doc = Html::parse_document(&html);
    Ok(auditor.audit(&doc))
}

/// Short display name for a file, mirroring per-file report headers.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the audit command.
pub fn run_audit(args: &AuditArgs) -> anyhow::Result<i32> {
    if args.format != "text" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'text' or 'json'",
            args.format
        );
        return Ok(EXIT_FAILED);
    }

    if !args.path.exists() {
        eprintln!("Error: Path not found: {}", args.path.display());
        return Ok(EXIT_FAILED);
    }

    let auditor = Auditor::new(args.wcag_level.as_str());

    if args.path.is_file() {
        let errors = audit_one(&auditor, &args.path, &args.format);
        return Ok(if errors > 0 { EXIT_FAILED } else { EXIT_SUCCESS });
    }

    let (files, walk_failures) = collect_markup_files(&args.path);
    if files.is_empty() && walk_failures == 0 {
        println!("No HTML files found in {}", args.path.display());
        return Ok(EXIT_SUCCESS);
    }

    if args.format == "text" {
        println!(
            "Found {} HTML file(s) to audit (WCAG 2.1 Level {})\n",
            files.len(),
            auditor.wcag_level()
        );
    }

    // Audits are independent per file; only the rendering is ordered.
    let results: Vec<(PathBuf, anyhow::Result<Vec<Issue>>)> = files
        .par_iter()
        .map(|f| (f.clone(), audit_file(&auditor, f)))
        .collect();

    let mut total_errors = walk_failures;
    for (path, result) in &results {
        total_errors += render_result(path, result, &args.format);
        if args.format == "text" {
            report::write_file_separator();
        }
    }

    report::write_run_summary(files.len(), total_errors);
    Ok(if total_errors > 0 { EXIT_FAILED } else { EXIT_SUCCESS })
}

/// Audit and render a single file, returning its error count.
fn audit_one(auditor: &Auditor, path: &Path, format: &str) -> usize {
    let result = audit_file(auditor, path);
    render_result(path, &result, format)
}

/// Render one file's outcome; a read or parse failure counts as one error
/// for that file without aborting the batch.
fn render_result(path: &Path, result: &anyhow::Result<Vec<Issue>>, format: &str) -> usize {
    match result {
        Ok(issues) => {
            if format == "json" {
                // Rendering an in-memory issue list cannot fail midway.
                if let Err(e) = report::write_json(issues) {
                    eprintln!("Error rendering report for {}: {}", path.display(), e);
                    return 1;
                }
            } else {
                report::write_text(&display_name(path), issues);
            }
            issues.iter().filter(|i| i.severity == Severity::Error).count()
        }
        Err(e) => {
            eprintln!("Error auditing {}: {}", path.display(), e);
            1
        }
    }
}

/// Run the contrast command.
pub fn run_contrast(args: &ContrastArgs) -> anyhow::Result<i32> {
    let level: WcagLevel = match args.level.parse() {
        Ok(l) => l,
        Err(_) => {
            eprintln!(
                "Error: invalid level {:?}, must be 'AA' or 'AAA'",
                args.level
            );
            return Ok(EXIT_ERROR);
        }
    };

    let result = match contrast::check_compliance(
        &args.foreground,
        &args.background,
        level,
        args.large_text,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    report::write_contrast(&result);

    if args.suggest && !result.passes {
        let suggestions =
            contrast::suggest_adjustments(&args.foreground, &args.background, result.required)?;
        report::write_adjustments(&suggestions);
    }

    Ok(if result.passes { EXIT_SUCCESS } else { EXIT_FAILED })
}
