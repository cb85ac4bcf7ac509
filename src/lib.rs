//! a11ycheck - WCAG accessibility checks.
//!
//! Two independent, deterministic checks:
//!
//! - A static HTML auditor that walks a parsed document tree and flags
//!   WCAG violations: missing alt text, broken heading hierarchy,
//!   unlabeled form inputs, missing landmarks, improper ARIA usage.
//! - A color-contrast calculator that computes the WCAG relative-
//!   luminance contrast ratio between two colors and grades it against
//!   AA/AAA thresholds.
//!
//! # Architecture
//!
//! - `rules`: the fixed, ordered rule set and the audit runner
//! - `color`: color-literal parsing and sRGB luminance math
//! - `contrast`: contrast grading and adjustment suggestions
//! - `report`: output formatting (text, JSON)
//! - `cli`: drivers, file collection, exit codes

pub mod cli;
pub mod color;
pub mod contrast;
pub mod report;
pub mod rules;

pub use color::{contrast_ratio, parse_color, relative_luminance, ColorError, Rgb};
pub use contrast::{
    check_compliance, suggest_adjustments, ContrastResult, Grade, WcagLevel,
};
pub use rules::{audit, AuditSummary, Auditor, Issue, Rule, Severity};
