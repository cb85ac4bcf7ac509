//! Accessibility rules for parsed HTML documents.

mod aria;
mod auditor;
mod buttons;
mod dom;
mod forms;
mod headings;
mod images;
mod language;
mod links;
mod semantic;
mod structure;
mod tables;
mod types;

pub use aria::check_aria;
pub use auditor::{audit, Auditor};
pub use buttons::check_buttons;
pub use forms::check_forms;
pub use headings::check_headings;
pub use images::check_images;
pub use language::check_language;
pub use links::check_links;
pub use semantic::check_semantic;
pub use structure::check_structure;
pub use tables::check_tables;
pub use types::{AuditSummary, Issue, Rule, Severity};
