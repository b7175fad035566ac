//! Log-call linting.
//!
//! A call flows through three stages: the classifier decides whether it is
//! a logging call, the extractor pulls out the message or argument list,
//! and the validators report rule violations through a `Reporter`.

mod classify;
mod engine;
mod extract;
mod runner;
mod suppress;
mod tables;
mod types;
mod validate;

pub use classify::is_log_call;
pub use engine::{check_call, check_file, FileReporter, Reporter};
pub use extract::{extract_payload, Payload};
pub use runner::Runner;
pub use suppress::{
    filter_suppressed, matches_suppression, parse_suppressions, SuppressedDiagnostic,
    Suppression, SuppressionType,
};
pub use tables::{is_sensitive_name, LOG_METHODS, LOG_PACKAGES, SENSITIVE_NAMES};
pub use types::{Diagnostic, LintResult, LintRule};
pub use validate::{
    check_english, check_lower_case, check_no_special_chars, check_sensitive,
    has_non_letter_symbols,
};
