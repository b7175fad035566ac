//! Per-call rule engine: classify, extract, validate, report.
//!
//! The engine keeps no state between calls. Calls that are not logging
//! calls, or whose payload cannot be determined statically, are skipped
//! without a report.

use tracing::trace;

use crate::analysis::{CallSite, LanguageAnalyzer, ParsedFile, Span};

use super::classify::is_log_call;
use super::extract::extract_payload;
use super::validate::{
    check_english, check_lower_case, check_no_special_chars, check_sensitive,
    has_non_letter_symbols,
};
use super::{Diagnostic, LintRule};

/// Receives one report per failed rule.
pub trait Reporter {
    fn report(&mut self, span: Span, rule: LintRule);
}

impl<F: FnMut(Span, LintRule)> Reporter for F {
    fn report(&mut self, span: Span, rule: LintRule) {
        self(span, rule)
    }
}

/// Collects reports for one file as positioned diagnostics.
pub struct FileReporter {
    file: String,
    diagnostics: Vec<Diagnostic>,
}

impl FileReporter {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            diagnostics: Vec::new(),
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for FileReporter {
    fn report(&mut self, span: Span, rule: LintRule) {
        let diagnostic = Diagnostic::new(rule, &self.file, span.start_line, span.start_col)
            .with_end_line(span.end_line);
        self.diagnostics.push(diagnostic);
    }
}

/// Check a single call site.
pub fn check_call<R: Reporter + ?Sized>(call: &CallSite, source: &[u8], reporter: &mut R) {
    if !is_log_call(call, source) {
        return;
    }

    let Some(payload) = extract_payload(call, source) else {
        return;
    };

    let span = call.span();
    trace!(line = span.start_line, col = span.start_col, "checking log call");

    if let Some(msg) = payload.message(source) {
        if !check_lower_case(&msg) {
            reporter.report(span, LintRule::LowerCase);
        }
        if !check_english(&msg) {
            reporter.report(span, LintRule::English);
        }
        // Letters outside a-z are already covered by the two rules above.
        if !check_no_special_chars(&msg) && has_non_letter_symbols(&msg) {
            reporter.report(span, LintRule::SpecialChars);
        }
    }

    if !check_sensitive(payload.trailing_args(), source) {
        reporter.report(span, LintRule::SensitiveData);
    }
}

/// Check every call site of a parsed file.
pub fn check_file<R: Reporter + ?Sized>(
    analyzer: &dyn LanguageAnalyzer,
    parsed: &ParsedFile,
    reporter: &mut R,
) -> anyhow::Result<()> {
    for call in analyzer.call_sites(parsed)? {
        check_call(&call, &parsed.source, reporter);
    }
    Ok(())
}
