//! Core types for lint results.

use serde::{Deserialize, Serialize};

/// The four log-message rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LintRule {
    #[serde(rename = "lower_case")]
    LowerCase,
    #[serde(rename = "english")]
    English,
    #[serde(rename = "special_chars")]
    SpecialChars,
    #[serde(rename = "sensitive_data")]
    SensitiveData,
}

impl LintRule {
    pub const ALL: [LintRule; 4] = [
        LintRule::LowerCase,
        LintRule::English,
        LintRule::SpecialChars,
        LintRule::SensitiveData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LintRule::LowerCase => "lower_case",
            LintRule::English => "english",
            LintRule::SpecialChars => "special_chars",
            LintRule::SensitiveData => "sensitive_data",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lower_case" => Some(LintRule::LowerCase),
            "english" => Some(LintRule::English),
            "special_chars" => Some(LintRule::SpecialChars),
            "sensitive_data" => Some(LintRule::SensitiveData),
            _ => None,
        }
    }

    /// The fixed diagnostic text. The message alone identifies the rule.
    pub fn message(&self) -> &'static str {
        match self {
            LintRule::LowerCase => "log message must not contain upper case letters",
            LintRule::English => "log message must consist only of English letters",
            LintRule::SpecialChars => "log message must not contain special symbols",
            LintRule::SensitiveData => "log message must not contain important data",
        }
    }
}

impl std::fmt::Display for LintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding, positioned in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: LintRule,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    /// Last line of the reported call; equals `line` for one-line calls.
    #[serde(default)]
    pub end_line: usize,
}

impl Diagnostic {
    pub fn new(rule: LintRule, file: &str, line: usize, column: usize) -> Self {
        Self {
            rule,
            message: rule.message().to_string(),
            file: file.to_string(),
            line,
            column,
            end_line: line,
        }
    }

    /// Extend the diagnostic over a call that spans several lines.
    pub fn with_end_line(mut self, end_line: usize) -> Self {
        self.end_line = end_line.max(self.line);
        self
    }

    /// Whether `line` falls within the reported call.
    pub fn covers_line(&self, line: usize) -> bool {
        (self.line..=self.end_line.max(self.line)).contains(&line)
    }
}

/// Results of a lint run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics silenced by inline comments
    #[serde(default)]
    pub suppressed: Vec<super::SuppressedDiagnostic>,
    /// Number of files scanned
    pub scanned: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: LintResult) {
        self.diagnostics.extend(other.diagnostics);
        self.suppressed.extend(other.suppressed);
        self.scanned += other.scanned;
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of active diagnostics for a rule.
    pub fn count(&self, rule: LintRule) -> usize {
        self.diagnostics.iter().filter(|d| d.rule == rule).count()
    }

    /// Sort diagnostics by file, then position, then rule.
    pub fn sort(&mut self) {
        fn key(d: &Diagnostic) -> (&str, usize, usize, LintRule) {
            (&d.file, d.line, d.column, d.rule)
        }
        self.diagnostics.sort_by(|a, b| key(a).cmp(&key(b)));
        self.suppressed
            .sort_by(|a, b| key(&a.diagnostic).cmp(&key(&b.diagnostic)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_round_trips_through_name() {
        for rule in LintRule::ALL {
            assert_eq!(LintRule::parse(rule.as_str()), Some(rule));
        }
        assert_eq!(LintRule::parse("mock_data"), None);
    }

    #[test]
    fn test_rule_serde_name_matches_as_str() {
        let json = serde_json::to_string(&LintRule::SensitiveData).unwrap();
        assert_eq!(json, "\"sensitive_data\"");
    }

    #[test]
    fn test_sort_and_count() {
        let mut result = LintResult::new();
        result.diagnostics.push(Diagnostic::new(LintRule::English, "b.go", 1, 1));
        result.diagnostics.push(Diagnostic::new(LintRule::LowerCase, "a.go", 9, 2));
        result.diagnostics.push(Diagnostic::new(LintRule::LowerCase, "a.go", 3, 2));
        result.sort();

        assert_eq!(result.diagnostics[0].line, 3);
        assert_eq!(result.diagnostics[2].file, "b.go");
        assert_eq!(result.count(LintRule::LowerCase), 2);
        assert_eq!(result.count(LintRule::SensitiveData), 0);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_covers_line() {
        let single = Diagnostic::new(LintRule::LowerCase, "a.go", 4, 2);
        assert!(single.covers_line(4));
        assert!(!single.covers_line(5));

        let multi = single.with_end_line(6);
        assert!(multi.covers_line(5));
        assert!(multi.covers_line(6));
        assert!(!multi.covers_line(3));
        assert!(!multi.covers_line(7));
    }
}
