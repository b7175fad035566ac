//! Inline suppression of diagnostics via comments.
//!
//! Supports suppression comments like:
//! - `// loglint:ignore <rule> - <reason>`
//! - `// loglint:ignore-next-line <rule> - <reason>`
//! - `// loglint:ignore-file <rule> - <reason>`

use regex::Regex;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::analysis::ParsedFile;

use super::{Diagnostic, LintRule};

/// How a suppression applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuppressionType {
    /// Applies to the same line
    Line,
    /// Applies to the next line
    NextLine,
    /// Applies to the entire file
    File,
}

/// An inline suppression directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suppression {
    /// Rule to suppress (e.g., "sensitive_data") or "*" for all
    pub rule: String,
    /// Human-readable reason
    pub reason: String,
    /// File containing the suppression
    pub file: String,
    /// Line number (0 for file-level)
    pub line: usize,
    /// How the suppression applies
    pub suppression_type: SuppressionType,
}

/// A diagnostic that was suppressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressedDiagnostic {
    pub diagnostic: Diagnostic,
    pub suppression: Suppression,
}

lazy_static::lazy_static! {
    static ref LINE_COMMENT: Regex =
        Regex::new(r"^//\s*loglint:(ignore(?:-file|-next-line)?)\s+(\S+)\s*(?:-\s*(.*))?")
            .unwrap();
    static ref BLOCK_COMMENT: Regex = Regex::new(
        r"^/\*\s*loglint:(ignore(?:-file|-next-line)?)\s+(\S+)\s*(?:-\s*(.*?))?\s*\*/"
    )
    .unwrap();
}

/// Parse suppression directives from the comments of a parsed Go file.
///
/// Only comment nodes are read; directive text inside a string literal is
/// message content, not a directive.
pub fn parse_suppressions(file_path: &str, parsed: &ParsedFile) -> Vec<Suppression> {
    let root = parsed.tree.root_node();

    // File-level suppressions are only honoured before the first declaration.
    let header_end = root
        .named_children(&mut root.walk())
        .find(|n| n.kind() != "comment")
        .map(|n| n.start_byte())
        .unwrap_or(usize::MAX);

    comment_nodes(root)
        .into_iter()
        .filter_map(|comment| {
            let text = parsed.node_text(comment);
            let caps = LINE_COMMENT
                .captures(text)
                .or_else(|| BLOCK_COMMENT.captures(text))?;

            let directive = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let rule = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let reason = caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            let suppression_type = match directive {
                "ignore-file" if comment.end_byte() <= header_end => SuppressionType::File,
                "ignore-next-line" => SuppressionType::NextLine,
                // Trailing code: covers this line. Alone on its line: the next one.
                "ignore" if has_code_before(parsed, comment) => SuppressionType::Line,
                "ignore" => SuppressionType::NextLine,
                _ => return None,
            };

            let line = match suppression_type {
                SuppressionType::File => 0,
                SuppressionType::Line => comment.start_position().row + 1,
                SuppressionType::NextLine => comment.end_position().row + 1,
            };

            Some(Suppression {
                rule: rule.to_string(),
                reason,
                file: file_path.to_string(),
                line,
                suppression_type,
            })
        })
        .collect()
}

/// Every comment node under `root`, in document order.
fn comment_nodes(root: Node<'_>) -> Vec<Node<'_>> {
    let mut comments = Vec::new();
    let mut cursor = root.walk();

    'walk: loop {
        let node = cursor.node();
        if node.kind() == "comment" {
            comments.push(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    comments
}

/// Whether anything other than whitespace precedes `comment` on its line.
fn has_code_before(parsed: &ParsedFile, comment: Node) -> bool {
    let start = comment.start_byte();
    let line_start = parsed.source[..start]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    !parsed.source[line_start..start]
        .iter()
        .all(u8::is_ascii_whitespace)
}

/// Check if a diagnostic matches a suppression.
pub fn matches_suppression(diagnostic: &Diagnostic, suppression: &Suppression) -> bool {
    if diagnostic.file != suppression.file {
        return false;
    }

    if suppression.rule != "*" && LintRule::parse(&suppression.rule) != Some(diagnostic.rule) {
        return false;
    }

    match suppression.suppression_type {
        SuppressionType::File => true,
        SuppressionType::Line => diagnostic.covers_line(suppression.line),
        SuppressionType::NextLine => diagnostic.covers_line(suppression.line + 1),
    }
}

/// Separate diagnostics into active and suppressed.
pub fn filter_suppressed(
    diagnostics: Vec<Diagnostic>,
    suppressions: &[Suppression],
) -> (Vec<Diagnostic>, Vec<SuppressedDiagnostic>) {
    let mut active = Vec::new();
    let mut suppressed = Vec::new();

    for diagnostic in diagnostics {
        match suppressions
            .iter()
            .find(|s| matches_suppression(&diagnostic, s))
        {
            Some(suppression) => suppressed.push(SuppressedDiagnostic {
                diagnostic,
                suppression: suppression.clone(),
            }),
            None => active.push(diagnostic),
        }
    }

    (active, suppressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{GoAnalyzer, LanguageAnalyzer};
    use crate::lint::{check_file, FileReporter};
    use std::path::Path;

    fn parse(source: &str) -> ParsedFile {
        GoAnalyzer::new()
            .parse(Path::new("main.go"), source.as_bytes())
            .unwrap()
    }

    fn suppressions_in(source: &str) -> Vec<Suppression> {
        parse_suppressions("main.go", &parse(source))
    }

    /// Lint `source` and split the findings by the inline directives.
    fn lint_with_suppressions(source: &str) -> (Vec<Diagnostic>, Vec<SuppressedDiagnostic>) {
        let parsed = parse(source);
        let mut reporter = FileReporter::new("main.go");
        check_file(&GoAnalyzer::new(), &parsed, &mut reporter).unwrap();
        let suppressions = parse_suppressions("main.go", &parsed);
        filter_suppressed(reporter.into_diagnostics(), &suppressions)
    }

    #[test]
    fn test_parse_file_and_line_suppressions() {
        let source = r#"// loglint:ignore-file special_chars - Generated messages
package main

func main() {
    log.Print("Done!") // loglint:ignore lower_case - Proper noun
}
"#;
        let suppressions = suppressions_in(source);
        assert_eq!(suppressions.len(), 2);

        assert_eq!(suppressions[0].suppression_type, SuppressionType::File);
        assert_eq!(suppressions[0].rule, "special_chars");
        assert_eq!(suppressions[0].reason, "Generated messages");

        assert_eq!(suppressions[1].suppression_type, SuppressionType::Line);
        assert_eq!(suppressions[1].line, 5);
    }

    #[test]
    fn test_file_suppression_after_code_is_ignored() {
        let source = "package main\n\n// loglint:ignore-file *\n";
        assert!(suppressions_in(source).is_empty());
    }

    #[test]
    fn test_parse_next_line() {
        let source = r#"package main

func main() {
    // loglint:ignore-next-line sensitive_data - Hashed value
    slog.Info("stored", password)
    // loglint:ignore english
    slog.Info("ok")
}
"#;
        let suppressions = suppressions_in(source);
        assert_eq!(suppressions.len(), 2);
        assert_eq!(suppressions[0].suppression_type, SuppressionType::NextLine);
        assert_eq!(suppressions[0].line, 4);
        // Bare `ignore` alone on a line behaves like ignore-next-line.
        assert_eq!(suppressions[1].suppression_type, SuppressionType::NextLine);
        assert_eq!(suppressions[1].line, 6);
        assert_eq!(suppressions[1].reason, "");
    }

    #[test]
    fn test_block_comment() {
        let source = r#"package main

func main() {
    log.Print("Hi") /* loglint:ignore lower_case - greeting */
}
"#;
        let suppressions = suppressions_in(source);
        assert_eq!(suppressions.len(), 1);
        assert_eq!(suppressions[0].reason, "greeting");
        assert_eq!(suppressions[0].suppression_type, SuppressionType::Line);
        assert_eq!(suppressions[0].line, 4);
    }

    #[test]
    fn test_directive_inside_string_is_not_a_suppression() {
        let source = r#"package main

func main() {
    log.Print("Done! // loglint:ignore * - x")
    log.Print(`/* loglint:ignore lower_case */`)
}
"#;
        assert!(suppressions_in(source).is_empty());

        let (active, suppressed) = lint_with_suppressions(source);
        assert!(suppressed.is_empty());
        let rules: Vec<_> = active.iter().map(|d| (d.line, d.rule)).collect();
        assert_eq!(
            rules,
            vec![
                (4, LintRule::LowerCase),
                (4, LintRule::SpecialChars),
                (5, LintRule::SpecialChars),
            ]
        );
    }

    #[test]
    fn test_line_suppression_inside_multi_line_call() {
        let source = r#"package main

func main() {
    log.Printf(
        "Bad", // loglint:ignore lower_case
        v,
    )
}
"#;
        let (active, suppressed) = lint_with_suppressions(source);
        assert!(active.is_empty(), "unexpected: {:?}", active);
        assert_eq!(suppressed.len(), 1);
        assert_eq!(suppressed[0].diagnostic.line, 4);
        assert_eq!(suppressed[0].suppression.line, 5);
    }

    #[test]
    fn test_next_line_suppression_before_multi_line_call() {
        let source = r#"package main

func main() {
    // loglint:ignore-next-line lower_case
    log.Printf(
        "Bad",
        v,
    )
    log.Print("Also bad")
}
"#;
        let (active, suppressed) = lint_with_suppressions(source);
        assert_eq!(suppressed.len(), 1);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].line, 9);
    }

    #[test]
    fn test_matches_suppression() {
        let diagnostic = Diagnostic::new(LintRule::SensitiveData, "main.go", 5, 2);

        let file_level = Suppression {
            rule: "sensitive_data".to_string(),
            reason: String::new(),
            file: "main.go".to_string(),
            line: 0,
            suppression_type: SuppressionType::File,
        };
        assert!(matches_suppression(&diagnostic, &file_level));

        let next_line = Suppression {
            line: 4,
            suppression_type: SuppressionType::NextLine,
            ..file_level.clone()
        };
        assert!(matches_suppression(&diagnostic, &next_line));

        let wrong_rule = Suppression {
            rule: "english".to_string(),
            ..file_level.clone()
        };
        assert!(!matches_suppression(&diagnostic, &wrong_rule));

        let unknown_rule = Suppression {
            rule: "no_such_rule".to_string(),
            ..file_level.clone()
        };
        assert!(!matches_suppression(&diagnostic, &unknown_rule));

        let other_file = Suppression {
            file: "other.go".to_string(),
            ..file_level.clone()
        };
        assert!(!matches_suppression(&diagnostic, &other_file));

        let wildcard = Suppression {
            rule: "*".to_string(),
            ..file_level
        };
        assert!(matches_suppression(&diagnostic, &wildcard));
    }

    #[test]
    fn test_filter_suppressed() {
        let diagnostics = vec![
            Diagnostic::new(LintRule::LowerCase, "main.go", 3, 2),
            Diagnostic::new(LintRule::LowerCase, "main.go", 7, 2),
        ];
        let suppressions = vec![Suppression {
            rule: "lower_case".to_string(),
            reason: "acronym".to_string(),
            file: "main.go".to_string(),
            line: 3,
            suppression_type: SuppressionType::Line,
        }];

        let (active, suppressed) = filter_suppressed(diagnostics, &suppressions);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].line, 7);
        assert_eq!(suppressed.len(), 1);
        assert_eq!(suppressed[0].suppression.reason, "acronym");
    }
}
