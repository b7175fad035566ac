//! Decides whether a call expression is a logging call.

use tree_sitter::Node;

use crate::analysis::{CallSite, Expr};

use super::tables::{LOG_METHODS, LOG_PACKAGES};

/// Whether `call` is `pkg.Method(...)` or `pkg.Factory().Method(...)` with
/// `pkg` a known logging library and `Method` a known logging method.
pub fn is_log_call(call: &CallSite, source: &[u8]) -> bool {
    let Expr::Selector { operand, field } = Expr::from_node(call.function, source) else {
        return false;
    };

    if !LOG_METHODS.contains(field) {
        return false;
    }

    match receiver_ident(operand, source) {
        Some(name) => LOG_PACKAGES.contains(name),
        None => false,
    }
}

/// Resolve the receiver to an identifier: either the receiver itself, or
/// the receiver of a single chained factory call (`zap.L()`).
fn receiver_ident<'a>(operand: Node<'a>, source: &'a [u8]) -> Option<&'a str> {
    match Expr::from_node(operand, source) {
        Expr::Ident(name) => Some(name),
        Expr::Call { function, .. } => match Expr::from_node(function, source) {
            Expr::Selector { operand: inner, .. } => match Expr::from_node(inner, source) {
                Expr::Ident(name) => Some(name),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{GoAnalyzer, LanguageAnalyzer};
    use std::path::Path;

    /// Classify the first call in `stmt`.
    fn classify(stmt: &str) -> bool {
        let source = format!("package main\n\nfunc main() {{\n\t{}\n}}\n", stmt);
        let analyzer = GoAnalyzer::new();
        let parsed = analyzer
            .parse(Path::new("test.go"), source.as_bytes())
            .unwrap();
        let calls = analyzer.call_sites(&parsed).unwrap();
        is_log_call(&calls[0], &parsed.source)
    }

    #[test]
    fn test_direct_calls() {
        assert!(classify(r#"log.Println("hello")"#));
        assert!(classify(r#"slog.Info("hello")"#));
        assert!(classify(r#"zap.Error("hello")"#));
    }

    #[test]
    fn test_chained_factory_call() {
        assert!(classify(r#"zap.L().Info("hello")"#));
        assert!(classify(r#"slog.Default().Warn("hello")"#));
    }

    #[test]
    fn test_unknown_receiver_or_method() {
        assert!(!classify(r#"other_lib.Info("Whatever")"#));
        assert!(!classify(r#"fmt.Println("Hello")"#));
        assert!(!classify(r#"log.Sprintf("x")"#));
    }

    #[test]
    fn test_rejected_shapes() {
        // Plain function call, no receiver.
        assert!(!classify(r#"Info("hello")"#));
        // Chain deeper than one level.
        assert!(!classify(r#"zap.L().Named("x").Info("hello")"#));
        // Receiver that is a field, not an identifier.
        assert!(!classify(r#"s.log.Info("hello")"#));
        // Parenthesized receiver.
        assert!(!classify(r#"(log).Print("hello")"#));
        // Factory call without a package receiver.
        assert!(!classify(r#"logger().Info("hello")"#));
    }
}
