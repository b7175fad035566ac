//! Tagged view over the Go expression nodes the lint engine cares about.

use tree_sitter::Node;

use super::unquote;

/// Kind tag of a Go basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    /// `"..."`
    String,
    /// `` `...` ``
    RawString,
    Rune,
    Int,
    Float,
    Imaginary,
}

impl LitKind {
    fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "interpreted_string_literal" => Some(LitKind::String),
            "raw_string_literal" => Some(LitKind::RawString),
            "rune_literal" => Some(LitKind::Rune),
            "int_literal" => Some(LitKind::Int),
            "float_literal" => Some(LitKind::Float),
            "imaginary_literal" => Some(LitKind::Imaginary),
            _ => None,
        }
    }

    /// Both Go string literal forms.
    pub fn is_string(&self) -> bool {
        matches!(self, LitKind::String | LitKind::RawString)
    }
}

/// An expression node classified by shape.
#[derive(Debug, Clone)]
pub enum Expr<'a> {
    /// `function(...)`; arguments are read from the `CallSite`.
    Call { function: Node<'a> },
    /// `operand.field`
    Selector { operand: Node<'a>, field: &'a str },
    /// A bare identifier.
    Ident(&'a str),
    /// A basic literal, with its source text (quotes included).
    Literal { kind: LitKind, raw: &'a str },
    /// Anything else: composite literals, index expressions, parentheses...
    Other,
}

impl<'a> Expr<'a> {
    /// Classify a node. Never fails; unknown shapes become `Other`.
    pub fn from_node(node: Node<'a>, source: &'a [u8]) -> Self {
        let text = |n: Node<'a>| n.utf8_text(source).unwrap_or("");

        match node.kind() {
            "identifier" => Expr::Ident(text(node)),
            "selector_expression" => {
                match (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) {
                    (Some(operand), Some(field)) => Expr::Selector {
                        operand,
                        field: text(field),
                    },
                    _ => Expr::Other,
                }
            }
            "call_expression" => match node.child_by_field_name("function") {
                Some(function) => Expr::Call { function },
                None => Expr::Other,
            },
            kind => match LitKind::from_kind(kind) {
                Some(lit) => Expr::Literal {
                    kind: lit,
                    raw: text(node),
                },
                None => Expr::Other,
            },
        }
    }

    /// The unquoted value of a string literal; None for any other shape
    /// or for a literal that fails to unquote.
    pub fn string_value(&self) -> Option<String> {
        match self {
            Expr::Literal { kind, raw } if kind.is_string() => unquote(raw),
            _ => None,
        }
    }
}
