//! Fact structures extracted from AST analysis.

use std::fmt;

use tree_sitter::Node;

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// A single call expression in a parsed file.
///
/// Borrowed from the tree for the duration of one visit; the engine never
/// keeps call sites past the check of the call itself.
#[derive(Debug, Clone)]
pub struct CallSite<'a> {
    /// The `call_expression` node.
    pub node: Node<'a>,
    /// The callee expression (`function` field).
    pub function: Node<'a>,
    /// Argument expressions in source order, comments excluded.
    pub arguments: Vec<Node<'a>>,
}

impl<'a> CallSite<'a> {
    /// Build a call site from a `call_expression` node.
    ///
    /// Returns None for nodes that are not well-formed calls (missing
    /// callee or argument list, as happens inside ERROR recovery).
    pub fn from_node(node: Node<'a>) -> Option<Self> {
        if node.kind() != "call_expression" {
            return None;
        }
        let function = node.child_by_field_name("function")?;
        let arg_list = node.child_by_field_name("arguments")?;

        let arguments = arg_list
            .named_children(&mut arg_list.walk())
            .filter(|n| !n.is_extra())
            .collect();

        Some(Self {
            node,
            function,
            arguments,
        })
    }

    /// Position reported for diagnostics on this call.
    pub fn span(&self) -> Span {
        Span::from_node(self.node)
    }
}
