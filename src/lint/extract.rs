//! Pulls the checkable payload out of a logging call.

use tree_sitter::Node;

use crate::analysis::{CallSite, Expr};

/// What a logging call hands to the validators.
#[derive(Debug, Clone)]
pub enum Payload<'a> {
    /// One argument, a string literal, already unquoted.
    SimpleMessage(String),
    /// Two or more arguments: a format string (expected, not guaranteed)
    /// followed by values.
    StructuredArgs(Vec<Node<'a>>),
}

impl<'a> Payload<'a> {
    /// The message text: the simple message, or the first argument when it
    /// is a string literal that unquotes cleanly.
    pub fn message(&self, source: &[u8]) -> Option<String> {
        match self {
            Payload::SimpleMessage(text) => Some(text.clone()),
            Payload::StructuredArgs(args) => args
                .first()
                .and_then(|first| Expr::from_node(*first, source).string_value()),
        }
    }

    /// Arguments after the format string. Empty for a simple message.
    pub fn trailing_args(&self) -> &[Node<'a>] {
        match self {
            Payload::SimpleMessage(_) => &[],
            Payload::StructuredArgs(args) => args.get(1..).unwrap_or(&[]),
        }
    }
}

/// Extract the payload of a call, or None when there is nothing that can
/// be checked statically. None is never a violation.
pub fn extract_payload<'a>(call: &CallSite<'a>, source: &[u8]) -> Option<Payload<'a>> {
    match call.arguments.as_slice() {
        [] => None,
        [only] => Expr::from_node(*only, source)
            .string_value()
            .map(Payload::SimpleMessage),
        args => Some(Payload::StructuredArgs(args.to_vec())),
    }
}
