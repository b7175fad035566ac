//! The four message validators.
//!
//! Each predicate returns true when the input passes its rule.

use tree_sitter::Node;

use crate::analysis::Expr;

use super::tables::is_sensitive_name;

/// No character is an upper case letter.
pub fn check_lower_case(msg: &str) -> bool {
    !msg.chars().any(char::is_uppercase)
}

/// Every letter is an ASCII English letter.
pub fn check_english(msg: &str) -> bool {
    msg.chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| c.is_ascii_alphabetic())
}

/// Every character is one of `a-z`, `0-9`, space, `_` or `-`.
pub fn check_no_special_chars(msg: &str) -> bool {
    msg.chars().all(is_allowed_char)
}

/// Whether some rejected character is not a letter.
///
/// Letters outside `a-z` are already reported by the case and English
/// rules; this tells the special-symbol rule whether it has anything of
/// its own to report.
pub fn has_non_letter_symbols(msg: &str) -> bool {
    msg.chars()
        .any(|c| !is_allowed_char(c) && !c.is_alphabetic())
}

fn is_allowed_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | ' ' | '_' | '-')
}

/// None of the arguments names a sensitive value.
///
/// String literals are compared by value, identifiers by name and selector
/// expressions by the selected field. Other shapes are not checked.
pub fn check_sensitive(args: &[Node], source: &[u8]) -> bool {
    !args.iter().any(|arg| match Expr::from_node(*arg, source) {
        Expr::Ident(name) => is_sensitive_name(name),
        Expr::Selector { field, .. } => is_sensitive_name(field),
        lit @ Expr::Literal { .. } => lit
            .string_value()
            .map(|value| is_sensitive_name(&value))
            .unwrap_or(false),
        _ => false,
    })
}
