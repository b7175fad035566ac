//! AST-backed code analysis module.
//!
//! This module turns source files into tree-sitter trees and exposes the
//! pieces the lint engine reads from them:
//! - Call sites (every call expression, in document order)
//! - A tagged expression view (`Expr`) for shape matching
//! - String literal unquoting
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Source Files    │────▶│ Analyzers    │────▶│ ParsedFile    │
//! └─────────────────┘     │ (Go)         │     │ + CallSites   │
//!                         └──────────────┘     └───────────────┘
//!                                                      │
//!                                                      ▼
//!                                              ┌───────────────┐
//!                                              │ Lint engine   │
//!                                              └───────────────┘
//! ```

mod expr;
mod facts;
mod languages;
mod literal;
mod traits;

pub use expr::{Expr, LitKind};
pub use facts::{CallSite, Span};
pub use languages::{get_analyzer, register_analyzers, registered_extensions, GoAnalyzer};
pub use literal::unquote;
pub use traits::{LanguageAnalyzer, ParsedFile};
