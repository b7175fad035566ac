//! loglint - style and safety checks for Go logging calls.
//!
//! loglint parses Go source with tree-sitter, finds calls made through the
//! `log`, `slog` and `zap` packages, and reports messages that are not
//! lower case, contain non-English letters or special symbols, or pass
//! arguments that look like secrets.
//!
//! # Architecture
//!
//! - `analysis`: Go parsing and the expression view of call sites
//! - `lint`: classifier, extractor, validators, reporter and file runner
//! - `config`: `loglint.yaml` loading
//! - `report`: Output formatting (pretty, JSON, SARIF)
//! - `cli`: Command-line driver
//!
//! # Embedding
//!
//! Host tools that already have a parsed file can drive a single call
//! through [`lint::check_call`] with their own [`lint::Reporter`].

pub mod analysis;
pub mod cli;
pub mod config;
pub mod lint;
pub mod logging;
pub mod report;

pub use analysis::{register_analyzers, CallSite, Expr, GoAnalyzer, LanguageAnalyzer, Span};
pub use config::{Config, ConfigError};
pub use lint::{check_call, check_file, Diagnostic, LintResult, LintRule, Reporter, Runner};
