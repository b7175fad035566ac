//! Lint runner that drives the engine over a set of files.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::analysis::get_analyzer;

use super::engine::{check_file, FileReporter};
use super::{filter_suppressed, parse_suppressions, Diagnostic, LintResult, Suppression};

/// Outcome of linting one file.
struct FileOutcome {
    diagnostics: Vec<Diagnostic>,
    suppressions: Vec<Suppression>,
}

/// Runs the engine over files in parallel and applies suppressions.
pub struct Runner {
    base_dir: PathBuf,
}

impl Runner {
    /// Create a new runner. Reported paths are relative to `base_dir`.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Lint all files. Unreadable or unsupported files are skipped.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<LintResult> {
        let outcomes: Vec<_> = files
            .par_iter()
            .map(|path| (path, self.lint_file(path)))
            .collect();

        let mut result = LintResult::new();
        let mut diagnostics = Vec::new();
        let mut suppressions = Vec::new();

        for (path, outcome) in outcomes {
            match outcome {
                Ok(Some(outcome)) => {
                    result.scanned += 1;
                    diagnostics.extend(outcome.diagnostics);
                    suppressions.extend(outcome.suppressions);
                }
                Ok(None) => debug!(path = %path.display(), "no analyzer for file"),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping file"),
            }
        }

        let (active, suppressed) = filter_suppressed(diagnostics, &suppressions);
        result.diagnostics = active;
        result.suppressed = suppressed;
        result.sort();

        debug!(
            scanned = result.scanned,
            diagnostics = result.diagnostics.len(),
            suppressed = result.suppressed.len(),
            "lint finished"
        );

        Ok(result)
    }

    fn lint_file(&self, path: &Path) -> anyhow::Result<Option<FileOutcome>> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(analyzer) = get_analyzer(ext) else {
            return Ok(None);
        };

        let source = std::fs::read(path)?;
        let shown = self.display_path(path);
        debug!(path = %shown, "linting");

        let parsed = analyzer.parse(path, &source)?;
        if parsed.has_errors() {
            debug!(path = %shown, "source contains syntax errors");
        }

        let mut reporter = FileReporter::new(&shown);
        check_file(analyzer, &parsed, &mut reporter)?;

        Ok(Some(FileOutcome {
            diagnostics: reporter.into_diagnostics(),
            suppressions: parse_suppressions(&shown, &parsed),
        }))
    }

    fn display_path(&self, path: &Path) -> String {
        if path == self.base_dir {
            // Single file scan: report the file name.
            return path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
        }
        path.strip_prefix(&self.base_dir)
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| path.to_string_lossy().to_string())
    }
}
