//! End-to-end lint runs over the Go fixtures in testdata/.

use std::path::PathBuf;

use loglint::cli::collect_files;
use loglint::lint::{LintRule, Runner, SuppressionType};
use loglint::Config;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

#[test]
fn test_violations_fixture() {
    let testdata = testdata_path();
    let file = testdata.join("violations.go");

    let result = Runner::new(&testdata).run(&[file]).expect("lint should succeed");

    let found: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| (d.line, d.rule))
        .collect();
    assert_eq!(
        found,
        vec![
            (12, LintRule::LowerCase),
            (13, LintRule::English),
            (14, LintRule::SpecialChars),
            (16, LintRule::SensitiveData),
            (18, LintRule::SpecialChars),
            (19, LintRule::SensitiveData),
        ]
    );

    for d in &result.diagnostics {
        assert_eq!(d.file, "violations.go");
        assert_eq!(d.column, 2, "call starts after one tab");
        assert_eq!(d.message, d.rule.message());
    }
}

#[test]
fn test_violations_fixture_suppressions() {
    let testdata = testdata_path();
    let result = Runner::new(&testdata)
        .run(&[testdata.join("violations.go")])
        .unwrap();

    assert_eq!(result.suppressed.len(), 2);

    let next_line = &result.suppressed[0];
    assert_eq!(next_line.diagnostic.line, 21);
    assert_eq!(next_line.diagnostic.rule, LintRule::LowerCase);
    assert_eq!(next_line.suppression.suppression_type, SuppressionType::NextLine);
    assert_eq!(next_line.suppression.reason, "Acme is a product name");

    let same_line = &result.suppressed[1];
    assert_eq!(same_line.diagnostic.line, 22);
    assert_eq!(same_line.suppression.rule, "*");
    assert_eq!(same_line.suppression.suppression_type, SuppressionType::Line);
}

#[test]
fn test_valid_fixture_is_clean() {
    let testdata = testdata_path();
    let result = Runner::new(&testdata)
        .run(&[testdata.join("valid.go")])
        .unwrap();

    assert_eq!(result.scanned, 1);
    assert!(result.is_clean(), "unexpected: {:?}", result.diagnostics);
    assert!(result.suppressed.is_empty());
}

#[test]
fn test_directory_scan() {
    // testdata is the walk root here, so it is not skipped.
    let testdata = testdata_path();
    let files = collect_files(&testdata, &Config::default()).unwrap();
    assert_eq!(files.len(), 2);

    let result = Runner::new(&testdata).run(&files).unwrap();
    assert_eq!(result.scanned, 2);
    assert_eq!(result.diagnostics.len(), 6);
    assert_eq!(result.count(LintRule::SensitiveData), 2);
    assert_eq!(result.count(LintRule::SpecialChars), 2);
}

#[test]
fn test_excluded_paths() {
    let testdata = testdata_path();
    let config = Config {
        excluded_paths: vec!["violations.go".to_string()],
        ..Default::default()
    };
    let files = collect_files(&testdata, &config).unwrap();
    assert_eq!(files, vec![testdata.join("valid.go")]);
}
