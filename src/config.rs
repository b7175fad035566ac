//! Configuration file (`loglint.yaml`) for the lint driver.
//!
//! The file only controls which files are scanned. Rules, logging library
//! names and the sensitive-name table are fixed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["loglint.yaml", ".loglint.yaml"];

/// Errors that can occur while loading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid excluded_paths pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Whether to lint `_test.go` files (default: false)
    #[serde(default)]
    pub include_test_files: Option<bool>,
    /// Glob patterns for paths to skip (e.g., "**/generated/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Look for a config file in `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|p| p.is_file())
    }

    /// Check that every exclusion pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.excluded_paths {
            globset::Glob::new(pattern).map_err(|source| ConfigError::Glob {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Returns whether to include test files (defaults to false).
    pub fn should_include_test_files(&self) -> bool {
        self.include_test_files.unwrap_or(false)
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loglint.yaml");
        fs::write(
            &path,
            "include_test_files: true\nexcluded_paths:\n  - \"**/generated/**\"\n",
        )
        .unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert!(config.should_include_test_files());
        assert_eq!(config.excluded_paths, vec!["**/generated/**"]);
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(!config.should_include_test_files());
        assert!(!config.is_path_excluded(Path::new("main.go")));
    }

    #[test]
    fn test_is_path_excluded() {
        let config = Config {
            excluded_paths: vec!["**/generated/**".to_string(), "*.pb.go".to_string()],
            ..Default::default()
        };
        assert!(config.is_path_excluded(Path::new("src/generated/api.go")));
        assert!(config.is_path_excluded(Path::new("api.pb.go")));
        assert!(!config.is_path_excluded(Path::new("src/main.go")));
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert!(Config::discover(temp.path()).is_none());

        fs::write(temp.path().join(".loglint.yaml"), "{}").unwrap();
        let found = Config::discover(temp.path()).unwrap();
        assert!(found.ends_with(".loglint.yaml"));
    }

    #[test]
    fn test_errors() {
        let temp = TempDir::new().unwrap();

        let missing = Config::parse_file(temp.path().join("nope.yaml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let bad_yaml = temp.path().join("bad.yaml");
        fs::write(&bad_yaml, "excluded_paths: [unclosed").unwrap();
        assert!(matches!(Config::parse_file(&bad_yaml), Err(ConfigError::Yaml { .. })));

        let bad_glob = temp.path().join("glob.yaml");
        fs::write(&bad_glob, "excluded_paths: [\"a[\"]\n").unwrap();
        assert!(matches!(Config::parse_file(&bad_glob), Err(ConfigError::Glob { .. })));
    }
}
