//! Configuration Module
//! Runtime options for one cleaning run.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("source and destination are the same file: {}", .0.display())]
    SamePath(PathBuf),
}

/// Everything a run needs to know, resolved before the pipeline starts.
///
/// Built either from CLI arguments or deserialized from a JSON file; the
/// boolean flags on the command line OR-merge on top of a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub exact_percent: bool,
}

impl Options {
    /// Load options from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Sanity checks that must pass before the pipeline touches any file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == self.destination {
            return Err(ConfigError::SamePath(self.source.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_file_parse_with_flag_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(
            &path,
            r#"{"source": "in.csv", "destination": "out.csv"}"#,
        )
        .unwrap();

        let options = Options::from_file(&path).unwrap();
        assert_eq!(options.source, PathBuf::from("in.csv"));
        assert_eq!(options.destination, PathBuf::from("out.csv"));
        assert!(!options.verbose);
        assert!(!options.exact_percent);
    }

    #[test]
    fn test_unknown_config_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(
            &path,
            r#"{"source": "in.csv", "destination": "out.csv", "threshold": 9}"#,
        )
        .unwrap();

        assert!(matches!(
            Options::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_source_equal_to_destination_is_rejected() {
        let options = Options {
            source: PathBuf::from("data.csv"),
            destination: PathBuf::from("data.csv"),
            verbose: false,
            exact_percent: false,
        };
        assert!(options.validate().is_err());
    }
}
