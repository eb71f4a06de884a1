//! Error types for loading method definitions
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::method::MethodDocError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Failures while reading method definitions from disk
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors, including records that do not match the expected shape
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// A record was read but failed validation
    #[error("Invalid method definition in '{path}': {source}")]
    ValidationError {
        path: PathBuf,
        source: MethodDocError,
    },

    /// Two files define the same method
    #[error("Method '{method}' is defined in both '{first}' and '{second}'")]
    DuplicateMethod {
        method: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: &Path, error: std::io::Error) -> Self {
        Self::IoError {
            path: path.to_path_buf(),
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: &Path, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path: path.to_path_buf(),
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: &Path, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path: path.to_path_buf(),
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    /// Create a validation error
    pub fn validation_error(path: &Path, error: MethodDocError) -> Self {
        Self::ValidationError {
            path: path.to_path_buf(),
            source: error,
        }
    }

    /// Get the file this error was raised for. Duplicates report the second
    /// definition.
    pub fn path(&self) -> &Path {
        match self {
            Self::IoError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::ValidationError { path, .. } => path,
            Self::DuplicateMethod { second, .. } => second,
        }
    }

    /// The record-level error, when a definition was read but rejected
    pub fn method_error(&self) -> Option<&MethodDocError> {
        match self {
            Self::ValidationError { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let path = PathBuf::from("eth_chainId.yaml");

        let io_err = LoaderError::io_error(
            &path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        );
        assert!(matches!(io_err, LoaderError::IoError { .. }));
        assert_eq!(io_err.path(), path.as_path());
        assert!(io_err.method_error().is_none());

        let duplicate = LoaderError::DuplicateMethod {
            method: "eth_chainId".to_string(),
            first: PathBuf::from("a.json"),
            second: PathBuf::from("b.yaml"),
        };
        assert_eq!(duplicate.path(), Path::new("b.yaml"));
        assert_eq!(
            duplicate.to_string(),
            "Method 'eth_chainId' is defined in both 'a.json' and 'b.yaml'"
        );
    }

    #[test]
    fn test_validation_error_keeps_source() {
        let error = LoaderError::validation_error(
            Path::new("bad.json"),
            MethodDocError::MissingField {
                method: "eth_chainId".to_string(),
                field: "network",
            },
        );
        assert_eq!(error.method_error().unwrap().method(), "eth_chainId");
        assert!(error.to_string().contains("bad.json"));
    }
}
