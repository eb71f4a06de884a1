//! Error types for method documentation records
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::method::record::{Section, SnippetLanguage};
use crate::params::SchemaError;
use thiserror::Error;

/// Result type for record operations
pub type MethodDocResult<T> = Result<T, MethodDocError>;

/// A defect in one method documentation record
#[derive(Error, Debug)]
pub enum MethodDocError {
    /// A required text field is empty
    #[error("Method '{method}' is missing required field '{field}'")]
    MissingField { method: String, field: &'static str },

    /// The method name cannot be used as a page file name
    #[error("Method name '{method}' {reason}")]
    InvalidMethodName { method: String, reason: &'static str },

    /// Two code samples share a language tag
    #[error("Method '{method}' declares more than one '{language}' code snippet")]
    DuplicateSnippet {
        method: String,
        language: SnippetLanguage,
    },

    /// The literal example response is not valid JSON
    #[error("Method '{method}' has an example response that is not valid JSON: {source}")]
    InvalidResponseJson {
        method: String,
        source: serde_json::Error,
    },

    /// A request or response parameter tree failed validation
    #[error("Method '{method}' {section} params: {source}")]
    Schema {
        method: String,
        section: Section,
        source: SchemaError,
    },

    /// The same method name was registered twice
    #[error("Method '{method}' is defined more than once")]
    DuplicateMethod { method: String },
}

impl MethodDocError {
    /// Name of the method the error belongs to
    pub fn method(&self) -> &str {
        match self {
            Self::MissingField { method, .. }
            | Self::InvalidMethodName { method, .. }
            | Self::DuplicateSnippet { method, .. }
            | Self::InvalidResponseJson { method, .. }
            | Self::Schema { method, .. }
            | Self::DuplicateMethod { method } => method,
        }
    }

    /// The underlying schema error, when the defect is in a parameter tree
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failures collected while validating many records at once
#[derive(Debug, Default)]
pub struct MethodDocErrors {
    pub errors: Vec<MethodDocError>,
}

impl MethodDocErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: MethodDocError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Ok if nothing was collected, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for MethodDocErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} method record(s) failed validation:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MethodDocErrors {}

impl From<Vec<MethodDocError>> for MethodDocErrors {
    fn from(errors: Vec<MethodDocError>) -> Self {
        Self { errors }
    }
}
