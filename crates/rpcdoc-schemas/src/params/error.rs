//! Error types for parameter schemas
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A broken schema rule with detailed context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The schema rule that was violated
    pub rule: String,
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl Violation {
    /// Create a violation for a specific rule
    pub fn new<R, E, A>(rule: R, expected: E, actual: A) -> Self
    where
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self {
            rule: rule.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule '{}' violated: expected {}, but found {}",
            self.rule, self.expected, self.actual
        )
    }
}

/// Errors raised while validating or walking a parameter schema.
///
/// Every variant is an authoring defect in static documentation data. None of
/// them is transient, so callers should surface them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaError {
    /// A type tag outside the registry's closed set
    #[error("Unknown parameter type '{tag}'")]
    UnknownType { tag: String },

    /// A structural rule of the parameter tree does not hold
    #[error("Schema invariant violated at '{}': {}", display_path(.path), .violation)]
    SchemaInvariantViolation {
        /// Names from the root down to and including the offending node
        path: Vec<String>,
        violation: Violation,
    },

    /// Nesting went deeper than the configured walker limit
    #[error("Schema depth limit of {} exceeded at '{}'", .max_depth, display_path(.path))]
    DepthExceeded { path: Vec<String>, max_depth: usize },
}

impl SchemaError {
    /// Create an unknown-type error
    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownType { tag: tag.into() }
    }

    /// Create an invariant violation for the node at `path`
    pub fn violation(path: Vec<String>, violation: Violation) -> Self {
        Self::SchemaInvariantViolation { path, violation }
    }

    /// Path of the offending node, if the error is tied to one
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::UnknownType { .. } => None,
            Self::SchemaInvariantViolation { path, .. } | Self::DepthExceeded { path, .. } => {
                Some(path)
            }
        }
    }

    /// The violated rule name, for invariant violations
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::SchemaInvariantViolation { violation, .. } => Some(&violation.rule),
            _ => None,
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Render a node path as `a.b.c`, or `$` for the schema root.
pub fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.join(".")
    }
}
