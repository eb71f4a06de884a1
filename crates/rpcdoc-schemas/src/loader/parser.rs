//! Parsing of method definition files in YAML and JSON
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::method::MethodDoc;
use serde_json::Value;
use std::path::Path;
use tracing::trace;

/// Supported file formats for method definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path)),
        }
    }

    /// True if the path has an extension this loader reads
    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_ok()
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Turns file contents into method records
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a definition file, detecting format from its extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Vec<MethodDoc>> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| LoaderError::io_error(path, e))?;

        self.parse_content(&content, format, path)
    }

    /// Parse definition content with an explicit format.
    ///
    /// The document may be a single record, a list of records, or an object
    /// with a `methods` list.
    pub fn parse_content(
        &self,
        content: &str,
        format: Format,
        path: &Path,
    ) -> LoaderResult<Vec<MethodDoc>> {
        let value = match format {
            Format::Yaml => self.parse_yaml(content, path)?,
            Format::Json => self.parse_json(content, path)?,
        };

        let records = match value {
            Value::Array(items) => items,
            Value::Object(mut map) if !map.contains_key("method") && map.contains_key("methods") => {
                match map.remove("methods") {
                    Some(Value::Array(items)) => items,
                    Some(other) => vec![other],
                    None => Vec::new(),
                }
            }
            single => vec![single],
        };

        trace!(path = %path.display(), records = records.len(), "parsed definition document");
        records
            .into_iter()
            .map(|record| {
                serde_json::from_value(record).map_err(|e| LoaderError::json_parse_error(path, e))
            })
            .collect()
    }

    /// Parse YAML content into a JSON value
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| LoaderError::yaml_parse_error(path, e))?;

        serde_json::to_value(yaml_value).map_err(|e| LoaderError::json_parse_error(path, e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content).map_err(|e| LoaderError::json_parse_error(path, e))
    }
}
