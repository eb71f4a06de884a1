//! Method documentation records
//!
//! A [`MethodDoc`] carries everything shown on one method's reference page.
//! Records are authored as static data (JSON or YAML files) and are never
//! mutated after loading.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::method::error::{MethodDocError, MethodDocResult};
use crate::params::{ParamNode, ParamSchema, ParamType, SchemaWalker};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Source language of a code sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    Shell,
    Js,
    Node,
    Go,
    Python,
    Rust,
}

impl SnippetLanguage {
    pub fn all() -> [SnippetLanguage; 6] {
        [
            SnippetLanguage::Shell,
            SnippetLanguage::Js,
            SnippetLanguage::Node,
            SnippetLanguage::Go,
            SnippetLanguage::Python,
            SnippetLanguage::Rust,
        ]
    }

    /// Tag used in definition files
    pub fn tag(self) -> &'static str {
        match self {
            SnippetLanguage::Shell => "shell",
            SnippetLanguage::Js => "js",
            SnippetLanguage::Node => "node",
            SnippetLanguage::Go => "go",
            SnippetLanguage::Python => "python",
            SnippetLanguage::Rust => "rust",
        }
    }

    /// Name shown on the language selector
    pub fn display_name(self) -> &'static str {
        match self {
            SnippetLanguage::Shell => "cURL",
            SnippetLanguage::Js => "JavaScript",
            SnippetLanguage::Node => "Node.js",
            SnippetLanguage::Go => "Go",
            SnippetLanguage::Python => "Python",
            SnippetLanguage::Rust => "Rust",
        }
    }

    /// Info string for a fenced markdown code block
    pub fn fence(self) -> &'static str {
        match self {
            SnippetLanguage::Shell => "bash",
            SnippetLanguage::Js | SnippetLanguage::Node => "javascript",
            SnippetLanguage::Go => "go",
            SnippetLanguage::Python => "python",
            SnippetLanguage::Rust => "rust",
        }
    }
}

impl fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A ready-to-copy request example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub language: SnippetLanguage,
    pub code: String,
}

impl CodeSnippet {
    pub fn new(language: SnippetLanguage, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
        }
    }
}

/// Which parameter tree of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Request,
    Response,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Request => f.write_str("request"),
            Section::Response => f.write_str("response"),
        }
    }
}

/// Reference documentation for one JSON-RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MethodDocRepr")]
pub struct MethodDoc {
    pub method: String,
    pub network: String,
    /// Compute-unit cost of one call
    pub cu: u32,
    pub description: String,
    pub use_cases: Vec<String>,
    pub constraints: Vec<String>,
    pub code_snippets: Vec<CodeSnippet>,
    /// Literal example response body, kept verbatim for display
    pub response_json: String,
    pub request: ParamSchema,
    pub response: ParamSchema,
}

impl MethodDoc {
    /// Create a record with no parameters, samples, or prose
    pub fn new(method: impl Into<String>, network: impl Into<String>, cu: u32) -> Self {
        Self {
            method: method.into(),
            network: network.into(),
            cu,
            description: String::new(),
            use_cases: Vec::new(),
            constraints: Vec::new(),
            code_snippets: Vec::new(),
            response_json: String::new(),
            request: ParamSchema::none(),
            response: ParamSchema::none(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_request(mut self, request: ParamSchema) -> Self {
        self.request = request;
        self
    }

    pub fn with_response(mut self, response: ParamSchema) -> Self {
        self.response = response;
        self
    }

    pub fn with_response_json(mut self, response_json: impl Into<String>) -> Self {
        self.response_json = response_json.into();
        self
    }

    pub fn with_snippet(mut self, snippet: CodeSnippet) -> Self {
        self.code_snippets.push(snippet);
        self
    }

    /// Parameter tree for one section
    pub fn schema(&self, section: Section) -> &ParamSchema {
        match section {
            Section::Request => &self.request,
            Section::Response => &self.response,
        }
    }

    /// The code sample for a language, if one is documented
    pub fn snippet(&self, language: SnippetLanguage) -> Option<&CodeSnippet> {
        self.code_snippets.iter().find(|s| s.language == language)
    }

    /// The sample selected when a page first opens
    pub fn default_snippet(&self) -> Option<&CodeSnippet> {
        self.code_snippets.first()
    }

    /// Network tag with its first letter capitalized, e.g. `Ethereum`
    pub fn network_display(&self) -> String {
        let mut chars = self.network.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Parse the example response, or `None` when no example is documented
    pub fn response_example(&self) -> MethodDocResult<Option<serde_json::Value>> {
        if self.response_json.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.response_json)
            .map(Some)
            .map_err(|source| MethodDocError::InvalidResponseJson {
                method: self.method.clone(),
                source,
            })
    }

    /// Validate the record with the default walker
    pub fn validate(&self) -> MethodDocResult<()> {
        self.validate_with(&SchemaWalker::new())
    }

    /// Validate the record, walking both parameter trees with `walker`
    pub fn validate_with(&self, walker: &SchemaWalker) -> MethodDocResult<()> {
        if self.method.trim().is_empty() {
            return Err(self.missing("method"));
        }
        if self.network.trim().is_empty() {
            return Err(self.missing("network"));
        }
        self.check_method_name()?;

        let mut seen = HashSet::new();
        for snippet in &self.code_snippets {
            if !seen.insert(snippet.language) {
                return Err(MethodDocError::DuplicateSnippet {
                    method: self.method.clone(),
                    language: snippet.language,
                });
            }
        }

        self.response_example()?;

        for section in [Section::Request, Section::Response] {
            let schema = self.schema(section);
            let checked = if schema.param_type.is_none() && !schema.params.is_empty() {
                // Never rendered, but still checked so authoring mistakes surface
                warn!(
                    method = %self.method,
                    %section,
                    ignored = schema.params.len(),
                    "schema type is 'none' but parameters are declared"
                );
                walker.walk_nodes(&schema.params).map(|_| ())
            } else {
                walker.validate(schema)
            };
            checked.map_err(|source| MethodDocError::Schema {
                method: self.method.clone(),
                section,
                source,
            })?;
        }

        debug!(method = %self.method, "method record is valid");
        Ok(())
    }

    /// Method names become `{method}.md` page names, so they must stay a
    /// single path segment
    fn check_method_name(&self) -> MethodDocResult<()> {
        let reason = if self.method.contains(['/', '\\']) {
            "must not contain path separators"
        } else if self.method == "." || self.method == ".." {
            "must not be a relative path segment"
        } else if self.method.contains('\0') {
            "must not contain NUL characters"
        } else {
            return Ok(());
        };
        Err(MethodDocError::InvalidMethodName {
            method: self.method.clone(),
            reason,
        })
    }

    fn missing(&self, field: &'static str) -> MethodDocError {
        MethodDocError::MissingField {
            method: self.method.clone(),
            field,
        }
    }
}

/// On-disk shape of a record.
///
/// Accepts nested `request`/`response` schemas as well as the flat
/// `requestParams`/`requestParamsType` layout used by older definitions.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MethodDocRepr {
    method: String,
    #[serde(default)]
    network: String,
    #[serde(default, alias = "computeUnits")]
    cu: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    use_cases: Vec<String>,
    #[serde(default)]
    constraints: Vec<String>,
    #[serde(default)]
    code_snippets: Vec<CodeSnippet>,
    #[serde(default, alias = "responseJSON")]
    response_json: String,
    #[serde(default)]
    request: Option<ParamSchema>,
    #[serde(default)]
    response: Option<ParamSchema>,
    #[serde(default)]
    request_params: Option<Vec<ParamNode>>,
    #[serde(default)]
    request_params_type: Option<ParamType>,
    #[serde(default)]
    response_params: Option<Vec<ParamNode>>,
    #[serde(default)]
    response_params_type: Option<ParamType>,
    #[serde(default)]
    response_params_description: Option<String>,
}

/// Build a schema from the flat layout. A missing type means `none` when no
/// params are listed, otherwise `fallback`.
fn flat_schema(
    params: Option<Vec<ParamNode>>,
    param_type: Option<ParamType>,
    description: Option<String>,
    fallback: ParamType,
) -> ParamSchema {
    let params = params.unwrap_or_default();
    let param_type = param_type.unwrap_or(if params.is_empty() {
        ParamType::None
    } else {
        fallback
    });
    ParamSchema {
        param_type,
        description,
        params,
    }
}

impl From<MethodDocRepr> for MethodDoc {
    fn from(repr: MethodDocRepr) -> Self {
        let request = repr.request.unwrap_or_else(|| {
            flat_schema(repr.request_params, repr.request_params_type, None, ParamType::Array)
        });
        let response = repr.response.unwrap_or_else(|| {
            flat_schema(
                repr.response_params,
                repr.response_params_type,
                repr.response_params_description,
                ParamType::Object,
            )
        });

        Self {
            method: repr.method,
            network: repr.network,
            cu: repr.cu,
            description: repr.description,
            use_cases: repr.use_cases,
            constraints: repr.constraints,
            code_snippets: repr.code_snippets,
            response_json: repr.response_json,
            request,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{EnumValue, SchemaError};
    use serde_json::json;

    fn block_tag() -> ParamNode {
        ParamNode::new("blockNumber", ParamType::String).with_enum(vec![
            EnumValue::new("latest", "the blockchain's most recent block").default_value(),
            EnumValue::new("safe", "a block validated by the beacon chain"),
        ])
    }

    fn sample() -> MethodDoc {
        MethodDoc::new("eth_getBlockReceipts", "ethereum", 80)
            .with_description("Returns the receipts of a block by number or hash.")
            .with_request(ParamSchema::new(ParamType::Array, vec![block_tag()]))
            .with_response(ParamSchema::new(
                ParamType::Object,
                vec![ParamNode::new("result", ParamType::ArrayOfObjects)],
            ))
            .with_response_json(r#"{"jsonrpc":"2.0","id":1,"result":[]}"#)
            .with_snippet(CodeSnippet::new(SnippetLanguage::Shell, "curl ..."))
    }

    #[test]
    fn test_valid_record() {
        let doc = sample();
        assert!(doc.validate().is_ok());
        assert_eq!(doc.network_display(), "Ethereum");
        assert_eq!(doc.default_snippet().unwrap().language, SnippetLanguage::Shell);
        assert!(doc.snippet(SnippetLanguage::Go).is_none());
    }

    #[test]
    fn test_missing_network() {
        let mut doc = sample();
        doc.network = String::new();
        let error = doc.validate().unwrap_err();
        assert!(matches!(error, MethodDocError::MissingField { field: "network", .. }));
    }

    #[test]
    fn test_method_name_must_be_one_path_segment() {
        for name in ["../escaped", "/abs/page", "nested/name", "win\\page", ".."] {
            let mut doc = sample();
            doc.method = name.to_string();
            let error = doc.validate().unwrap_err();
            assert!(
                matches!(error, MethodDocError::InvalidMethodName { .. }),
                "{name} accepted"
            );
            assert_eq!(error.method(), name);
        }

        let mut doc = sample();
        doc.method = "eth_getBlockReceipts.v2".to_string();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_duplicate_snippet_language() {
        let doc = sample().with_snippet(CodeSnippet::new(SnippetLanguage::Shell, "curl again"));
        let error = doc.validate().unwrap_err();
        assert!(matches!(
            error,
            MethodDocError::DuplicateSnippet { language: SnippetLanguage::Shell, .. }
        ));
    }

    #[test]
    fn test_invalid_response_json() {
        let doc = sample().with_response_json("{\"result\": ");
        let error = doc.validate().unwrap_err();
        assert!(matches!(error, MethodDocError::InvalidResponseJson { .. }));
        assert_eq!(error.method(), "eth_getBlockReceipts");
    }

    #[test]
    fn test_schema_error_names_section() {
        let bad = ParamNode::new("blockNumber", ParamType::String).with_enum(vec![
            EnumValue::new("latest", "most recent").default_value(),
            EnumValue::new("safe", "validated").default_value(),
        ]);
        let doc = sample().with_request(ParamSchema::new(ParamType::Array, vec![bad]));

        let error = doc.validate().unwrap_err();
        assert!(error.to_string().contains("request params"));
        assert!(matches!(
            error.schema_error(),
            Some(SchemaError::SchemaInvariantViolation { .. })
        ));
    }

    #[test]
    fn test_params_under_none_schema_are_still_checked() {
        let hidden = ParamNode::new("blockNumber", ParamType::String)
            .with_children(ParamType::Object, vec![ParamNode::new("hash", ParamType::String)]);
        let doc = sample().with_request(ParamSchema::new(ParamType::None, vec![hidden]));

        let error = doc.validate().unwrap_err();
        assert!(error.to_string().contains("request params"));
        assert_eq!(error.schema_error().and_then(SchemaError::rule), Some("scalar_without_children"));

        let harmless = ParamSchema::new(ParamType::None, vec![ParamNode::new("x", ParamType::String)]);
        assert!(sample().with_request(harmless).validate().is_ok());
    }

    #[test]
    fn test_nested_layout_accepts_null_params() {
        let doc: MethodDoc = serde_json::from_value(json!({
            "method": "eth_chainId",
            "network": "ethereum",
            "request": {"type": "none", "params": null},
            "response": {"type": "string", "params": null}
        }))
        .unwrap();
        assert_eq!(doc.request, ParamSchema::none());
        assert!(doc.response.params.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_flat_layout_deserializes() {
        let doc: MethodDoc = serde_json::from_value(json!({
            "method": "debug_traceBlockByNumber",
            "network": "ethereum",
            "cu": 90,
            "description": "Replays the block that is already present in the database.",
            "useCases": ["Trace smart contract interactions within a specific block"],
            "constraints": ["High computational cost for tracing complex blocks"],
            "codeSnippets": [{"language": "shell", "code": "curl ..."}],
            "responseJSON": "{\"jsonrpc\": \"2.0\", \"id\": 1}",
            "requestParamsType": "array",
            "requestParams": [{"paramName": "blockNumber", "type": "string"}],
            "responseParamsType": "object",
            "responseParamsDescription": "Array of block traces.",
            "responseParams": [{"paramName": "id", "type": "integer"}]
        }))
        .unwrap();

        assert_eq!(doc.request.param_type, ParamType::Array);
        assert_eq!(doc.request.params[0].name, "blockNumber");
        assert_eq!(doc.response.description.as_deref(), Some("Array of block traces."));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_nested_layout_roundtrips() {
        let doc = sample();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["request"]["type"], "array");
        assert_eq!(value["useCases"], json!([]));

        let back: MethodDoc = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_missing_schema_defaults_to_none() {
        let doc: MethodDoc = serde_json::from_value(json!({
            "method": "eth_chainId",
            "network": "ethereum"
        }))
        .unwrap();
        assert_eq!(doc.request, ParamSchema::none());
        assert_eq!(doc.cu, 0);
    }

    #[test]
    fn test_unknown_snippet_language_rejected() {
        let result = serde_json::from_value::<MethodDoc>(json!({
            "method": "eth_chainId",
            "network": "ethereum",
            "codeSnippets": [{"language": "cobol", "code": "..."}]
        }));
        assert!(result.is_err());
    }
}
