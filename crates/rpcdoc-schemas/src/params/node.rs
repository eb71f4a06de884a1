//! Parameter documentation tree
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::params::error::{SchemaError, SchemaResult, Violation};
use crate::params::types::ParamType;
use serde::{Deserialize, Serialize};

/// One allowed literal value of an enumerated parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
}

impl EnumValue {
    /// Create a non-default option
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: Some(description.into()),
            is_default: false,
        }
    }

    /// Mark this option as the default
    pub fn default_value(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// A documented request or response field.
///
/// Scalar and composite fields share this one record; [`ParamNode::check`]
/// enforces which optional parts may appear together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamNode {
    #[serde(alias = "paramName")]
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    #[serde(default, alias = "paramDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, alias = "paramEnum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<EnumValue>>,

    #[serde(default, alias = "childrenParamsType", skip_serializing_if = "Option::is_none")]
    pub children_type: Option<ParamType>,

    #[serde(default, alias = "childrenParams", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ParamNode>>,
}

impl ParamNode {
    /// Create a leaf node
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: None,
            enum_values: None,
            children_type: None,
            children: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enum(mut self, values: Vec<EnumValue>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// Attach ordered children together with the type they document
    pub fn with_children(mut self, children_type: ParamType, children: Vec<ParamNode>) -> Self {
        self.children_type = Some(children_type);
        self.children = Some(children);
        self
    }

    /// Children in declaration order; empty when absent
    pub fn children(&self) -> &[ParamNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Enumeration options in declaration order; empty when absent
    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// The single default option, if one is marked
    pub fn default_enum_value(&self) -> Option<&EnumValue> {
        self.enum_values().iter().find(|option| option.is_default)
    }

    /// Check the node's own invariants, without looking at descendants.
    ///
    /// `path` names the node itself (ancestors plus this node's name) and is
    /// copied into the error on failure.
    pub fn check(&self, path: &[String]) -> SchemaResult<()> {
        let fail = |violation: Violation| Err(SchemaError::violation(path.to_vec(), violation));

        if self.name.trim().is_empty() {
            return fail(Violation::new("non_empty_name", "a parameter name", "an empty name"));
        }

        let child_count = self.children().len();
        if child_count > 0 && !self.param_type.is_composite() {
            return fail(Violation::new(
                "scalar_without_children",
                format!("no children for scalar type '{}'", self.param_type),
                format!("{} children", child_count),
            ));
        }

        if child_count > 0 && !self.enum_values().is_empty() {
            return fail(Violation::new(
                "enum_or_children",
                "either enum values or children",
                format!("{} enum values and {} children", self.enum_values().len(), child_count),
            ));
        }

        let defaults = self.enum_values().iter().filter(|option| option.is_default).count();
        if defaults > 1 {
            return fail(Violation::new(
                "single_enum_default",
                "at most one default enum value",
                format!("{} defaults", defaults),
            ));
        }

        Ok(())
    }

    /// Number of nodes in this subtree, including the node itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(ParamNode::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn here(name: &str) -> Vec<String> {
        vec![name.to_string()]
    }

    #[test]
    fn test_scalar_with_children_rejected() {
        let node = ParamNode::new("blockNumber", ParamType::String)
            .with_children(ParamType::Object, vec![ParamNode::new("inner", ParamType::String)]);

        let error = node.check(&here("blockNumber")).unwrap_err();
        assert_eq!(error.rule(), Some("scalar_without_children"));
        assert_eq!(error.path().unwrap(), &["blockNumber".to_string()]);
    }

    #[test]
    fn test_object_without_children_allowed() {
        assert!(ParamNode::new("tracer", ParamType::Object).check(&here("tracer")).is_ok());

        let empty = ParamNode::new("tracer", ParamType::Object).with_children(ParamType::Object, vec![]);
        assert!(empty.check(&here("tracer")).is_ok());
    }

    #[test]
    fn test_empty_children_on_scalar_treated_as_absent() {
        let node = ParamNode::new("flag", ParamType::Boolean).with_children(ParamType::Boolean, vec![]);
        assert!(node.check(&here("flag")).is_ok());
    }

    #[test]
    fn test_multiple_defaults_rejected() {
        let node = ParamNode::new("blockTag", ParamType::String).with_enum(vec![
            EnumValue::new("latest", "most recent block").default_value(),
            EnumValue::new("safe", "validated by the beacon chain").default_value(),
        ]);

        let error = node.check(&here("blockTag")).unwrap_err();
        assert_eq!(error.rule(), Some("single_enum_default"));
    }

    #[test]
    fn test_single_default_found() {
        let node = ParamNode::new("blockTag", ParamType::String).with_enum(vec![
            EnumValue::new("latest", "most recent block"),
            EnumValue::new("safe", "validated by the beacon chain").default_value(),
            EnumValue::new("pending", "not yet included"),
        ]);

        assert!(node.check(&here("blockTag")).is_ok());
        assert_eq!(node.default_enum_value().unwrap().value, "safe");
    }

    #[test]
    fn test_enum_and_children_exclusive() {
        let node = ParamNode::new("result", ParamType::Object)
            .with_enum(vec![EnumValue::new("a", "first")])
            .with_children(ParamType::Object, vec![ParamNode::new("b", ParamType::String)]);

        let error = node.check(&here("result")).unwrap_err();
        assert_eq!(error.rule(), Some("enum_or_children"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let error = ParamNode::new("  ", ParamType::String).check(&here("  ")).unwrap_err();
        assert_eq!(error.rule(), Some("non_empty_name"));
    }

    #[test]
    fn test_legacy_field_names_accepted() {
        let node: ParamNode = serde_json::from_value(json!({
            "paramName": "tracer",
            "type": "object",
            "paramDescription": "Currently supports callTracer and prestateTracer",
            "childrenParamsType": "object",
            "childrenParams": [
                {"paramName": "onlyTopCall", "type": "boolean"}
            ]
        }))
        .unwrap();

        assert_eq!(node.name, "tracer");
        assert_eq!(node.children_type, Some(ParamType::Object));
        assert_eq!(node.children()[0].param_type, ParamType::Boolean);
        assert_eq!(node.subtree_len(), 2);
    }

    #[test]
    fn test_camel_case_enum_fields() {
        let node: ParamNode = serde_json::from_value(json!({
            "name": "blockTag",
            "type": "string",
            "enumValues": [
                {"value": "latest", "isDefault": true, "description": "most recent"},
                {"value": "earliest"}
            ]
        }))
        .unwrap();

        assert_eq!(node.enum_values().len(), 2);
        assert!(node.enum_values()[0].is_default);
        assert!(node.enum_values()[1].description.is_none());

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["enumValues"][0]["isDefault"], true);
        assert!(value["enumValues"][1].get("isDefault").is_none());
        assert!(value.get("children").is_none());
    }
}
