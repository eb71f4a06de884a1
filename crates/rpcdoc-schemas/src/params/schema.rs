//! Request and response parameter schemas
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::params::node::ParamNode;
use crate::params::types::ParamType;
use serde::{Deserialize, Deserializer, Serialize};

/// The root of one parameter tree: its top-level shape plus the ordered root nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSchema {
    #[serde(rename = "type")]
    pub param_type: ParamType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<ParamNode>,
}

/// `params: null` documents a method without parameters, same as omitting it
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ParamNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ParamNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ParamSchema {
    /// A schema for a method that takes or returns nothing structured
    pub fn none() -> Self {
        Self {
            param_type: ParamType::None,
            description: None,
            params: Vec::new(),
        }
    }

    pub fn new(param_type: ParamType, params: Vec<ParamNode>) -> Self {
        Self {
            param_type,
            description: None,
            params,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when walking this schema yields no rows
    pub fn is_empty(&self) -> bool {
        self.param_type.is_none() || self.params.is_empty()
    }

    /// Total node count across all root subtrees
    pub fn node_count(&self) -> usize {
        self.params.iter().map(ParamNode::subtree_len).sum()
    }
}

impl Default for ParamSchema {
    fn default() -> Self {
        Self::none()
    }
}
