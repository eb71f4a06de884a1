//! Depth-first flattening of parameter trees
//!
//! The walker turns a tree of [`ParamNode`]s into a flat, render-ready list of
//! [`WalkEntry`] values. Order is pre-order: a node is emitted, then all of its
//! descendants in declaration order, then its next sibling.
//!
//! Every node is checked before its children are visited, and the walk stops
//! at the first defect. A caller either gets the complete sequence or an error,
//! never a prefix of one.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::params::error::{SchemaError, SchemaResult};
use crate::params::node::{EnumValue, ParamNode};
use crate::params::schema::ParamSchema;
use crate::params::types::ParamType;
use serde::Serialize;
use tracing::{debug, trace};

/// Default nesting limit; real documents stay under five levels.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Walker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Number of nesting levels allowed. Root nodes sit at depth 0, so a
    /// node at depth `max_depth` or deeper fails with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One emitted node with its position in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkEntry<'a> {
    pub node: &'a ParamNode,
    pub depth: usize,
    /// Ancestor names from the root down to this node's parent
    pub path: Vec<String>,
}

impl<'a> WalkEntry<'a> {
    /// Stable key for this row, e.g. `result.callTracer.from`.
    ///
    /// Sibling names may repeat, so keys are not guaranteed unique.
    pub fn key(&self) -> String {
        let mut key = self.path.join(".");
        if !key.is_empty() {
            key.push('.');
        }
        key.push_str(&self.node.name);
        key
    }

    pub fn name(&self) -> &'a str {
        &self.node.name
    }

    pub fn enum_values(&self) -> &'a [EnumValue] {
        self.node.enum_values()
    }
}

/// Flattens parameter trees into render order
#[derive(Debug, Clone, Default)]
pub struct SchemaWalker {
    config: WalkerConfig,
}

impl SchemaWalker {
    /// Create a walker with the default depth limit
    pub fn new() -> Self {
        Self::with_config(WalkerConfig::default())
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::with_config(WalkerConfig { max_depth })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Flatten a schema, honoring its top-level type
    pub fn walk_schema<'a>(&self, schema: &'a ParamSchema) -> SchemaResult<Vec<WalkEntry<'a>>> {
        self.walk(schema.param_type, Some(schema.params.as_slice()))
    }

    /// Flatten root nodes of a schema whose top-level shape is `schema_type`.
    ///
    /// Absent or empty roots, and a `none` schema type, yield an empty list.
    pub fn walk<'a>(
        &self,
        schema_type: ParamType,
        roots: Option<&'a [ParamNode]>,
    ) -> SchemaResult<Vec<WalkEntry<'a>>> {
        let roots = roots.unwrap_or_default();

        if schema_type.is_none() {
            if !roots.is_empty() {
                debug!(
                    ignored = roots.len(),
                    "schema type is 'none'; skipping declared parameters"
                );
            }
            return Ok(Vec::new());
        }

        self.walk_nodes(roots)
    }

    /// Flatten a bare list of root nodes
    pub fn walk_nodes<'a>(&self, roots: &'a [ParamNode]) -> SchemaResult<Vec<WalkEntry<'a>>> {
        let mut entries = Vec::new();
        let mut path = Vec::new();
        self.visit(roots, 0, &mut path, &mut entries)?;

        debug!(rows = entries.len(), "flattened parameter schema");
        Ok(entries)
    }

    /// Check every node without keeping the flattened output
    pub fn validate(&self, schema: &ParamSchema) -> SchemaResult<()> {
        self.walk_schema(schema).map(|_| ())
    }

    fn visit<'a>(
        &self,
        nodes: &'a [ParamNode],
        depth: usize,
        path: &mut Vec<String>,
        entries: &mut Vec<WalkEntry<'a>>,
    ) -> SchemaResult<()> {
        for node in nodes {
            if depth >= self.config.max_depth {
                return Err(SchemaError::DepthExceeded {
                    path: node_path(path, node),
                    max_depth: self.config.max_depth,
                });
            }

            node.check(&node_path(path, node))?;

            trace!(name = %node.name, depth, "visit parameter");
            entries.push(WalkEntry {
                node,
                depth,
                path: path.clone(),
            });

            if node.has_children() {
                path.push(node.name.clone());
                let visited = self.visit(node.children(), depth + 1, path, entries);
                path.pop();
                visited?;
            }
        }

        Ok(())
    }
}

fn node_path(ancestors: &[String], node: &ParamNode) -> Vec<String> {
    let mut path = ancestors.to_vec();
    path.push(node.name.clone());
    path
}

/// Flatten with the default walker
pub fn flatten(schema: &ParamSchema) -> SchemaResult<Vec<WalkEntry<'_>>> {
    SchemaWalker::new().walk_schema(schema)
}
