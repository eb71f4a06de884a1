//! Render-ready parameter rows
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::params::{ParamSchema, SchemaResult, SchemaWalker, WalkEntry};
use serde::Serialize;

/// One displayed enumeration option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    pub value: String,
    pub description: Option<String>,
    pub is_default: bool,
}

/// One displayed parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamRow {
    pub depth: usize,
    /// Leading whitespace, `depth * indent_width` spaces
    pub indent: String,
    pub name: String,
    pub type_label: &'static str,
    pub description: Option<String>,
    pub enum_options: Vec<EnumOption>,
}

impl ParamRow {
    /// The option marked as default, if any
    pub fn default_option(&self) -> Option<&EnumOption> {
        self.enum_options.iter().find(|option| option.is_default)
    }
}

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// Spaces of indentation per nesting level
    pub indent_width: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// Turns walker output into display rows.
///
/// Entries are trusted as-is; validation is the walker's job.
#[derive(Debug, Clone, Default)]
pub struct ParamRenderer {
    config: RendererConfig,
}

impl ParamRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        Self::with_config(RendererConfig { indent_width })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn render_entry(&self, entry: &WalkEntry<'_>) -> ParamRow {
        let node = entry.node;
        ParamRow {
            depth: entry.depth,
            indent: " ".repeat(entry.depth * self.config.indent_width),
            name: node.name.clone(),
            type_label: node.param_type.label(),
            description: node.description.clone(),
            enum_options: node
                .enum_values()
                .iter()
                .map(|option| EnumOption {
                    value: option.value.clone(),
                    description: option.description.clone(),
                    is_default: option.is_default,
                })
                .collect(),
        }
    }

    pub fn render(&self, entries: &[WalkEntry<'_>]) -> Vec<ParamRow> {
        entries.iter().map(|entry| self.render_entry(entry)).collect()
    }

    /// Walk and render a schema in one step
    pub fn render_schema(
        &self,
        walker: &SchemaWalker,
        schema: &ParamSchema,
    ) -> SchemaResult<Vec<ParamRow>> {
        let entries = walker.walk_schema(schema)?;
        Ok(self.render(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{EnumValue, ParamNode, ParamType};

    fn block_tag() -> ParamNode {
        ParamNode::new("blockNumber", ParamType::String)
            .with_description("block tag")
            .with_enum(vec![
                EnumValue::new("latest", "the most recent block").default_value(),
                EnumValue::new("earliest", "the genesis block"),
            ])
    }

    #[test]
    fn test_rows_carry_labels_and_indent() {
        let schema = ParamSchema::new(
            ParamType::Object,
            vec![ParamNode::new("result", ParamType::ArrayOfObjects).with_children(
                ParamType::Object,
                vec![ParamNode::new("extra", ParamType::MapStringString)],
            )],
        );

        let rows = ParamRenderer::with_indent_width(4)
            .render_schema(&SchemaWalker::new(), &schema)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].type_label, "array of objects");
        assert_eq!(rows[0].indent, "");
        assert_eq!(rows[1].type_label, "map<string, string>");
        assert_eq!(rows[1].indent, "    ");
    }

    #[test]
    fn test_default_enum_option_marked() {
        let schema = ParamSchema::new(ParamType::Array, vec![block_tag()]);
        let rows = ParamRenderer::new()
            .render_schema(&SchemaWalker::new(), &schema)
            .unwrap();

        let row = &rows[0];
        assert_eq!(row.enum_options.len(), 2);
        assert_eq!(row.default_option().unwrap().value, "latest");
        assert!(!row.enum_options[1].is_default);
        assert_eq!(row.description.as_deref(), Some("block tag"));
    }
}
