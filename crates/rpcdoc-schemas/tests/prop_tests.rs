//! Property-based tests for parameter tree flattening
//!
//! These tests verify that the walker and renderer behave correctly
//! across a wide range of generated trees.

use proptest::prelude::*;
use rpcdoc_schemas::documentation::ParamRenderer;
use rpcdoc_schemas::{label_for, EnumValue, ParamNode, ParamSchema, ParamType, SchemaWalker};

/// Strategy for scalar type tags
fn scalar_type_strategy() -> impl Strategy<Value = ParamType> {
    prop_oneof![
        Just(ParamType::String),
        Just(ParamType::Integer),
        Just(ParamType::Uint64),
        Just(ParamType::Boolean),
        Just(ParamType::ArrayOfStrings),
    ]
}

/// Strategy for composite type tags
fn composite_type_strategy() -> impl Strategy<Value = ParamType> {
    prop_oneof![
        Just(ParamType::Object),
        Just(ParamType::Array),
        Just(ParamType::ArrayOfObjects),
        Just(ParamType::MapStringString),
    ]
}

/// Strategy for enum options with at most one default
fn enum_strategy() -> impl Strategy<Value = Vec<EnumValue>> {
    (proptest::collection::vec("[a-z]{1,8}", 0..4), any::<prop::sample::Index>()).prop_map(
        |(values, default)| {
            let pick = (!values.is_empty()).then(|| default.index(values.len()));
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| {
                    let option = EnumValue::new(value, "option");
                    if Some(i) == pick {
                        option.default_value()
                    } else {
                        option
                    }
                })
                .collect()
        },
    )
}

/// Strategy for well-formed parameter trees
fn node_strategy() -> impl Strategy<Value = ParamNode> {
    let leaf = ("[a-zA-Z][a-zA-Z0-9]{0,12}", scalar_type_strategy(), enum_strategy()).prop_map(
        |(name, param_type, options)| {
            let node = ParamNode::new(name, param_type);
            if options.is_empty() {
                node
            } else {
                node.with_enum(options)
            }
        },
    );

    leaf.prop_recursive(
        4,  // max depth
        32, // max size
        5,  // items per collection
        |inner| {
            (
                "[a-zA-Z][a-zA-Z0-9]{0,12}",
                composite_type_strategy(),
                proptest::collection::vec(inner, 0..5),
            )
                .prop_map(|(name, param_type, children)| {
                    ParamNode::new(name, param_type).with_children(ParamType::Object, children)
                })
        },
    )
}

fn schema_strategy() -> impl Strategy<Value = ParamSchema> {
    proptest::collection::vec(node_strategy(), 0..5)
        .prop_map(|roots| ParamSchema::new(ParamType::Array, roots))
}

/// Reference pre-order listing, written independently of the walker
fn preorder(nodes: &[ParamNode], depth: usize, out: &mut Vec<(String, usize)>) {
    for node in nodes {
        out.push((node.name.clone(), depth));
        preorder(node.children(), depth + 1, out);
    }
}

fn tree_height(nodes: &[ParamNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + tree_height(node.children()))
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn walk_preserves_declaration_order(schema in schema_strategy()) {
        let entries = SchemaWalker::new().walk_schema(&schema).unwrap();
        let walked: Vec<_> = entries.iter().map(|e| (e.node.name.clone(), e.depth)).collect();

        let mut expected = Vec::new();
        preorder(&schema.params, 0, &mut expected);
        prop_assert_eq!(walked, expected);
        prop_assert_eq!(entries.len(), schema.node_count());
    }

    #[test]
    fn path_length_matches_depth(schema in schema_strategy()) {
        for entry in SchemaWalker::new().walk_schema(&schema).unwrap() {
            prop_assert_eq!(entry.path.len(), entry.depth);
        }
    }

    #[test]
    fn walking_is_idempotent(schema in schema_strategy()) {
        let walker = SchemaWalker::new();
        prop_assert_eq!(walker.walk_schema(&schema).unwrap(), walker.walk_schema(&schema).unwrap());
    }

    #[test]
    fn depth_limit_is_exact(schema in schema_strategy()) {
        let height = tree_height(&schema.params);
        prop_assert!(SchemaWalker::with_max_depth(height).walk_schema(&schema).is_ok());
        if height > 0 {
            prop_assert!(SchemaWalker::with_max_depth(height - 1).walk_schema(&schema).is_err());
        }
    }

    #[test]
    fn none_schema_is_always_empty(schema in schema_strategy()) {
        let none = ParamSchema::new(ParamType::None, schema.params);
        prop_assert!(SchemaWalker::new().walk_schema(&none).unwrap().is_empty());
    }

    #[test]
    fn renderer_marks_at_most_one_default(schema in schema_strategy()) {
        let rows = ParamRenderer::new()
            .render_schema(&SchemaWalker::new(), &schema)
            .unwrap();
        for row in rows {
            prop_assert!(row.enum_options.iter().filter(|o| o.is_default).count() <= 1);
            prop_assert_eq!(row.indent.len(), row.depth * 2);
        }
    }

    #[test]
    fn label_lookup_never_panics(tag in ".{0,24}") {
        match label_for(&tag) {
            Ok(label) => prop_assert!(!label.is_empty()),
            Err(error) => prop_assert!(error.to_string().contains("Unknown parameter type")),
        }
    }

    #[test]
    fn arbitrary_json_never_panics(value in json_value_strategy()) {
        let _ = serde_json::from_value::<ParamNode>(value);
    }
}

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = serde_json::Value> {
    use serde_json::Value;

    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z_ \\[\\]]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 5, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            proptest::collection::hash_map(
                prop_oneof![
                    Just("name".to_string()),
                    Just("type".to_string()),
                    Just("children".to_string()),
                    Just("enumValues".to_string()),
                    "[a-z]{1,8}",
                ],
                inner,
                0..5
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}
