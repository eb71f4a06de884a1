//! Parameter type tags and their display labels
//!
//! The registry table below is the only place tags and labels are declared.
//! Parsing, serialization, and label lookup all read from it.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::params::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of documented parameter shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ParamType {
    None,
    String,
    Integer,
    Uint64,
    Boolean,
    Object,
    Array,
    ArrayOfStrings,
    ArrayOfObjects,
    MapStringString,
}

/// One registry row: the type, its wire tag, and its display label.
struct RegistryEntry {
    param_type: ParamType,
    tag: &'static str,
    label: &'static str,
}

const REGISTRY: [RegistryEntry; 10] = [
    RegistryEntry { param_type: ParamType::None, tag: "none", label: "none" },
    RegistryEntry { param_type: ParamType::String, tag: "string", label: "string" },
    RegistryEntry { param_type: ParamType::Integer, tag: "integer", label: "integer" },
    RegistryEntry { param_type: ParamType::Uint64, tag: "uint64", label: "uint64" },
    RegistryEntry { param_type: ParamType::Boolean, tag: "boolean", label: "boolean" },
    RegistryEntry { param_type: ParamType::Object, tag: "object", label: "object" },
    RegistryEntry { param_type: ParamType::Array, tag: "array", label: "array" },
    RegistryEntry {
        param_type: ParamType::ArrayOfStrings,
        tag: "array_of_strings",
        label: "array of strings",
    },
    RegistryEntry {
        param_type: ParamType::ArrayOfObjects,
        tag: "array_of_objects",
        label: "array of objects",
    },
    RegistryEntry {
        param_type: ParamType::MapStringString,
        tag: "map[string]string",
        label: "map<string, string>",
    },
];

impl ParamType {
    /// Every recognized type, in registry order
    pub fn all() -> impl Iterator<Item = ParamType> {
        REGISTRY.iter().map(|entry| entry.param_type)
    }

    fn entry(self) -> &'static RegistryEntry {
        // REGISTRY is declared in variant order
        &REGISTRY[self as usize]
    }

    /// Wire tag used in method definition files
    pub fn tag(self) -> &'static str {
        self.entry().tag
    }

    /// Human-readable label shown next to a parameter name
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Parse a wire tag, rejecting anything outside the registry
    pub fn from_tag(tag: &str) -> SchemaResult<Self> {
        REGISTRY
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.param_type)
            .ok_or_else(|| SchemaError::unknown_type(tag))
    }

    /// Whether nodes of this type may carry children
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            ParamType::Object | ParamType::Array | ParamType::ArrayOfObjects | ParamType::MapStringString
        )
    }

    /// Whether this type means "no structured value"
    pub fn is_none(self) -> bool {
        self == ParamType::None
    }
}

/// Resolve the display label for a raw type tag.
///
/// Unknown tags fail with [`SchemaError::UnknownType`]; no fallback label is guessed.
pub fn label_for(tag: &str) -> SchemaResult<&'static str> {
    ParamType::from_tag(tag).map(ParamType::label)
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ParamType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl TryFrom<String> for ParamType {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_tag(&value)
    }
}

impl From<ParamType> for &'static str {
    fn from(value: ParamType) -> Self {
        value.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_variants() {
        for (index, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(entry.param_type as usize, index, "registry row {} out of order", entry.tag);
        }
    }

    #[test]
    fn test_every_type_has_label() {
        for param_type in ParamType::all() {
            assert!(!param_type.label().is_empty());
            assert_eq!(label_for(param_type.tag()).unwrap(), param_type.label());
        }
        assert_eq!(ParamType::all().count(), 10);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        for tag in ["", "String", "address", "array_of_numbers", "map[string]int"] {
            let error = label_for(tag).unwrap_err();
            assert_eq!(error, SchemaError::unknown_type(tag));
        }
    }

    #[test]
    fn test_map_tag_roundtrips_through_serde() {
        let parsed: ParamType = serde_json::from_str("\"map[string]string\"").unwrap();
        assert_eq!(parsed, ParamType::MapStringString);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"map[string]string\"");

        let error = serde_json::from_str::<ParamType>("\"bytes\"").unwrap_err();
        assert!(error.to_string().contains("Unknown parameter type 'bytes'"));
    }

    #[test]
    fn test_composite_classification() {
        let composite: Vec<_> = ParamType::all().filter(|t| t.is_composite()).collect();
        assert_eq!(
            composite,
            vec![
                ParamType::Object,
                ParamType::Array,
                ParamType::ArrayOfObjects,
                ParamType::MapStringString
            ]
        );
        assert!(!ParamType::ArrayOfStrings.is_composite());
        assert!(ParamType::None.is_none());
    }
}
