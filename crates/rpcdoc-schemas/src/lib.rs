//! Rpcdoc Schemas - parameter documentation model for JSON-RPC methods
//!
//! This crate models the request and response parameters of JSON-RPC methods
//! and turns them into reference documentation:
//! - **ParamType**: the closed registry of parameter type tags and labels
//! - **ParamNode**: a recursive, ordered tree of documented fields
//! - **SchemaWalker**: validates a tree and flattens it into render order
//! - **ParamRenderer**: turns flattened entries into display rows
//!
//! ## Features
//!
//! - **Strict Type Tags**: unknown tags are rejected at parse time
//! - **Structural Checks**: scalar/composite rules, enum defaults, depth limits
//! - **Deterministic Output**: declaration order is preserved at every level
//! - **Method Records**: load JSON or YAML definitions into a catalog
//! - **Markdown Pages**: one reference page per method
//!
//! ## Quick Start
//!
//! ```rust
//! use rpcdoc_schemas::{ParamNode, ParamSchema, ParamType, SchemaWalker};
//!
//! let schema = ParamSchema::new(
//!     ParamType::Array,
//!     vec![ParamNode::new("tracer", ParamType::Object).with_children(
//!         ParamType::Object,
//!         vec![ParamNode::new("tracerConfig", ParamType::Object).with_children(
//!             ParamType::Boolean,
//!             vec![ParamNode::new("onlyTopCall", ParamType::Boolean)],
//!         )],
//!     )],
//! );
//!
//! let entries = SchemaWalker::new().walk_schema(&schema).unwrap();
//! let depths: Vec<_> = entries.iter().map(|e| e.depth).collect();
//! assert_eq!(depths, vec![0, 1, 2]);
//! ```
//!
//! ## Structural Rules
//!
//! - A node with children must have a composite type
//! - A node may carry enum values or children, never both
//! - At most one enum value is marked as the default
//! - Names are non-empty; sibling names may repeat
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod loader;
pub mod method;
pub mod params;

// Re-export commonly used types for convenience
pub use documentation::{
    generate_page, DocGenerator, GeneratorConfig, GeneratorError, ParamRenderer, ParamRow,
};
pub use loader::{LoaderConfig, LoaderError, MethodLoader};
pub use method::{
    CodeSnippet, MethodCatalog, MethodDoc, MethodDocError, MethodDocErrors, Section,
    SnippetLanguage,
};
pub use params::{
    flatten, label_for, EnumValue, ParamNode, ParamSchema, ParamType, SchemaError, SchemaResult,
    SchemaWalker, WalkEntry, WalkerConfig, DEFAULT_MAX_DEPTH,
};
