//! Parameter schema model and traversal
//!
//! This module holds the core of the documentation model:
//! - **Registry**: the closed set of [`ParamType`] tags and their labels
//! - **Nodes**: the recursive [`ParamNode`] record and its enum options
//! - **Walker**: [`SchemaWalker`], which validates and flattens a tree
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod node;
pub mod schema;
pub mod types;
pub mod walker;

pub use error::{display_path, SchemaError, SchemaResult, Violation};
pub use node::{EnumValue, ParamNode};
pub use schema::ParamSchema;
pub use types::{label_for, ParamType};
pub use walker::{flatten, SchemaWalker, WalkEntry, WalkerConfig, DEFAULT_MAX_DEPTH};
