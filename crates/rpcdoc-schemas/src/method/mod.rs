//! Method documentation records and the catalog that holds them
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::MethodCatalog;
pub use error::{MethodDocError, MethodDocErrors, MethodDocResult};
pub use record::{CodeSnippet, MethodDoc, Section, SnippetLanguage};
