//! Loading method definitions from disk
//!
//! This module provides:
//! - YAML and JSON parsing, with format detection by extension
//! - Single-record, list, and `methods` wrapper documents
//! - Deterministic directory scans
//! - Duplicate detection across files
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use rpcdoc_schemas::loader::MethodLoader;
//!
//! let catalog = MethodLoader::new().load_catalog(&["methods/"])?;
//! for doc in catalog.iter() {
//!     println!("{} ({})", doc.method, doc.network);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod method_loader;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use method_loader::{LoaderConfig, MethodLoader};
pub use parser::{DocumentParser, Format};
