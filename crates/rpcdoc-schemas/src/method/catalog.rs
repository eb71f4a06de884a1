//! In-memory catalog of method records
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::method::error::{MethodDocError, MethodDocErrors, MethodDocResult};
use crate::method::record::MethodDoc;
use crate::params::SchemaWalker;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Method records keyed by method name, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct MethodCatalog {
    methods: BTreeMap<String, MethodDoc>,
}

impl MethodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record. A name that is already present is rejected and the
    /// existing record is kept.
    pub fn insert(&mut self, doc: MethodDoc) -> MethodDocResult<()> {
        if self.methods.contains_key(&doc.method) {
            warn!(method = %doc.method, "duplicate method definition");
            return Err(MethodDocError::DuplicateMethod { method: doc.method });
        }
        debug!(method = %doc.method, network = %doc.network, "registered method");
        self.methods.insert(doc.method.clone(), doc);
        Ok(())
    }

    pub fn get(&self, method: &str) -> Option<&MethodDoc> {
        self.methods.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodDoc> {
        self.methods.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Records whose network tag matches, ignoring ASCII case
    pub fn by_network<'a>(&'a self, network: &'a str) -> impl Iterator<Item = &'a MethodDoc> + 'a {
        self.methods
            .values()
            .filter(move |doc| doc.network.eq_ignore_ascii_case(network))
    }

    /// Validate every record, collecting all failures instead of stopping at
    /// the first one
    pub fn validate_all(&self, walker: &SchemaWalker) -> Result<(), MethodDocErrors> {
        let mut errors = MethodDocErrors::new();
        for doc in self.methods.values() {
            if let Err(error) = doc.validate_with(walker) {
                errors.add(error);
            }
        }
        errors.into_result()
    }
}

impl IntoIterator for MethodCatalog {
    type Item = MethodDoc;
    type IntoIter = std::collections::btree_map::IntoValues<String, MethodDoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.into_values()
    }
}
