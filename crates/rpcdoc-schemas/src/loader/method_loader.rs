//! Loading method definitions from files and directories into a catalog
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{DocumentParser, Format},
};
use crate::method::{MethodCatalog, MethodDoc};
use crate::params::{SchemaWalker, WalkerConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for loader behavior
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Validate every record as it is loaded
    pub validate: bool,
    /// Walker limits used for validation
    pub walker: WalkerConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            validate: true,
            walker: WalkerConfig::default(),
        }
    }
}

/// Reads method definition files and builds a [`MethodCatalog`]
#[derive(Debug, Default)]
pub struct MethodLoader {
    config: LoaderConfig,
    parser: DocumentParser,
}

impl MethodLoader {
    /// Create a loader with default configuration
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            parser: DocumentParser::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load every record from one file
    pub fn load_file(&self, path: &Path) -> LoaderResult<Vec<MethodDoc>> {
        let docs = self.parser.parse_file(path)?;

        if self.config.validate {
            let walker = SchemaWalker::with_config(self.config.walker);
            for doc in &docs {
                doc.validate_with(&walker)
                    .map_err(|e| LoaderError::validation_error(path, e))?;
            }
        }

        debug!(path = %path.display(), records = docs.len(), "loaded definition file");
        Ok(docs)
    }

    /// Load every supported file directly inside `dir`, in sorted path order.
    /// Subdirectories are not visited.
    pub fn load_dir(&self, dir: &Path) -> LoaderResult<Vec<(PathBuf, Vec<MethodDoc>)>> {
        self.definition_files(dir)?
            .into_iter()
            .map(|path| {
                let docs = self.load_file(&path)?;
                Ok((path, docs))
            })
            .collect()
    }

    /// Supported files directly inside `dir`, sorted
    pub fn definition_files(&self, dir: &Path) -> LoaderResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| LoaderError::io_error(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LoaderError::io_error(dir, e))?.path();
            if path.is_file() && Format::is_supported(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Load files and directories into one catalog.
    ///
    /// Fails on the first unreadable or invalid file, or when two sources
    /// define the same method.
    pub fn load_catalog<P: AsRef<Path>>(&self, paths: &[P]) -> LoaderResult<MethodCatalog> {
        let mut catalog = MethodCatalog::new();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();

        for path in paths {
            let path = path.as_ref();
            let loaded = if path.is_dir() {
                self.load_dir(path)?
            } else {
                vec![(path.to_path_buf(), self.load_file(path)?)]
            };

            for (file, docs) in loaded {
                for doc in docs {
                    if let Some(first) = sources.get(&doc.method) {
                        return Err(LoaderError::DuplicateMethod {
                            method: doc.method,
                            first: first.clone(),
                            second: file,
                        });
                    }
                    sources.insert(doc.method.clone(), file.clone());
                    catalog
                        .insert(doc)
                        .map_err(|e| LoaderError::validation_error(&file, e))?;
                }
            }
        }

        info!(methods = catalog.len(), "loaded method catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CHAIN_ID: &str = r#"
method: eth_chainId
network: ethereum
cu: 0
"#;

    const BLOCK_NUMBER: &str = r#"{"method": "eth_blockNumber", "network": "ethereum", "cu": 10}"#;

    #[test]
    fn test_load_dir_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.yaml"), CHAIN_ID).unwrap();
        fs::write(dir.path().join("a.json"), BLOCK_NUMBER).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.json"), BLOCK_NUMBER).unwrap();

        let loaded = MethodLoader::new().load_dir(dir.path()).unwrap();
        let names: Vec<_> = loaded
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.yaml"]);
    }

    #[test]
    fn test_duplicate_across_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.yaml"), CHAIN_ID).unwrap();
        fs::write(dir.path().join("b.yaml"), CHAIN_ID).unwrap();

        let error = MethodLoader::new().load_catalog(&[dir.path()]).unwrap_err();
        match error {
            LoaderError::DuplicateMethod { method, first, second } => {
                assert_eq!(method, "eth_chainId");
                assert!(first.ends_with("a.yaml"));
                assert!(second.ends_with("b.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, r#"{"method": "eth_blank"}"#).unwrap();

        let error = MethodLoader::new().load_file(&path).unwrap_err();
        assert!(matches!(error, LoaderError::ValidationError { .. }));

        let lenient = MethodLoader::with_config(LoaderConfig {
            validate: false,
            ..LoaderConfig::default()
        });
        assert_eq!(lenient.load_file(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let error = MethodLoader::new()
            .load_file(Path::new("/nonexistent/eth_chainId.yaml"))
            .unwrap_err();
        assert!(matches!(error, LoaderError::IoError { .. }));
    }
}
