//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use rpcdoc_schemas::{LoaderConfig, MethodCatalog, MethodLoader, WalkerConfig};
use std::path::PathBuf;
use tracing::debug;

/// Paths given on the command line, else `paths.methods` from the config
pub fn resolve_paths(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let resolved = if paths.is_empty() {
        config.paths.methods.clone()
    } else {
        paths.to_vec()
    };

    if resolved.is_empty() {
        return Err(Error::invalid_args(
            "no method definition paths given and `paths.methods` is not configured",
        ));
    }

    for path in &resolved {
        if !path.exists() {
            return Err(Error::FileNotFound { path: path.clone() });
        }
    }

    debug!(paths = ?resolved, "Resolved definition paths");
    Ok(resolved)
}

/// A loader honoring the configured depth limit, or `max_depth` when given
pub fn loader(config: &Config, max_depth: Option<usize>, validate: bool) -> MethodLoader {
    MethodLoader::with_config(LoaderConfig {
        validate,
        walker: WalkerConfig {
            max_depth: max_depth.unwrap_or(config.render.max_depth),
        },
    })
}

/// Every definition file under `paths`, directories expanded in sorted order
pub fn definition_files(loader: &MethodLoader, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(loader.definition_files(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Load and validate a catalog, with a spinner on interactive terminals
pub fn load_catalog(
    paths: &[PathBuf],
    config: &Config,
    max_depth: Option<usize>,
    output: &OutputWriter,
) -> Result<MethodCatalog> {
    let spinner = if config.output.progress {
        output.spinner("Loading method definitions...")
    } else {
        None
    };

    let result = loader(config, max_depth, true).load_catalog(paths);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let catalog = result?;
    debug!(methods = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_paths_prefers_arguments() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.methods = vec![PathBuf::from("configured")];

        let given = vec![dir.path().to_path_buf()];
        assert_eq!(resolve_paths(&given, &config).unwrap(), given);
    }

    #[test]
    fn test_resolve_paths_falls_back_to_config() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        assert!(matches!(
            resolve_paths(&[], &config),
            Err(Error::InvalidArgs(_))
        ));

        config.paths.methods = vec![dir.path().to_path_buf()];
        assert_eq!(
            resolve_paths(&[], &config).unwrap(),
            vec![dir.path().to_path_buf()]
        );

        config.paths.methods = vec![dir.path().join("missing")];
        assert!(matches!(
            resolve_paths(&[], &config),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_loader_depth_override() {
        let config = Config::default();
        assert_eq!(
            loader(&config, None, true).config().walker.max_depth,
            config.render.max_depth
        );
        assert_eq!(loader(&config, Some(3), false).config().walker.max_depth, 3);
        assert!(!loader(&config, Some(3), false).config().validate);
    }

    #[test]
    fn test_definition_files_expands_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.yaml"), "").unwrap();
        std::fs::write(dir.path().join("a.json"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        let single = dir.path().join("b.yaml");

        let files = definition_files(
            &MethodLoader::new(),
            &[dir.path().to_path_buf(), single.clone()],
        )
        .unwrap();
        assert_eq!(files, vec![dir.path().join("a.json"), single.clone(), single]);
    }
}
