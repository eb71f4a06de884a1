//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments, which override file values per command

use crate::error::{Error, Result};
use rpcdoc_schemas::{GeneratorConfig, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page rendering settings
    pub render: RenderSettings,

    /// Output settings
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LoggingSettings,

    /// Path settings
    pub paths: PathSettings,
}

/// Page rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Nesting limit for parameter trees
    pub max_depth: usize,

    /// Spaces of indentation per nesting level
    pub indent_width: usize,

    /// Include a table of contents
    pub toc: bool,

    /// Include code samples
    pub snippets: bool,

    /// Include the literal example response
    pub response_example: bool,

    /// List the JSON-RPC envelope fields above request params
    pub envelope: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format used when `-o` is not given (human, json, json-pretty, yaml)
    pub format: Option<String>,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level used when no `-v` flag is given
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// Path configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Files or directories read when a command is given no paths
    pub methods: Vec<PathBuf>,

    /// Directory rendered pages are written to when `--save-to` is a directory
    pub output_dir: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            indent_width: 2,
            toc: true,
            snippets: true,
            response_example: true,
            envelope: true,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}

impl RenderSettings {
    /// Generator settings with these values
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            include_toc: self.toc,
            include_snippets: self.snippets,
            include_response_example: self.response_example,
            include_envelope: self.envelope,
            indent_width: self.indent_width,
            max_depth: self.max_depth,
        }
    }
}

/// Config file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Yaml,
    Json,
    Toml,
}

impl FileKind {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileKind::Yaml),
            Some("json") => Ok(FileKind::Json),
            Some("toml") => Ok(FileKind::Toml),
            _ => Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "yaml, json, or toml".to_string(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let kind = FileKind::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config = match kind {
            FileKind::Yaml => serde_yaml::from_str(&content)?,
            FileKind::Json => serde_json::from_str(&content)?,
            FileKind::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
        };

        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".rpcdoc.yaml"),
            PathBuf::from(".rpcdoc.json"),
            PathBuf::from(".rpcdoc.toml"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let rpcdoc_dir = config_dir.join("rpcdoc");
            paths.push(rpcdoc_dir.join("config.yaml"));
            paths.push(rpcdoc_dir.join("config.json"));
            paths.push(rpcdoc_dir.join("config.toml"));
        }

        paths
    }

    /// Serialize in the syntax matching `path`'s extension
    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        match FileKind::from_path(path)? {
            FileKind::Yaml => Ok(serde_yaml::to_string(self)?),
            FileKind::Json => Ok(serde_json::to_string_pretty(self)?),
            FileKind::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize TOML: {}", e))),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_for(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rpcdoc.yaml");
        std::fs::write(&path, "render:\n  max_depth: 8\npaths:\n  methods: [docs/methods]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.render.max_depth, 8);
        assert_eq!(config.render.indent_width, 2);
        assert!(config.render.toc);
        assert_eq!(config.paths.methods, vec![PathBuf::from("docs/methods")]);
    }

    #[test]
    fn test_roundtrip_every_syntax() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.render.snippets = false;
        config.logging.format = Some("json".to_string());

        for name in ["c.yaml", "c.json", "c.toml"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(Config::from_file(&path).unwrap(), config, "{name}");
        }
    }

    #[test]
    fn test_missing_and_unsupported_files() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::from_file(&dir.path().join("absent.yaml")),
            Err(Error::FileNotFound { .. })
        ));

        let ini = dir.path().join("config.ini");
        std::fs::write(&ini, "x=1").unwrap();
        assert!(matches!(Config::from_file(&ini), Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_generator_config_mapping() {
        let settings = RenderSettings {
            toc: false,
            max_depth: 3,
            ..RenderSettings::default()
        };
        let generator = settings.generator_config();
        assert!(!generator.include_toc);
        assert!(generator.include_envelope);
        assert_eq!(generator.max_depth, 3);
    }
}
