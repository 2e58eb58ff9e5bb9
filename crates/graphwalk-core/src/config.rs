//! Configuration for graphwalk (stored in ~/.config/graphwalk/config.toml)
//!
//! ```toml
//! [graph]
//! weighted = true
//! directed = false
//!
//! [output]
//! format = "json"
//! ```
//!
//! `[graph]` supplies mode flags for documents that leave them unset.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::format::OutputFormat;
use crate::graph::GraphOptions;

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphOptions,
    pub output: OutputConfig,
}

impl Config {
    /// Default config location, honouring `GRAPHWALK_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// Load an explicit config file, or the default one when it exists.
    ///
    /// A missing explicit path is an error; a missing default file is not.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| GraphError::io_operation("create directory", parent.display(), e))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph, GraphOptions::default());
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[graph]\nweighted = true\n").unwrap();
        assert!(config.graph.weighted);
        assert!(!config.graph.directed);
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            graph: GraphOptions::new(true, true),
            output: OutputConfig {
                format: OutputFormat::Records,
            },
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
        assert_eq!(Config::load_or_default(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_or_default(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, GraphError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_config_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"sideways\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(GraphError::Toml(_))));
    }
}
