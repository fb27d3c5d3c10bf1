//! Configuration for trellis
//!
//! Loaded from `config.toml` under the platform config directory
//! (override the directory with `TRELLIS_CONFIG_DIR`). All fields are
//! optional; an absent file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrellisError};
use crate::graph::TraversalOptions;

pub use types::{TraversalConfig, TrellisConfig};

const CONFIG_DIR: &str = "trellis";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TRELLIS_CONFIG_DIR";

impl TrellisConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TrellisError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from the discovered path, falling back to
    /// defaults when no file exists
    pub fn load_default() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TrellisConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TrellisError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject limits that would make every traversal empty
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("traversal.max_depth", self.traversal.max_depth),
            ("traversal.max_nodes", self.traversal.max_nodes),
            ("traversal.max_fanout", self.traversal.max_fanout),
        ] {
            if value == Some(0) {
                return Err(TrellisError::invalid_value(name, 0));
            }
        }
        Ok(())
    }

    /// Traversal options seeded from the configured limits
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            max_depth: self.traversal.max_depth,
            max_nodes: self.traversal.max_nodes,
            max_fanout: self.traversal.max_fanout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TrellisConfig::default();
        assert!(config.traversal.max_depth.is_none());
        assert!(config.traversal.max_nodes.is_none());
        assert!(config.traversal.max_fanout.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = TrellisConfig {
            traversal: TraversalConfig {
                max_depth: Some(3),
                max_nodes: Some(100),
                max_fanout: None,
            },
        };
        config.save(&path).unwrap();

        let loaded = TrellisConfig::load(&path).unwrap();
        assert_eq!(loaded.traversal.max_depth, Some(3));
        assert_eq!(loaded.traversal.max_nodes, Some(100));
        assert!(loaded.traversal.max_fanout.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[traversal]\nmax_depth = 2\n").unwrap();

        let loaded = TrellisConfig::load(&path).unwrap();
        assert_eq!(loaded.traversal.max_depth, Some(2));
        assert!(loaded.traversal.max_nodes.is_none());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[traversal]\nmax_nodes = 0\n").unwrap();

        let err = TrellisConfig::load(&path).unwrap_err();
        assert!(matches!(err, TrellisError::InvalidValue { .. }));
    }

    #[test]
    fn test_traversal_options_from_config() {
        let config = TrellisConfig {
            traversal: TraversalConfig {
                max_depth: Some(4),
                max_nodes: None,
                max_fanout: Some(8),
            },
        };

        let opts = config.traversal_options();
        assert_eq!(opts.max_depth, Some(4));
        assert!(opts.max_nodes.is_none());
        assert_eq!(opts.max_fanout, Some(8));
    }
}
