//! Server configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields a working server.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "GIT_COMMIT_MCP_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    /// Git binary to invoke
    #[serde(default = "default_program")]
    pub program: String,

    /// Abort commands that run longer than this. Unset means no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Variables removed from the child environment
    #[serde(default = "default_env_remove")]
    pub env_remove: Vec<String>,
}

fn default_program() -> String {
    "git".to_string()
}

// Inherited, these would point git at a different repository than the
// working directory the tool was asked to use.
fn default_env_remove() -> Vec<String> {
    vec![
        "GIT_DIR".to_string(),
        "GIT_WORK_TREE".to_string(),
        "GIT_INDEX_FILE".to_string(),
    ]
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: None,
            env_remove: default_env_remove(),
        }
    }
}

impl GitConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from an explicit path or the standard locations
    ///
    /// An explicit path must load. Otherwise these are tried in order and
    /// the first that parses wins:
    /// 1. `./git-commit-mcp.toml`
    /// 2. `$XDG_CONFIG_HOME/git-commit-mcp/config.toml`
    /// 3. `~/.git-commit-mcp.toml`
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        for path in search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => tracing::warn!("Skipping config: {}", e),
            }
        }

        tracing::info!("Using default configuration");
        Ok(Self::default())
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("git-commit-mcp.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("git-commit-mcp").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".git-commit-mcp.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.git.program, "git");
        assert!(config.git.timeout().is_none());
        assert!(config.git.env_remove.contains(&"GIT_DIR".to_string()));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[git]\ntimeout_secs = 15\n").unwrap();
        assert_eq!(config.git.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.git.program, "git");
        assert_eq!(config.git.env_remove.len(), 3);
    }

    #[test]
    fn test_full_file() {
        let config: Config = toml::from_str(
            r#"
            [git]
            program = "/usr/local/bin/git"
            timeout_secs = 60
            env_remove = []
            "#,
        )
        .unwrap();
        assert_eq!(config.git.program, "/usr/local/bin/git");
        assert_eq!(config.git.timeout(), Some(Duration::from_secs(60)));
        assert!(config.git.env_remove.is_empty());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_explicit_path_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[git\nprogram = ").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
