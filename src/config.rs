use crate::constants::DEFAULT_CONFIG_PATHS;
use crate::indexer::{DirectoryEntries, IndexOptions, SortOrder};
use crate::utils;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Root directories, walked in this order
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default)]
    pub directory_entries: DirectoryEntries,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        for raw in DEFAULT_CONFIG_PATHS {
            let path = PathBuf::from(utils::expand_path(raw));
            if path.exists() {
                tracing::debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load from an explicit file when given, otherwise from the default locations
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Configured roots with `~` and environment variables expanded
    pub fn root_paths(&self) -> Vec<PathBuf> {
        self.index
            .paths
            .iter()
            .map(|raw| PathBuf::from(utils::expand_path(raw)))
            .collect()
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            sort: self.index.sort,
            directory_entries: self.index.directory_entries,
        }
    }
}
