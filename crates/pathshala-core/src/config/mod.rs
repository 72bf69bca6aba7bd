pub mod catalog_config;
pub mod logging_config;
pub mod query_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use logging_config::LoggingConfig;
pub use query_config::QueryConfig;

use crate::errors::{CatalogError, CatalogResult};

/// Top-level configuration aggregating all section configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathshalaConfig {
    pub catalog: CatalogConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

impl PathshalaConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
