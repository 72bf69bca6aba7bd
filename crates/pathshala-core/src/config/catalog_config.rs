//! Data source configuration.

use serde::{Deserialize, Serialize};

/// Where the catalog data set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a JSON data file. `None` = the data set compiled into the binary.
    pub data_path: Option<String>,
    /// Warn when a category's stored course count disagrees with the collection. Default: true.
    pub check_category_counts: Option<bool>,
}

impl CatalogConfig {
    pub fn effective_check_category_counts(&self) -> bool {
        self.check_category_counts.unwrap_or(true)
    }
}
