//! Catalog query defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_PRICE, DEFAULT_REVIEW_LIMIT, DEFAULT_SHELF_LIMIT};

/// Defaults applied when a query leaves a selection unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Lower bound of the initial price range, in rupees.
    pub default_min_price: u32,
    /// Upper bound of the initial price range, in rupees.
    pub default_max_price: u32,
    /// Match search text against descriptions as well as titles.
    pub search_description: bool,
    /// Courses per home-page shelf.
    pub shelf_limit: usize,
    /// Reviews shown on a course detail page.
    pub review_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_min_price: 0,
            default_max_price: DEFAULT_MAX_PRICE,
            search_description: false,
            shelf_limit: DEFAULT_SHELF_LIMIT,
            review_limit: DEFAULT_REVIEW_LIMIT,
        }
    }
}
