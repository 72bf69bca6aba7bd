//! Shared constants.

/// Token the UI uses for "no filtering" on any enumerated selector.
pub const ALL_TOKEN: &str = "all";

/// Upper bound of the price slider on the catalog page, in rupees.
pub const DEFAULT_MAX_PRICE: u32 = 50_000;

/// Number of courses shown on a home-page shelf.
pub const DEFAULT_SHELF_LIMIT: usize = 4;

/// Number of reviews shown on a course detail page.
pub const DEFAULT_REVIEW_LIMIT: usize = 5;

/// Highest rating a course or review can carry.
pub const MAX_RATING: f64 = 5.0;

/// Separator used in category slugs (`web-development`).
pub const SLUG_SEPARATOR: char = '-';

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";
