//! The single value that drives one catalog query.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use pathshala_core::config::QueryConfig;
use pathshala_core::constants::{ALL_TOKEN, DEFAULT_MAX_PRICE};
use pathshala_core::{CatalogError, Category, Course, Language, Level};

use super::preselect::resolve_category_param;

/// Category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => course.category.id == *id,
        }
    }
}

/// Inclusive effective-price bounds, in rupees. `min > max` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Every price passes.
    pub const fn unbounded() -> Self {
        Self::new(0, u32::MAX)
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    /// The catalog page slider's initial position.
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_PRICE)
    }
}

/// Result ordering. Every order is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Collection order, which is newest first.
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
    /// Most enrolled students first.
    Popular,
    /// Highest rating first.
    Rating,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        Self::Newest,
        Self::PriceLowHigh,
        Self::PriceHighLow,
        Self::Popular,
        Self::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
            Self::Popular => "popular",
            Self::Rating => "rating",
        }
    }

    /// Reorder in place. Equal keys keep their relative order.
    pub fn apply(&self, courses: &mut [&Course]) {
        match self {
            Self::Newest => {}
            Self::PriceLowHigh => courses.sort_by_key(|c| c.effective_price()),
            Self::PriceHighLow => {
                courses.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()))
            }
            Self::Popular => courses.sort_by(|a, b| b.enrolled_students.cmp(&a.enrolled_students)),
            // NaN is rejected at load, and -0.0 must tie with 0.0.
            Self::Rating => courses.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }
    }
}

impl FromStr for SortBy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == token)
            .ok_or_else(|| CatalogError::unknown("sort", s))
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which course text a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    Title,
    TitleAndDescription,
}

impl SearchScope {
    /// `needle` must already be lower-cased.
    pub fn matches(&self, course: &Course, needle: &str) -> bool {
        course.title.to_lowercase().contains(needle)
            || (*self == Self::TitleAndDescription
                && course.description.to_lowercase().contains(needle))
    }
}

/// Combined category, level, language, price, search, and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub category: CategoryFilter,
    /// `None` = all levels.
    pub level: Option<Level>,
    /// `None` = all languages. `Both` courses pass any specific language.
    pub language: Option<Language>,
    pub price_range: PriceRange,
    /// Case-insensitive substring. Blank = no search filter.
    pub search: String,
    pub sort_by: SortBy,
}

impl FilterSpec {
    /// Nothing filtered, any price, collection order.
    pub fn unrestricted() -> Self {
        Self {
            price_range: PriceRange::unbounded(),
            ..Self::default()
        }
    }

    /// Initial selection of the catalog page under `config`.
    pub fn with_defaults(config: &QueryConfig) -> Self {
        Self {
            price_range: PriceRange::new(config.default_min_price, config.default_max_price),
            ..Self::default()
        }
    }

    /// Trimmed, lower-cased search text, or `None` when blank.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Build a spec from URL query parameters.
    ///
    /// Recognized keys: `category`, `level`, `language`, `min_price`,
    /// `max_price`, `q`, `sort`. Unknown keys are ignored; unparseable values
    /// keep the default from `config` and are logged, never raised.
    pub fn from_query_params<I, K, V>(
        params: I,
        categories: &[Category],
        config: &QueryConfig,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = Self::with_defaults(config);
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "category" => spec.category = resolve_category_param(value, categories),
                "level" => spec.level = lenient_choice("level", value),
                "language" => spec.language = lenient_choice("language", value),
                "min_price" => {
                    if let Some(min) = lenient_price("min_price", value) {
                        spec.price_range.min = min;
                    }
                }
                "max_price" => {
                    if let Some(max) = lenient_price("max_price", value) {
                        spec.price_range.max = max;
                    }
                }
                "q" => spec.search = value.to_string(),
                "sort" => {
                    spec.sort_by = value.parse().unwrap_or_else(|e: CatalogError| {
                        debug!(error = %e, "falling back to newest");
                        SortBy::Newest
                    })
                }
                other => debug!(key = other, "ignoring unknown query parameter"),
            }
        }
        spec
    }
}

/// `"all"` or blank means no filter; unknown tokens also mean no filter.
fn lenient_choice<T>(field: &'static str, value: &str) -> Option<T>
where
    T: FromStr<Err = CatalogError>,
{
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_TOKEN) {
        return None;
    }
    match value.parse() {
        Ok(choice) => Some(choice),
        Err(e) => {
            debug!(field, error = %e, "falling back to all");
            None
        }
    }
}

fn lenient_price(field: &'static str, value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(price) => Some(price),
        Err(e) => {
            debug!(field, value, error = %e, "ignoring unparseable price");
            None
        }
    }
}
