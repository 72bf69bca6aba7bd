//! Category preselection from a URL parameter.

use tracing::debug;

use pathshala_core::constants::ALL_TOKEN;
use pathshala_core::types::category_slug;
use pathshala_core::Category;

use super::filter_spec::CategoryFilter;

/// Map a human-readable category name (`web-development`, `Web Development`)
/// to a category filter.
///
/// Both sides are normalized with [`category_slug`]. No match falls back to
/// [`CategoryFilter::All`].
pub fn resolve_category_param(raw: &str, categories: &[Category]) -> CategoryFilter {
    let wanted = category_slug(raw);
    if wanted.is_empty() || wanted == ALL_TOKEN {
        return CategoryFilter::All;
    }
    match categories.iter().find(|c| category_slug(&c.name) == wanted) {
        Some(category) => CategoryFilter::Id(category.id.clone()),
        None => {
            debug!(param = raw, "no category matches, showing all");
            CategoryFilter::All
        }
    }
}
