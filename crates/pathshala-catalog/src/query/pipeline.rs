//! The pure filter → search → sort pass.

use pathshala_core::Course;

use super::filter_spec::{FilterSpec, SearchScope};

/// Run `spec` over `courses`, returning matches in result order.
///
/// Filters are conjunctive and applied category, level, language, price,
/// search. The source slice is only borrowed, so this can be re-run with any
/// spec.
pub fn execute<'a>(
    courses: &'a [Course],
    spec: &FilterSpec,
    scope: SearchScope,
) -> Vec<&'a Course> {
    if spec.price_range.is_inverted() {
        return Vec::new();
    }
    let needle = spec.search_needle();

    let mut matched: Vec<&Course> = courses
        .iter()
        .filter(|c| spec.category.matches(c))
        .filter(|c| spec.level.map_or(true, |level| c.level == level))
        .filter(|c| spec.language.map_or(true, |lang| c.language.satisfies(lang)))
        .filter(|c| spec.price_range.contains(c.effective_price()))
        .filter(|c| needle.as_deref().map_or(true, |n| scope.matches(c, n)))
        .collect();

    spec.sort_by.apply(&mut matched);
    matched
}
