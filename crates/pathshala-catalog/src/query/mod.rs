//! Catalog query engine: filter, search, and sort over the course collection.

pub mod filter_spec;
pub mod pipeline;
pub mod preselect;

pub use filter_spec::{CategoryFilter, FilterSpec, PriceRange, SearchScope, SortBy};
pub use pipeline::execute;
pub use preselect::resolve_category_param;

use std::sync::Arc;

use tracing::debug;

use pathshala_core::config::QueryConfig;
use pathshala_core::{CatalogResult, Course, Review};

use crate::provider::{CatalogProvider, StaticCatalog};
use crate::reviews::ReviewSummary;
use crate::shelves;

/// Ordered matches of one query.
///
/// An empty result means "no courses matched", which is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    courses: Vec<&'a Course>,
    total: usize,
}

impl<'a> QueryResult<'a> {
    pub fn courses(&self) -> &[&'a Course] {
        &self.courses
    }

    pub fn into_courses(self) -> Vec<&'a Course> {
        self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Size of the collection the query ran over.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.courses.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.courses.iter().copied()
    }
}

/// Everything the course detail page shows.
#[derive(Debug, Clone)]
pub struct CourseDetails<'a> {
    pub course: &'a Course,
    pub reviews: &'a [Review],
    pub summary: ReviewSummary,
}

/// Runs catalog queries against a shared, read-only provider.
pub struct CatalogQueryEngine<P = StaticCatalog> {
    catalog: Arc<P>,
    config: QueryConfig,
}

impl<P> Clone for CatalogQueryEngine<P> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
        }
    }
}

impl<P: CatalogProvider> CatalogQueryEngine<P> {
    pub fn new(catalog: Arc<P>, config: QueryConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &P {
        &self.catalog
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn search_scope(&self) -> SearchScope {
        if self.config.search_description {
            SearchScope::TitleAndDescription
        } else {
            SearchScope::Title
        }
    }

    /// The catalog page's initial selection.
    pub fn default_spec(&self) -> FilterSpec {
        FilterSpec::with_defaults(&self.config)
    }

    /// Build a spec from URL query parameters against this catalog's categories.
    pub fn spec_from_params<I, K, V>(&self, params: I) -> FilterSpec
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        FilterSpec::from_query_params(params, self.catalog.list_categories(), &self.config)
    }

    pub fn execute(&self, spec: &FilterSpec) -> QueryResult<'_> {
        let all = self.catalog.list_courses();
        let courses = pipeline::execute(all, spec, self.search_scope());
        debug!(
            matched = courses.len(),
            total = all.len(),
            sort = %spec.sort_by,
            "catalog query"
        );
        QueryResult {
            courses,
            total: all.len(),
        }
    }

    /// Home-page shelf for a tab token (`featured`, `popular`, `new`).
    pub fn shelf(&self, token: &str) -> Vec<&Course> {
        shelves::promoted(
            self.catalog.list_courses(),
            shelves::shelf_flag(token),
            self.config.shelf_limit,
        )
    }

    pub fn course_details(&self, id: &str) -> CatalogResult<CourseDetails<'_>> {
        let course = self.catalog.course(id)?;
        let all = self.catalog.list_reviews();
        let reviews = &all[..all.len().min(self.config.review_limit)];
        Ok(CourseDetails {
            course,
            reviews,
            summary: ReviewSummary::from_reviews(reviews),
        })
    }
}
