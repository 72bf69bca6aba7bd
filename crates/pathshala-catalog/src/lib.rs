//! # pathshala-catalog
//!
//! The course catalog: a validated static data set behind the
//! [`CatalogProvider`] trait, and the [`CatalogQueryEngine`] that filters,
//! searches, and sorts it for the catalog page. Also hosts the home-page
//! shelves, the detail-page review summary, and the learner dashboard.

pub mod dashboard;
pub mod provider;
pub mod query;
pub mod reviews;
pub mod shelves;

pub use dashboard::{EnrolledCourse, LearnerDashboard};
pub use provider::{CatalogProvider, StaleCategoryCount, StaticCatalog};
pub use query::{
    CatalogQueryEngine, CategoryFilter, CourseDetails, FilterSpec, PriceRange, QueryResult,
    SearchScope, SortBy,
};
pub use reviews::ReviewSummary;
