//! Read-only catalog data providers.

mod raw;
mod static_catalog;
mod validate;

pub use static_catalog::{StaleCategoryCount, StaticCatalog};

use pathshala_core::{CatalogError, CatalogResult, Category, Course, Review};

/// Source of catalog records. Loaded once, never mutated.
pub trait CatalogProvider: Send + Sync {
    /// All courses in insertion order, which is newest first.
    fn list_courses(&self) -> &[Course];

    fn list_categories(&self) -> &[Category];

    fn list_reviews(&self) -> &[Review] {
        &[]
    }

    fn find_course(&self, id: &str) -> Option<&Course> {
        self.list_courses().iter().find(|c| c.id == id)
    }

    /// Like [`find_course`](Self::find_course), but a missing id is an error.
    fn course(&self, id: &str) -> CatalogResult<&Course> {
        self.find_course(id).ok_or_else(|| CatalogError::CourseNotFound {
            id: id.to_string(),
        })
    }
}
