//! In-memory catalog loaded once from JSON.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use pathshala_core::config::CatalogConfig;
use pathshala_core::types::Instructor;
use pathshala_core::{CatalogError, CatalogResult, Category, Course, Learner, Review};

use super::raw::RawCatalog;
use super::validate;
use super::CatalogProvider;

/// The data set compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// A category whose stored display count disagrees with the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleCategoryCount {
    pub category_id: String,
    pub stored: u32,
    pub live: u32,
}

/// Validated, immutable catalog with an id index over courses.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
    reviews: Vec<Review>,
    learners: Vec<Learner>,
    course_index: FxHashMap<String, usize>,
}

impl StaticCatalog {
    /// Load the bundled data set.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load from `config.data_path`, or the bundled data set when unset.
    pub fn load(config: &CatalogConfig) -> CatalogResult<Self> {
        let catalog = match &config.data_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::bundled()?,
        };
        if config.effective_check_category_counts() {
            for stale in catalog.stale_category_counts() {
                warn!(
                    category = %stale.category_id,
                    stored = stale.stored,
                    live = stale.live,
                    "category course count is out of date"
                );
            }
        }
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a data set whose courses reference instructors and categories by id.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        validate::check_instructors(&raw.instructors)?;

        let courses = raw
            .courses
            .into_iter()
            .map(|c| c.resolve(&raw.instructors, &raw.categories))
            .collect::<CatalogResult<Vec<_>>>()?;

        let mut catalog = Self::from_parts(raw.categories, courses, raw.reviews, raw.learners)?;
        catalog.instructors = raw.instructors;
        Ok(catalog)
    }

    /// Build from already-resolved records. Validates every invariant.
    pub fn from_parts(
        categories: Vec<Category>,
        courses: Vec<Course>,
        reviews: Vec<Review>,
        learners: Vec<Learner>,
    ) -> CatalogResult<Self> {
        validate::check_categories(&categories)?;
        validate::check_courses(&courses)?;
        validate::check_course_references(&courses, &categories)?;
        validate::check_reviews(&reviews)?;
        validate::check_learners(&learners)?;

        let course_index = courses
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id.clone(), pos))
            .collect();

        let mut instructors: Vec<Instructor> = Vec::new();
        for course in &courses {
            if !instructors.iter().any(|i| i.id == course.instructor.id) {
                instructors.push(course.instructor.clone());
            }
        }

        info!(
            courses = courses.len(),
            categories = categories.len(),
            reviews = reviews.len(),
            learners = learners.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories,
            instructors,
            courses,
            reviews,
            learners,
            course_index,
        })
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn learners(&self) -> &[Learner] {
        &self.learners
    }

    pub fn learner(&self, id: &str) -> Option<&Learner> {
        self.learners.iter().find(|l| l.id == id)
    }

    /// Course count per category id, derived from the collection.
    ///
    /// Categories with no courses are present with a count of zero.
    pub fn category_course_counts(&self) -> FxHashMap<&str, u32> {
        let mut counts: FxHashMap<&str, u32> = self
            .categories
            .iter()
            .map(|c| (c.id.as_str(), 0))
            .collect();
        for course in &self.courses {
            *counts.entry(course.category.id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Categories whose stored `courses` figure differs from the live count, in category order.
    pub fn stale_category_counts(&self) -> Vec<StaleCategoryCount> {
        let live = self.category_course_counts();
        self.categories
            .iter()
            .filter_map(|c| {
                let live = live.get(c.id.as_str()).copied().unwrap_or(0);
                (live != c.courses).then(|| StaleCategoryCount {
                    category_id: c.id.clone(),
                    stored: c.courses,
                    live,
                })
            })
            .collect()
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    fn list_reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn find_course(&self, id: &str) -> Option<&Course> {
        self.course_index.get(id).map(|&pos| &self.courses[pos])
    }
}
