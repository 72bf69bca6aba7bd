//! Learner dashboard: enrolled courses with progress, and the wishlist.

use tracing::warn;

use pathshala_core::{Course, Learner};

use crate::provider::CatalogProvider;

/// An enrolled course joined with the learner's progress on it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse<'a> {
    pub course: &'a Course,
    /// Percent complete, 0 when the learner has not started.
    pub completed: u8,
    pub last_accessed: Option<&'a str>,
}

impl EnrolledCourse<'_> {
    pub fn is_complete(&self) -> bool {
        self.completed >= 100
    }
}

#[derive(Debug, Clone)]
pub struct LearnerDashboard<'a> {
    pub learner: &'a Learner,
    pub enrolled: Vec<EnrolledCourse<'a>>,
    pub wishlist: Vec<&'a Course>,
}

impl<'a> LearnerDashboard<'a> {
    /// Resolve the learner's course ids against `catalog`, keeping the
    /// learner's order. Ids the catalog does not know are skipped.
    pub fn build<P: CatalogProvider>(learner: &'a Learner, catalog: &'a P) -> Self {
        let enrolled = learner
            .enrolled_courses
            .iter()
            .filter_map(|id| resolve(catalog, learner, id, "enrolled"))
            .map(|course| {
                let progress = learner.progress_for(&course.id);
                EnrolledCourse {
                    course,
                    completed: progress.map_or(0, |p| p.completed),
                    last_accessed: progress.map(|p| p.last_accessed.as_str()),
                }
            })
            .collect();

        let wishlist = learner
            .wishlist
            .iter()
            .filter_map(|id| resolve(catalog, learner, id, "wishlist"))
            .collect();

        Self {
            learner,
            enrolled,
            wishlist,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.enrolled.iter().filter(|e| e.is_complete()).count()
    }

    pub fn in_progress_count(&self) -> usize {
        self.enrolled.len() - self.completed_count()
    }

    /// Mean completion across enrolled courses, `None` when nothing is enrolled.
    pub fn average_progress(&self) -> Option<f64> {
        if self.enrolled.is_empty() {
            return None;
        }
        let total: u32 = self.enrolled.iter().map(|e| u32::from(e.completed)).sum();
        Some(f64::from(total) / self.enrolled.len() as f64)
    }

    /// Lessons across enrolled courses.
    pub fn total_lessons(&self) -> u32 {
        self.enrolled.iter().map(|e| e.course.lessons).sum()
    }
}

fn resolve<'a, P: CatalogProvider>(
    catalog: &'a P,
    learner: &Learner,
    id: &str,
    list: &'static str,
) -> Option<&'a Course> {
    let course = catalog.find_course(id);
    if course.is_none() {
        warn!(learner = %learner.id, course = id, list, "dashboard references unknown course");
    }
    course
}
