//! Learner accounts as seen by the dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerRole {
    Student,
    Instructor,
    Admin,
}

/// How far a learner is through one enrolled course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course_id: String,
    /// Percent complete, 0 through 100.
    pub completed: u8,
    pub last_accessed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: LearnerRole,
    /// Course ids, in enrollment order.
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    /// Course ids, in the order they were wishlisted.
    #[serde(default)]
    pub wishlist: Vec<String>,
    #[serde(default)]
    pub progress: Vec<CourseProgress>,
}

impl Learner {
    pub fn progress_for(&self, course_id: &str) -> Option<&CourseProgress> {
        self.progress.iter().find(|p| p.course_id == course_id)
    }
}
