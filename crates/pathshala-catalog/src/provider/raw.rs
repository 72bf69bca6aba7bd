//! On-disk data set shape.
//!
//! Courses reference their instructor and category by id; loading resolves
//! those references and embeds the records by value.

use serde::Deserialize;

use pathshala_core::types::{Instructor, SyllabusSection};
use pathshala_core::{
    CatalogError, CatalogResult, Category, Course, Language, Learner, Level, Review,
};

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub courses: Vec<RawCourse>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub learners: Vec<Learner>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: u32,
    #[serde(default)]
    pub discount_price: Option<u32>,
    pub instructor_id: String,
    pub category_id: String,
    pub level: Level,
    pub language: Language,
    pub duration: String,
    pub lessons: u32,
    pub rating: f64,
    pub enrolled_students: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub syllabus: Vec<SyllabusSection>,
}

impl RawCourse {
    pub fn resolve(
        self,
        instructors: &[Instructor],
        categories: &[Category],
    ) -> CatalogResult<Course> {
        let instructor = instructors
            .iter()
            .find(|i| i.id == self.instructor_id)
            .cloned()
            .ok_or_else(|| {
                CatalogError::invalid(
                    "course",
                    &self.id,
                    format!("unknown instructor {}", self.instructor_id),
                )
            })?;
        let category = categories
            .iter()
            .find(|c| c.id == self.category_id)
            .cloned()
            .ok_or_else(|| {
                CatalogError::invalid(
                    "course",
                    &self.id,
                    format!("unknown category {}", self.category_id),
                )
            })?;

        Ok(Course {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            price: self.price,
            discount_price: self.discount_price,
            instructor,
            category,
            level: self.level,
            language: self.language,
            duration: self.duration,
            lessons: self.lessons,
            rating: self.rating,
            enrolled_students: self.enrolled_students,
            featured: self.featured,
            popular: self.popular,
            new: self.new,
            syllabus: self.syllabus,
        })
    }
}
