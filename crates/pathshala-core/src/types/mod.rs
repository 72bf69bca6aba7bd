//! Catalog data model.

pub mod category;
pub mod course;
pub mod instructor;
pub mod learner;
pub mod review;

pub use category::{category_slug, Category};
pub use course::{Course, Language, Level, PromoFlag, SyllabusSection};
pub use instructor::{Instructor, SocialLinks};
pub use learner::{CourseProgress, Learner, LearnerRole};
pub use review::{Review, Reviewer};
