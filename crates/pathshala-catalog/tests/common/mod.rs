//! Shared builders for catalog tests.

#![allow(dead_code)]

use std::sync::Arc;

use pathshala_catalog::{CatalogQueryEngine, StaticCatalog};
use pathshala_core::config::QueryConfig;
use pathshala_core::types::Instructor;
use pathshala_core::{Category, Course, Language, Level};

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: "book".to_string(),
        courses: 0,
    }
}

pub fn instructor() -> Instructor {
    Instructor {
        id: "i-test".to_string(),
        name: "Test Instructor".to_string(),
        avatar: "avatar.jpg".to_string(),
        role: "Lecturer".to_string(),
        bio: "Teaches tests.".to_string(),
        courses: 1,
        students: 10,
        rating: 4.5,
        social: None,
    }
}

/// The category every [`course`] belongs to, for building catalogs by hand.
pub fn general() -> Vec<Category> {
    vec![category("general", "General")]
}

/// A course with neutral defaults; callers override the fields under test.
pub fn course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        title: format!("Course {id}"),
        description: format!("Description of {id}"),
        image: format!("{id}.jpg"),
        price: 1000,
        discount_price: None,
        instructor: instructor(),
        category: category("general", "General"),
        level: Level::Beginner,
        language: Language::English,
        duration: "4 weeks".to_string(),
        lessons: 10,
        rating: 4.0,
        enrolled_students: 0,
        featured: false,
        popular: false,
        new: false,
        syllabus: vec![],
    }
}

pub fn bundled() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::bundled().expect("bundled catalog loads"))
}

pub fn engine() -> CatalogQueryEngine {
    CatalogQueryEngine::new(bundled(), QueryConfig::default())
}
