//! Load-time invariant checks.

use rustc_hash::FxHashSet;

use pathshala_core::constants::MAX_RATING;
use pathshala_core::types::Instructor;
use pathshala_core::{CatalogError, CatalogResult, Category, Course, Learner, Review};

fn unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> CatalogResult<()> {
    let mut seen = FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_rating(kind: &'static str, id: &str, rating: f64) -> CatalogResult<()> {
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CatalogError::invalid(
            kind,
            id,
            format!("rating {rating} outside 0..={MAX_RATING}"),
        ))
    }
}

pub(crate) fn check_categories(categories: &[Category]) -> CatalogResult<()> {
    unique_ids("category", categories.iter().map(|c| c.id.as_str()))
}

pub(crate) fn check_instructors(instructors: &[Instructor]) -> CatalogResult<()> {
    unique_ids("instructor", instructors.iter().map(|i| i.id.as_str()))?;
    instructors
        .iter()
        .try_for_each(|i| check_rating("instructor", &i.id, i.rating))
}

pub(crate) fn check_courses(courses: &[Course]) -> CatalogResult<()> {
    unique_ids("course", courses.iter().map(|c| c.id.as_str()))?;
    for course in courses {
        check_rating("course", &course.id, course.rating)?;
        if let Some(discount) = course.discount_price {
            if discount > course.price {
                return Err(CatalogError::invalid(
                    "course",
                    &course.id,
                    format!("discount price {discount} exceeds price {}", course.price),
                ));
            }
        }
    }
    Ok(())
}

/// Every course's category must be listed, and its embedded instructor valid.
pub(crate) fn check_course_references(
    courses: &[Course],
    categories: &[Category],
) -> CatalogResult<()> {
    let known: FxHashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    for course in courses {
        if !known.contains(course.category.id.as_str()) {
            return Err(CatalogError::invalid(
                "course",
                &course.id,
                format!("unknown category {}", course.category.id),
            ));
        }
        check_rating("instructor", &course.instructor.id, course.instructor.rating)?;
    }
    Ok(())
}

pub(crate) fn check_reviews(reviews: &[Review]) -> CatalogResult<()> {
    unique_ids("review", reviews.iter().map(|r| r.id.as_str()))?;
    match reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
        Some(r) => Err(CatalogError::invalid(
            "review",
            &r.id,
            format!("rating {} outside 1..=5", r.rating),
        )),
        None => Ok(()),
    }
}

pub(crate) fn check_learners(learners: &[Learner]) -> CatalogResult<()> {
    unique_ids("learner", learners.iter().map(|l| l.id.as_str()))?;
    for learner in learners {
        if let Some(p) = learner.progress.iter().find(|p| p.completed > 100) {
            return Err(CatalogError::invalid(
                "learner",
                &learner.id,
                format!("progress for {} is {}%", p.course_id, p.completed),
            ));
        }
    }
    Ok(())
}
