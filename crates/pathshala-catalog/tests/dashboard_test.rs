//! Learner dashboard built from the bundled learner and synthetic ones.

mod common;

use common::{course, general};
use pathshala_catalog::{LearnerDashboard, StaticCatalog};
use pathshala_core::types::CourseProgress;
use pathshala_core::{Learner, LearnerRole};

fn learner(enrolled: &[&str], wishlist: &[&str], progress: &[(&str, u8)]) -> Learner {
    Learner {
        id: "u-test".to_string(),
        name: "Test Learner".to_string(),
        email: "test@example.com".to_string(),
        avatar: "t.jpg".to_string(),
        role: LearnerRole::Student,
        enrolled_courses: enrolled.iter().map(|s| s.to_string()).collect(),
        wishlist: wishlist.iter().map(|s| s.to_string()).collect(),
        progress: progress
            .iter()
            .map(|(id, completed)| CourseProgress {
                course_id: id.to_string(),
                completed: *completed,
                last_accessed: "yesterday".to_string(),
            })
            .collect(),
    }
}

#[test]
fn bundled_learner_dashboard() {
    let catalog = StaticCatalog::bundled().unwrap();
    let learner = catalog.learner("u1").unwrap();
    let dashboard = LearnerDashboard::build(learner, &catalog);

    let enrolled: Vec<(&str, u8)> = dashboard
        .enrolled
        .iter()
        .map(|e| (e.course.id.as_str(), e.completed))
        .collect();
    assert_eq!(enrolled, [("c1", 100), ("c2", 60), ("c3", 20)]);

    let wishlist: Vec<&str> = dashboard.wishlist.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(wishlist, ["c4", "c5"]);

    assert_eq!(dashboard.completed_count(), 1);
    assert_eq!(dashboard.in_progress_count(), 2);
    assert_eq!(dashboard.average_progress(), Some(60.0));
    assert_eq!(dashboard.total_lessons(), 48 + 32 + 64);
}

#[test]
fn unknown_learner_is_none() {
    let catalog = StaticCatalog::bundled().unwrap();
    assert!(catalog.learner("ghost").is_none());
}

#[test]
fn enrolled_course_without_progress_starts_at_zero() {
    let courses = vec![course("a"), course("b")];
    let catalog = StaticCatalog::from_parts(general(), courses, vec![], vec![]).unwrap();
    let learner = learner(&["a", "b"], &[], &[("a", 40)]);
    let dashboard = LearnerDashboard::build(&learner, &catalog);

    assert_eq!(dashboard.enrolled[1].completed, 0);
    assert_eq!(dashboard.enrolled[1].last_accessed, None);
    assert_eq!(dashboard.enrolled[0].last_accessed, Some("yesterday"));
    assert_eq!(dashboard.average_progress(), Some(20.0));
}

#[test]
fn unknown_course_ids_are_skipped() {
    let catalog = StaticCatalog::from_parts(general(), vec![course("a")], vec![], vec![]).unwrap();
    let learner = learner(&["missing", "a"], &["gone"], &[]);
    let dashboard = LearnerDashboard::build(&learner, &catalog);

    assert_eq!(dashboard.enrolled.len(), 1);
    assert_eq!(dashboard.enrolled[0].course.id, "a");
    assert!(dashboard.wishlist.is_empty());
}

#[test]
fn empty_dashboard_has_no_average() {
    let catalog = StaticCatalog::from_parts(general(), vec![course("a")], vec![], vec![]).unwrap();
    let learner = learner(&[], &["a"], &[]);
    let dashboard = LearnerDashboard::build(&learner, &catalog);

    assert_eq!(dashboard.average_progress(), None);
    assert_eq!(dashboard.completed_count(), 0);
    assert_eq!(dashboard.in_progress_count(), 0);
    assert_eq!(dashboard.total_lessons(), 0);
    assert_eq!(dashboard.wishlist.len(), 1);
}
