//! # pathshala-core
//!
//! Foundation crate for the Pathshala course catalog.
//! Defines the data model, errors, config, tracing setup, and constants.
//! The catalog crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PathshalaConfig;
pub use errors::{CatalogError, CatalogErrorCode, CatalogResult};
pub use types::{
    Category, Course, Instructor, Language, Learner, LearnerRole, Level, PromoFlag, Review,
};
