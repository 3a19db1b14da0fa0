//! Domain layer - Core recruitment logic with no external dependencies
//!
//! This layer contains:
//! - Entities: the application draft a prospect fills in
//! - Value Objects: paths and ranks, classes, wizard steps, the submission payload

pub mod entities;
pub mod value_objects;
