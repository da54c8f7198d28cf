//! Entity type definitions
//!
//! Registrar keeps a single entity type:
//! - [`Student`] - a student's name paired with the course they enrolled in

pub mod student;

pub use student::{NameField, Student, ValidationError};
