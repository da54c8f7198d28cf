//! Registrar: course enrollment from the command line.
//!
//! A small console utility that keeps a roster of student course
//! enrollments as a plain JSON file.

pub mod cli;
pub mod core;
pub mod entities;
