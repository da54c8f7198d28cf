//! User-facing output helpers

use console::style;
use std::error::Error;

use crate::entities::Student;

/// Report a recoverable problem with an optional technical detail line.
///
/// The message goes to stderr; when a concrete error is at hand its
/// text and source chain follow under a technical-detail banner.
pub fn error(message: &str, detail: Option<&dyn Error>) {
    eprintln!("{} {}", style("!").red(), message);
    if let Some(err) = detail {
        eprintln!("{}", style("-- Technical Error Message --").dim());
        eprintln!("{}", style(err).dim());
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("{}", style(format!("caused by: {}", cause)).dim());
            source = cause.source();
        }
    }
}

/// Print the roster between separator rules, one record per line.
pub fn roster(students: &[Student]) {
    println!("{}", style("-".repeat(50)).dim());
    if students.is_empty() {
        println!("No students registered.");
    } else {
        for student in students {
            println!("{}", student);
        }
    }
    println!("{}", style("-".repeat(50)).dim());
}
