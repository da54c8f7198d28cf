//! Shared helper functions for CLI commands
//!
//! The store returns typed errors; the policy of reporting them and
//! carrying on lives here, shared by the menu and the flag-driven
//! commands.

use std::path::Path;

use crate::cli::output;
use crate::core::store;
use crate::entities::Student;

/// Load the roster, reporting problems instead of propagating them.
///
/// A malformed or unreadable file yields an empty roster so the
/// program can keep going; the diagnostic tells the user what was
/// wrong. A missing file is created as `[]` by the store itself.
pub fn load_or_empty(path: &Path) -> Vec<Student> {
    match store::load(path) {
        Ok(students) => students,
        Err(err) => {
            output::error("There was a problem reading the enrollment file.", Some(&err));
            Vec::new()
        }
    }
}

/// Save the roster, reporting write failures instead of propagating.
///
/// Returns whether the file was written. The in-memory roster is
/// untouched either way.
pub fn try_save(path: &Path, students: &[Student], pretty: bool) -> bool {
    match store::save(path, students, pretty) {
        Ok(()) => true,
        Err(err) => {
            output::error("There was a problem writing the enrollment file.", Some(&err));
            false
        }
    }
}
