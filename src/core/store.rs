//! Roster persistence
//!
//! The roster lives in a single JSON file: an array of objects, each
//! carrying `first_name`, `last_name` and `course_name`. Records are
//! kept in file order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::Student;

/// Errors that can occur while reading or writing the roster file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not contain a valid enrollment roster", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize the roster")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the roster from `path`, keeping records in file order.
///
/// A missing file is not an error: the roster starts empty and the
/// file is created immediately so later saves have a home. Anything
/// else that goes wrong is returned as a [`StoreError`]; the file is
/// left untouched in that case.
pub fn load(path: &Path) -> Result<Vec<Student>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            save(path, &[], false)?;
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the roster to `path`, replacing any previous contents.
///
/// The whole array goes out in a single `fs::write`. Compact JSON by
/// default; `pretty` switches to indented output.
pub fn save(path: &Path, students: &[Student], pretty: bool) -> Result<(), StoreError> {
    let json = if pretty {
        serde_json::to_string_pretty(students)
    } else {
        serde_json::to_string(students)
    }
    .map_err(|source| StoreError::Serialize { source })?;

    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_roster() -> Vec<Student> {
        vec![
            Student::new("Ada", "Lovelace", "Algorithms").unwrap(),
            Student::new("Alan", "Turing", "Computability").unwrap(),
            // Duplicates are allowed; position is the only identity
            Student::new("Ada", "Lovelace", "Algorithms").unwrap(),
        ]
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        let roster = sample_roster();

        save(&path, &roster, false).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_pretty_save_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        let roster = sample_roster();

        save(&path, &roster, true).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_load_missing_file_creates_empty_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        let loaded = load(&path).unwrap();

        assert!(loaded.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_load_invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        // The offending file is not rewritten
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_load_wrong_shape_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        fs::write(&path, r#"{"first_name":"Ada"}"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("Enrollments.json");

        let err = save(&path, &sample_roster(), false).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn test_arbitrary_course_text_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        let roster = vec![
            Student::new("Grace", "Hopper", "Compilers & Linkers, pt. 1 (1952)").unwrap(),
            Student::new("Ada", "Lovelace", "").unwrap(),
        ];

        save(&path, &roster, false).unwrap();
        assert_eq!(load(&path).unwrap(), roster);
    }
}
