//! Student entity type

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => write!(f, "first name"),
            NameField::Last => write!(f, "last name"),
        }
    }
}

/// Errors raised when a name field fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(NameField),

    #[error("{0} must contain only letters")]
    NotAlphabetic(NameField),
}

impl ValidationError {
    /// The field that failed validation
    pub fn field(&self) -> NameField {
        match self {
            ValidationError::Empty(field) => *field,
            ValidationError::NotAlphabetic(field) => *field,
        }
    }
}

/// A single enrollment record: who enrolled in what.
///
/// Records carry no identity beyond their position in the roster;
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Given name, letters only
    pub first_name: String,

    /// Family name, letters only
    pub last_name: String,

    /// Course title, free-form text
    #[serde(default)]
    pub course_name: String,
}

impl Student {
    /// Build a validated enrollment record.
    ///
    /// Both name fields must be non-empty and purely alphabetic. The
    /// course name is unrestricted and may be empty.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_name(&first_name, NameField::First)?;
        validate_name(&last_name, NameField::Last)?;

        Ok(Self {
            first_name,
            last_name,
            course_name: course_name.into(),
        })
    }
}

fn validate_name(value: &str, field: NameField) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    if !value.chars().all(char::is_alphabetic) {
        return Err(ValidationError::NotAlphabetic(field));
    }
    Ok(())
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}
