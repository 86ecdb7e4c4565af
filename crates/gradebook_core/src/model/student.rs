//! Student record domain model.
//!
//! # Responsibility
//! - Define the immutable `(name, grade)` pair held by the record store.
//! - Validate grades at construction so no out-of-range value exists.
//!
//! # Invariants
//! - `Grade` is never NaN and always lies in `[0, 100]`.
//! - `StudentRecord::name` is trimmed and never empty.
//! - Name identity is case-insensitive; display keeps the original casing.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted grade (inclusive).
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade (inclusive).
pub const MAX_GRADE: f64 = 100.0;

/// Validation error for grade construction and parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeError {
    /// Input text is not a real number.
    NotANumber(String),
    /// Parsed value lies outside `[MIN_GRADE, MAX_GRADE]`.
    OutOfRange(f64),
}

impl Display for GradeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(_) => write!(f, "Grade must be a number."),
            Self::OutOfRange(_) => write!(f, "Grade must be between 0 and 100."),
        }
    }
}

impl Error for GradeError {}

/// Numeric grade in the closed interval `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    /// Creates a grade from an already numeric value.
    ///
    /// # Errors
    /// - `NotANumber` for NaN.
    /// - `OutOfRange` for anything outside `[0, 100]`, infinities included.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        if value.is_nan() {
            return Err(GradeError::NotANumber(value.to_string()));
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradeError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parses raw user text into a grade.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, GradeError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| GradeError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(value: Grade) -> Self {
        value.0
    }
}

impl Display for Grade {
    // Integral values keep a trailing `.0` (`90.0`), matching how grades were
    // always shown to users.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Validation error for record construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Name is empty after trimming.
    EmptyName,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Student name cannot be empty."),
        }
    }
}

impl Error for RecordValidationError {}

/// Immutable `(name, grade)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    grade: Grade,
}

impl StudentRecord {
    /// Creates a record, trimming `name`.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    pub fn new(name: impl AsRef<str>, grade: Grade) -> Result<Self, RecordValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            grade,
        })
    }

    /// Display name with original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Case-insensitive identity used for uniqueness and ordering.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.grade)
    }
}

/// Normalizes a raw name into its case-insensitive lookup key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{name_key, Grade, GradeError, RecordValidationError, StudentRecord};

    #[test]
    fn grade_display_keeps_one_decimal_for_integral_values() {
        assert_eq!(Grade::new(90.0).unwrap().to_string(), "90.0");
        assert_eq!(Grade::new(85.5).unwrap().to_string(), "85.5");
        assert_eq!(Grade::new(0.0).unwrap().to_string(), "0.0");
    }

    #[test]
    fn grade_rejects_nan_as_not_a_number() {
        let err = Grade::new(f64::NAN).unwrap_err();
        assert!(matches!(err, GradeError::NotANumber(_)));
    }

    #[test]
    fn grade_rejects_infinity_as_out_of_range() {
        let err = Grade::parse("inf").unwrap_err();
        assert!(matches!(err, GradeError::OutOfRange(v) if v.is_infinite()));
    }

    #[test]
    fn record_name_is_trimmed_and_keyed_lowercase() {
        let record = StudentRecord::new("  Alice ", Grade::new(90.0).unwrap()).unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.key(), "alice");
        assert_eq!(name_key(" ALICE "), "alice");
    }

    #[test]
    fn record_rejects_blank_name() {
        let err = StudentRecord::new("   ", Grade::new(50.0).unwrap()).unwrap_err();
        assert_eq!(err, RecordValidationError::EmptyName);
    }
}
