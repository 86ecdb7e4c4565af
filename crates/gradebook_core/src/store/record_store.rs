//! In-memory record store and its read-side queries.
//!
//! # Responsibility
//! - Hold the session's student records, unique by case-insensitive name.
//! - Provide insert, listing, ranking, filtering and statistics queries.
//!
//! # Invariants
//! - Records are keyed by `name_key(name)`; no two share a key.
//! - Every stored grade lies in `[0, 100]` (enforced by `Grade`).
//! - Insert never mutates the receiver; it returns a new store value.
//! - All ordered reads are ascending by case-insensitive name.
//! - Log events carry counts and status only, never student names.

use crate::model::student::{
    name_key, Grade, GradeError, RecordValidationError, StudentRecord,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by record store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A record with the same case-insensitive name already exists.
    DuplicateName(String),
    /// Grade text is unparseable or out of range.
    InvalidGrade(GradeError),
    /// Name is blank after trimming.
    EmptyName,
    /// Filter threshold text is unparseable.
    InvalidFilterValue(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "Student '{name}' already exists."),
            Self::InvalidGrade(err) => write!(f, "{err}"),
            Self::EmptyName => write!(f, "{}", RecordValidationError::EmptyName),
            Self::InvalidFilterValue(raw) => write!(f, "invalid minimum grade `{raw}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGrade(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GradeError> for StoreError {
    fn from(value: GradeError) -> Self {
        Self::InvalidGrade(value)
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        match value {
            RecordValidationError::EmptyName => Self::EmptyName,
        }
    }
}

/// Summary numbers over the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    /// Mean grade rounded to two decimals; `0.0` for an empty store.
    pub average: f64,
    pub total_students: usize,
    pub above_average_count: usize,
    /// Records strictly above the unrounded mean, sorted by name.
    pub above_average_students: Vec<StudentRecord>,
}

impl ClassStatistics {
    fn empty() -> Self {
        Self {
            average: 0.0,
            total_students: 0,
            above_average_count: 0,
            above_average_students: Vec::new(),
        }
    }
}

/// Session-scoped collection of student records.
///
/// Values are cheap to reason about: every insert hands back a fresh store
/// and leaves the original untouched.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: BTreeMap<String, StudentRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns whether a record matches `name` case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&name_key(name))
    }

    /// Looks up a record by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&StudentRecord> {
        self.records.get(&name_key(name))
    }

    /// Validates raw input and returns a new store containing the record.
    ///
    /// # Contract
    /// - Duplicate names are checked before the grade is parsed.
    /// - The stored name is trimmed; the grade is kept exactly as parsed.
    ///
    /// # Errors
    /// - `DuplicateName` when the name already exists (case-insensitive).
    /// - `InvalidGrade` when `raw_grade` is not a number or out of range.
    /// - `EmptyName` when `name` is blank.
    pub fn insert(&self, name: &str, raw_grade: &str) -> StoreResult<RecordStore> {
        if self.contains(name) {
            return Err(self.reject(StoreError::DuplicateName(name.trim().to_string())));
        }
        let grade = Grade::parse(raw_grade).map_err(|err| self.reject(err.into()))?;
        let record = StudentRecord::new(name, grade).map_err(|err| self.reject(err.into()))?;
        self.insert_record(record)
    }

    /// Returns a new store containing an already validated record.
    pub fn insert_record(&self, record: StudentRecord) -> StoreResult<RecordStore> {
        let key = record.key();
        if self.records.contains_key(&key) {
            return Err(self.reject(StoreError::DuplicateName(record.name().to_string())));
        }

        let mut records = self.records.clone();
        records.insert(key, record);
        info!(
            "event=record_insert module=store status=ok total={}",
            records.len()
        );
        Ok(Self { records })
    }

    /// All records sorted by case-insensitive name.
    pub fn list_all(&self) -> Vec<StudentRecord> {
        debug!(
            "event=record_list module=store status=ok total={}",
            self.records.len()
        );
        self.records.values().cloned().collect()
    }

    /// Record with the highest grade.
    ///
    /// Ties go to the name that sorts first case-insensitively.
    pub fn top_student(&self) -> Option<StudentRecord> {
        let top = self
            .records
            .values()
            .fold(None, |best: Option<&StudentRecord>, record| match best {
                Some(current) if current.grade().value() >= record.grade().value() => best,
                _ => Some(record),
            });
        debug!(
            "event=record_top module=store status=ok found={} total={}",
            top.is_some(),
            self.records.len()
        );
        top.cloned()
    }

    /// Parses a filter threshold.
    ///
    /// # Errors
    /// - `InvalidFilterValue` when `raw` is not a number (NaN included).
    pub fn parse_threshold(raw: &str) -> StoreResult<f64> {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(StoreError::InvalidFilterValue(trimmed.to_string())),
        }
    }

    /// Records with `grade >= min_grade`, sorted by name.
    pub fn filter_at_least(&self, min_grade: f64) -> Vec<StudentRecord> {
        let matched: Vec<StudentRecord> = self
            .records
            .values()
            .filter(|record| record.grade().value() >= min_grade)
            .cloned()
            .collect();
        debug!(
            "event=record_filter module=store status=ok matched={} total={}",
            matched.len(),
            self.records.len()
        );
        matched
    }

    /// Filters by raw threshold text; unparseable input yields no matches.
    pub fn filter(&self, raw_min_grade: &str) -> Vec<StudentRecord> {
        match Self::parse_threshold(raw_min_grade) {
            Ok(min_grade) => self.filter_at_least(min_grade),
            Err(_) => {
                warn!("event=record_filter module=store status=rejected error_code=invalid_filter_value");
                Vec::new()
            }
        }
    }

    /// Computes class statistics.
    ///
    /// Above-average membership compares against the unrounded mean.
    pub fn statistics(&self) -> ClassStatistics {
        debug!(
            "event=record_statistics module=store status=ok total={}",
            self.records.len()
        );
        if self.records.is_empty() {
            return ClassStatistics::empty();
        }

        let total = self.records.len();
        let sum: f64 = self
            .records
            .values()
            .map(|record| record.grade().value())
            .sum();
        let mean = sum / total as f64;

        let above_average_students: Vec<StudentRecord> = self
            .records
            .values()
            .filter(|record| record.grade().value() > mean)
            .cloned()
            .collect();

        ClassStatistics {
            average: round_to_cents(mean),
            total_students: total,
            above_average_count: above_average_students.len(),
            above_average_students,
        }
    }

    fn reject(&self, err: StoreError) -> StoreError {
        warn!(
            "event=record_insert module=store status=rejected error_code={} total={}",
            error_code(&err),
            self.records.len()
        );
        err
    }
}

fn error_code(err: &StoreError) -> &'static str {
    match err {
        StoreError::DuplicateName(_) => "duplicate_name",
        StoreError::InvalidGrade(GradeError::NotANumber(_)) => "grade_not_a_number",
        StoreError::InvalidGrade(GradeError::OutOfRange(_)) => "grade_out_of_range",
        StoreError::EmptyName => "empty_name",
        StoreError::InvalidFilterValue(_) => "invalid_filter_value",
    }
}

/// Rounds to two decimals, ties to even on the exact binary value.
///
/// `{:.2}` formatting is correctly rounded, so `1.125` becomes `1.12`.
fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{error_code, round_to_cents, StoreError};
    use crate::model::student::GradeError;

    #[test]
    fn round_to_cents_keeps_two_decimals() {
        assert_eq!(round_to_cents(83.333_333), 83.33);
        assert_eq!(round_to_cents(66.666_666), 66.67);
        assert_eq!(round_to_cents(80.0), 80.0);
    }

    #[test]
    fn round_to_cents_breaks_exact_ties_to_even() {
        assert_eq!(round_to_cents(1.125), 1.12);
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            error_code(&StoreError::DuplicateName("a".to_string())),
            "duplicate_name"
        );
        assert_eq!(
            error_code(&StoreError::InvalidGrade(GradeError::OutOfRange(101.0))),
            "grade_out_of_range"
        );
    }
}
