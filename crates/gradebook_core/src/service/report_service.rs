//! End-of-session class report.
//!
//! # Responsibility
//! - Compose statistics, ranking and listings into one snapshot for display.
//!
//! # Invariants
//! - `students` and `statistics.above_average_students` are sorted by
//!   case-insensitive name.
//! - `top_student` is `None` exactly when the store is empty.

use crate::model::student::StudentRecord;
use crate::store::record_store::{ClassStatistics, RecordStore};
use serde::Serialize;

/// Snapshot of the whole class, built when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub statistics: ClassStatistics,
    pub top_student: Option<StudentRecord>,
    pub students: Vec<StudentRecord>,
}

impl ClassReport {
    /// Builds a report from the current store value.
    pub fn build(store: &RecordStore) -> Self {
        Self {
            statistics: store.statistics(),
            top_student: store.top_student(),
            students: store.list_all(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
