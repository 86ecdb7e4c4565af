//! Domain model for session grade records.
//!
//! # Responsibility
//! - Define the validated value types shared by store, report and CLI code.
//!
//! # Invariants
//! - Every record is identified by its case-insensitive name.
//! - Values are immutable once constructed.

pub mod student;
