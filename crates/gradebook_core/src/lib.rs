//! Core domain logic for Gradebook.
//! This crate is the single source of truth for record invariants.

pub mod calc;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calc::{parse_operand, CalcError, Calculation};
pub use input::{parse_command, parse_entry, Command, MenuChoice};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Grade, GradeError, RecordValidationError, StudentRecord};
pub use service::report_service::ClassReport;
pub use store::record_store::{ClassStatistics, RecordStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
