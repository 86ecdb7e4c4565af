//! Core use-case services.
//!
//! # Responsibility
//! - Compose store queries into use-case level results for the console.

pub mod report_service;
