//! Session record storage.
//!
//! # Responsibility
//! - Own the in-memory collection of student records for one session.
//! - Keep console and report layers decoupled from the map layout.
//!
//! # Invariants
//! - Nothing here touches files, network or process-wide state.

pub mod record_store;
