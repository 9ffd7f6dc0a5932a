//! Test support shared by the problems backend test binaries.
//!
//! Provides one-shot logging initialisation and assertions for the
//! problem-details error contract, without depending on backend types.

pub mod logging;
pub mod problem_details;
