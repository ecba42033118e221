//! Whole-run orchestration.

/// Run configuration.
pub mod config;
/// The per-item loop and final concatenation.
pub mod run;
