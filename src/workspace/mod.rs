//! Scratch-file lifecycle for a run.

/// Explicit workspace value and its clear operations.
pub mod layout;
