/// Canvas, frame-rate, and layout constants shared by every stage.
pub mod core;
/// Crate-wide error taxonomy.
pub mod error;
