//! Per-item clips and the final joined video.

/// Per-item clip rendering.
pub mod clip;
/// Ordered record of rendered segments.
pub mod manifest;
/// Final concatenation of all segments.
pub mod sequence;
/// Slide timing for one item.
pub mod slides;
