//! Caption boards: the still image shown while an item is narrated.

/// Board rendering.
pub mod board;
/// Character-count word wrapping.
pub mod wrap;
