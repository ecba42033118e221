//! Timeline items as handed over by the feed collaborator.

/// Item, attachment, and variant types.
pub mod model;
/// Timeline sources and processing-order helpers.
pub mod source;
/// Text transforms applied before narration.
pub mod text;
