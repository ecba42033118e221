//! Attachment download and normalization.

/// Download transport.
pub mod download;
/// Per-item attachment fetching.
pub mod media;
