//! Encoding sinks and `ffmpeg` joins.
//!
//! Sinks consume frames in order; the concat step joins finished files.

/// `ffmpeg` concat-filter joins of finished media files.
pub mod concat;
/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
