//! feedreel turns a social timeline into one narrated video.
//!
//! Each item becomes a short clip: a caption board (or the item's own images) shown for the length
//! of its spoken narration, followed by any attached videos. Clips are joined in timeline order.
//!
//! - Load [`TimelineItem`]s (most recent first) and put them in [`chronological`] order
//! - Build a [`Pipeline`] from a [`ReelConfig`]
//! - [`Pipeline::run`] the items and inspect the [`RunReport`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Caption board rendering.
pub mod annotate;
/// Image and media decoding helpers.
pub mod assets;
/// Frame sinks and `ffmpeg` joins.
pub mod encode;
/// Attachment download.
pub mod fetch;
/// Spoken narration.
pub mod narration;
/// Whole-run orchestration.
pub mod pipeline;
/// Per-item clips and the final video.
pub mod render;
/// Timeline items and sources.
pub mod timeline;
/// Scratch-file lifecycle.
pub mod workspace;

pub use crate::foundation::core::{
    BASE_LANGUAGE, Canvas, FALLBACK_LANGUAGE, Fps, SILENCE_GAP_SECS, TEXT_WIDTH,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::annotate::board::{CaptionLayout, FontSource, ImageAnnotator};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ffmpeg_tools_available};
pub use crate::encode::sink::{AudioInputConfig, FrameRGBA, FrameSink, InMemorySink, SinkConfig};
pub use crate::fetch::download::{Downloader, HttpDownloader};
pub use crate::fetch::media::{FetchedAttachments, FetchedMedia, MediaFetcher};
pub use crate::narration::engine::{SpeechEngine, SpeechError};
pub use crate::narration::gtts::GoogleTranslateTts;
pub use crate::narration::synth::{NarrationOutcome, NarrationSynthesizer, NarrationTrack};
pub use crate::pipeline::config::ReelConfig;
pub use crate::pipeline::run::{Pipeline, RunReport, SkipReason};
pub use crate::render::clip::ClipRenderer;
pub use crate::render::manifest::{RenderedSegment, SegmentManifest};
pub use crate::render::sequence::{ConcatOutcome, SequenceConcatenator};
pub use crate::timeline::model::{MediaKind, MediaRef, TimelineItem, VideoVariant};
pub use crate::timeline::source::{JsonTimelineSource, TimelineSource, chronological};
pub use crate::workspace::layout::Workspace;
