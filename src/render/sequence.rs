use std::path::{Path, PathBuf};

use crate::assets::media::probe_media;
use crate::encode::concat::{ConcatInput, concat_media};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::manifest::SegmentManifest;

/// What the final concatenation produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ConcatOutcome {
    /// The final video was written.
    Written {
        /// Final video path.
        path: PathBuf,
        /// Number of segments joined.
        segments: usize,
        /// Length of the written file in seconds.
        duration_seconds: f64,
    },
    /// No item rendered a segment; no file was written.
    NothingProduced,
}

/// Joins all rendered segments, in index order, into the final video.
#[derive(Clone, Debug)]
pub struct SequenceConcatenator {
    canvas: Canvas,
    fps: Fps,
}

impl SequenceConcatenator {
    /// Concatenator producing `canvas`-sized output at `fps`.
    pub fn new(canvas: Canvas, fps: Fps) -> Self {
        Self { canvas, fps }
    }

    /// Join every segment of `manifest` into `out`.
    pub fn concatenate(&self, manifest: &SegmentManifest, out: &Path) -> ReelResult<ConcatOutcome> {
        if manifest.is_empty() {
            tracing::warn!("no segments were rendered; nothing to concatenate");
            return Ok(ConcatOutcome::NothingProduced);
        }

        let mut inputs = Vec::with_capacity(manifest.len());
        for seg in manifest.ordered() {
            if !seg.path.is_file() {
                return Err(ReelError::encode(format!(
                    "segment {} is missing at '{}'",
                    seg.index,
                    seg.path.display()
                )));
            }
            inputs.push(ConcatInput {
                path: seg.path.clone(),
                has_audio: true,
                duration_sec: seg.duration_seconds,
            });
        }

        concat_media(&inputs, self.canvas, self.fps, out)?;
        let duration_seconds = probe_media(out)?.duration_sec;
        tracing::info!(
            segments = inputs.len(),
            indices = ?manifest.indices(),
            duration_sec = duration_seconds,
            path = %out.display(),
            "wrote final video"
        );
        Ok(ConcatOutcome::Written {
            path: out.to_path_buf(),
            segments: inputs.len(),
            duration_seconds,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
