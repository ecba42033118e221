use std::path::{Path, PathBuf};

use crate::assets::image::load_frame;
use crate::assets::media::probe_media;
use crate::encode::concat::{ConcatInput, concat_media};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::ReelResult;
use crate::narration::synth::NarrationTrack;
use crate::render::manifest::RenderedSegment;
use crate::render::slides::SlidePlan;
use crate::workspace::layout::Workspace;

/// Images to show for an item: the fetched ones, or the annotated board when there are none.
pub fn slide_images(fetched: Vec<PathBuf>, board: &Path) -> Vec<PathBuf> {
    if fetched.is_empty() {
        vec![board.to_path_buf()]
    } else {
        fetched
    }
}

/// Builds one item's clip: narrated slides, then the item's video clips.
#[derive(Clone, Debug)]
pub struct ClipRenderer {
    canvas: Canvas,
    fps: Fps,
    background: [u8; 3],
}

impl ClipRenderer {
    /// Renderer producing `canvas`-sized output at `fps`.
    pub fn new(canvas: Canvas, fps: Fps) -> Self {
        Self {
            canvas,
            fps,
            background: [0, 0, 0],
        }
    }

    /// Stream the slide sequence into `sink` with the narration as soundtrack.
    pub fn render_slides(
        &self,
        plan: &SlidePlan,
        narration: &NarrationTrack,
        sink: &mut dyn FrameSink,
    ) -> ReelResult<()> {
        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
            audio: Some(AudioInputConfig {
                path: narration.path.clone(),
                sample_rate: narration.sample_rate,
                channels: narration.channels,
            }),
        })?;

        let mut idx = 0u64;
        for slide in plan.slides() {
            let frame = load_frame(&slide.image, self.canvas, self.background)?;
            for _ in 0..slide.frame_count {
                sink.push_frame(idx, &frame)?;
                idx += 1;
            }
        }
        sink.end()
    }

    /// Render item `index` into the workspace's numbered segment path.
    ///
    /// Returns `None` without writing anything when the narration file is missing.
    #[tracing::instrument(level = "debug", skip_all, fields(index = index))]
    pub fn render(
        &self,
        index: usize,
        images: &[PathBuf],
        videos: &[PathBuf],
        narration: &NarrationTrack,
        ws: &Workspace,
    ) -> ReelResult<Option<RenderedSegment>> {
        if !narration.path.is_file() {
            tracing::warn!(
                path = %narration.path.display(),
                "narration audio missing; skipping render"
            );
            return Ok(None);
        }

        let plan = SlidePlan::new(images, narration.duration_seconds, self.fps)?;
        let out = ws.segment_path(index);

        if videos.is_empty() {
            let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
            self.render_slides(&plan, narration, &mut sink)?;
        } else {
            let slides_path = ws.slides_path(index);
            let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&slides_path));
            self.render_slides(&plan, narration, &mut sink)?;

            let mut inputs = vec![ConcatInput {
                path: slides_path,
                has_audio: true,
                duration_sec: plan.target_secs(),
            }];
            for video in videos {
                let info = probe_media(video)?;
                inputs.push(ConcatInput {
                    path: video.clone(),
                    has_audio: info.has_audio,
                    duration_sec: info.duration_sec,
                });
            }
            concat_media(&inputs, self.canvas, self.fps, &out)?;
        }

        let duration_seconds = probe_media(&out)?.duration_sec;
        tracing::info!(
            slides = plan.slides().len(),
            videos = videos.len(),
            duration_sec = duration_seconds,
            path = %out.display(),
            "rendered segment"
        );
        Ok(Some(RenderedSegment {
            index,
            path: out,
            duration_seconds,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/clip.rs"]
mod tests;
