use std::path::PathBuf;

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// One still image held on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Canvas-sized image shown for the whole slide.
    pub image: PathBuf,
    /// Nominal on-screen time in seconds.
    pub duration_secs: f64,
    /// First frame of the slide within the item's slide sequence.
    pub start_frame: u64,
    /// Frames the slide occupies at the plan's frame rate.
    pub frame_count: u64,
}

/// Equal partition of the narration duration across an item's images.
#[derive(Clone, Debug, PartialEq)]
pub struct SlidePlan {
    slides: Vec<Slide>,
    target_secs: f64,
    fps: Fps,
}

impl SlidePlan {
    /// Give each of `images` `target_secs / images.len()` seconds.
    ///
    /// Frame boundaries are rounded from the cumulative exact boundaries, so frame counts differ
    /// by at most one between slides and always sum to `round(target_secs * fps)`.
    pub fn new(images: &[PathBuf], target_secs: f64, fps: Fps) -> ReelResult<Self> {
        if images.is_empty() {
            return Err(ReelError::validation("a slide plan needs at least one image"));
        }
        if !target_secs.is_finite() || target_secs <= 0.0 {
            return Err(ReelError::validation(format!(
                "slide target duration must be positive, got {target_secs}"
            )));
        }

        let n = images.len();
        let total_frames = fps.frames_for_seconds(target_secs);
        let boundary = |i: usize| -> u64 {
            ((total_frames as f64) * (i as f64) / (n as f64)).round() as u64
        };

        let slides = images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let start = boundary(i);
                Slide {
                    image: image.clone(),
                    duration_secs: target_secs / n as f64,
                    start_frame: start,
                    frame_count: boundary(i + 1) - start,
                }
            })
            .collect();

        Ok(Self {
            slides,
            target_secs,
            fps,
        })
    }

    /// Slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Duration the plan fills.
    pub fn target_secs(&self) -> f64 {
        self.target_secs
    }

    /// Frame rate the frame counts are measured in.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Total frames across all slides.
    pub fn total_frames(&self) -> u64 {
        self.slides.iter().map(|s| s.frame_count).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/slides.rs"]
mod tests;
