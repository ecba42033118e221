use crate::foundation::error::{ReelError, ReelResult};

/// Characters per caption line before wrapping.
///
/// This is a character-count approximation of the board's pixel width, not real text layout.
pub const TEXT_WIDTH: usize = 60;

/// Language used for the "`<author>` says.." preamble.
pub const BASE_LANGUAGE: &str = "en";

/// Language retried once when the engine does not recognize an item's declared language.
pub const FALLBACK_LANGUAGE: &str = "ta";

/// Silence inserted after the preamble and after the body, in seconds.
pub const SILENCE_GAP_SECS: f64 = 1.0;

/// Internal audio sample rate used across decode/assemble/encode.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Channel count of every PCM buffer handled by the pipeline.
pub const MIX_CHANNELS: u16 = 2;

/// Frames per second (integer rate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Fps(pub u32);

impl Fps {
    /// Output rate of every produced visual artifact.
    pub const CANONICAL: Fps = Fps(24);

    /// Create a validated FPS value.
    pub fn new(fps: u32) -> ReelResult<Self> {
        if fps == 0 {
            return Err(ReelError::validation("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Convert seconds to a frame count, rounding to the nearest frame.
    pub fn frames_for_seconds(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) / self.as_f64()
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Frame resolution of every produced visual artifact.
    pub const CANONICAL: Canvas = Canvas {
        width: 1280,
        height: 720,
    };

    /// Reject zero or odd dimensions (yuv420p output needs even sizes).
    pub fn validate(self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("canvas width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ReelError::validation(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }

    /// Byte length of one RGBA8 frame at this size.
    pub fn rgba_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// `WIDTHxHEIGHT`, as `ffmpeg` expects for `-s`.
    pub fn ffmpeg_size(self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
