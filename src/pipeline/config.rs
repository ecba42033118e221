use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::annotate::board::{CaptionLayout, FontSource};
use crate::foundation::core::{BASE_LANGUAGE, Canvas, FALLBACK_LANGUAGE, Fps, TEXT_WIDTH};
use crate::foundation::error::{ReelError, ReelResult};
use crate::workspace::layout::Workspace;

/// Settings for one run. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    /// Flat scratch area for per-item intermediates.
    pub scratch_dir: PathBuf,
    /// Directory of numbered per-item clips.
    pub rendered_dir: PathBuf,
    /// Final video path.
    pub final_output: PathBuf,
    /// Board template image.
    pub template_image: PathBuf,
    /// Caption font file; system fonts when absent.
    pub font_path: Option<PathBuf>,
    /// Caption characters per line.
    pub text_width: usize,
    /// Preamble language.
    pub base_language: String,
    /// Body language retried when the declared one is unknown.
    pub fallback_language: String,
    /// Output frame size.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Turn unexpected per-item failures into skips instead of ending the run.
    pub contain_item_failures: bool,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("tmp"),
            rendered_dir: PathBuf::from("tmp/videos"),
            final_output: PathBuf::from("tweet_video.mp4"),
            template_image: PathBuf::from("board.jpeg"),
            font_path: Some(PathBuf::from("fonts/noto-sans/NotoSansMergedAll.ttf")),
            text_width: TEXT_WIDTH,
            base_language: BASE_LANGUAGE.to_string(),
            fallback_language: FALLBACK_LANGUAGE.to_string(),
            canvas: Canvas::CANONICAL,
            fps: Fps::CANONICAL,
            contain_item_failures: false,
        }
    }
}

impl ReelConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ReelError::serde(format!("config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check values that would only fail deep inside a run.
    pub fn validate(&self) -> ReelResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.0)?;
        if self.text_width == 0 {
            return Err(ReelError::validation("text_width must be > 0"));
        }
        if self.base_language.trim().is_empty() || self.fallback_language.trim().is_empty() {
            return Err(ReelError::validation(
                "base_language and fallback_language must be non-empty",
            ));
        }
        if self.scratch_dir == self.rendered_dir {
            return Err(ReelError::validation(
                "rendered_dir must differ from scratch_dir",
            ));
        }
        Ok(())
    }

    /// Workspace over the configured paths.
    pub fn workspace(&self) -> Workspace {
        Workspace::new(
            &self.scratch_dir,
            &self.rendered_dir,
            &self.final_output,
        )
    }

    /// Caption placement with the configured wrap width.
    pub fn caption_layout(&self) -> CaptionLayout {
        CaptionLayout {
            text_width: self.text_width,
            ..CaptionLayout::default()
        }
    }

    /// Where caption glyphs come from.
    pub fn font_source(&self) -> FontSource {
        match &self.font_path {
            Some(path) => FontSource::File(path.clone()),
            None => FontSource::System,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
