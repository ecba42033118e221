use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::media::AudioPcm;
use crate::foundation::core::{BASE_LANGUAGE, FALLBACK_LANGUAGE, SILENCE_GAP_SECS};
use crate::foundation::error::{ReelError, ReelResult};
use crate::narration::engine::{SpeechEngine, SpeechError};
use crate::workspace::layout::Workspace;

/// Narration audio on disk.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrationTrack {
    /// Raw interleaved `f32le` PCM.
    pub path: PathBuf,
    /// Playback length; the duration the item's slides must fill.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
}

/// Result of narrating one item.
#[derive(Clone, Debug, PartialEq)]
pub enum NarrationOutcome {
    /// Narrated in the declared language.
    Ok(NarrationTrack),
    /// The declared language was unknown; the body was spoken in the fallback language.
    FallbackLanguageUsed {
        /// Language code the item declared.
        requested: String,
        /// Track spoken with the fallback language.
        track: NarrationTrack,
    },
    /// Nothing to say; the item gets no rendered segment.
    EmptyOrUnspeakable,
}

impl NarrationOutcome {
    /// The produced track, if any.
    pub fn track(&self) -> Option<&NarrationTrack> {
        match self {
            Self::Ok(track) | Self::FallbackLanguageUsed { track, .. } => Some(track),
            Self::EmptyOrUnspeakable => None,
        }
    }

    /// Duration to fill visually; `0.0` means skip the item.
    pub fn duration_seconds(&self) -> f64 {
        self.track().map_or(0.0, |t| t.duration_seconds)
    }
}

/// Produces the per-item narration track.
pub struct NarrationSynthesizer<E> {
    engine: E,
    base_language: String,
    fallback_language: String,
    gap_secs: f64,
}

impl<E: SpeechEngine> NarrationSynthesizer<E> {
    /// Synthesizer with the standard preamble and fallback languages.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            base_language: BASE_LANGUAGE.to_string(),
            fallback_language: FALLBACK_LANGUAGE.to_string(),
            gap_secs: SILENCE_GAP_SECS,
        }
    }

    /// Override the preamble and fallback languages.
    pub fn with_languages(
        mut self,
        base_language: impl Into<String>,
        fallback_language: impl Into<String>,
    ) -> Self {
        self.base_language = base_language.into();
        self.fallback_language = fallback_language.into();
        self
    }

    /// Narrate one item into the workspace narration slot.
    ///
    /// `text` must already be in speech form (links and markers removed).
    #[tracing::instrument(level = "debug", skip_all, fields(author = %author, lang = %lang))]
    pub fn synthesize(
        &self,
        author: &str,
        text: &str,
        lang: &str,
        ws: &Workspace,
    ) -> ReelResult<NarrationOutcome> {
        if text.trim().is_empty() {
            tracing::info!("item text is empty; nothing to narrate");
            return Ok(NarrationOutcome::EmptyOrUnspeakable);
        }

        let preamble = self
            .engine
            .synthesize(&format!("{author} says.."), &self.base_language)
            .map_err(|e| ReelError::narration(format!("preamble for '{author}': {e}")))?;

        let mut fallback_from = None;
        let first = if self.engine.supports_language(lang) {
            self.engine.synthesize(text, lang)
        } else {
            Err(SpeechError::UnsupportedLanguage(lang.to_string()))
        };
        let body = match first {
            Ok(pcm) => pcm,
            Err(SpeechError::UnsupportedLanguage(_)) => {
                tracing::warn!(
                    fallback = %self.fallback_language,
                    "language not recognized; falling back"
                );
                fallback_from = Some(lang.to_string());
                match self.engine.synthesize(text, &self.fallback_language) {
                    Ok(pcm) => pcm,
                    Err(SpeechError::Unspeakable) => return Ok(unspeakable()),
                    Err(e) => {
                        return Err(ReelError::narration(format!(
                            "fallback language '{}': {e}",
                            self.fallback_language
                        )));
                    }
                }
            }
            Err(SpeechError::Unspeakable) => return Ok(unspeakable()),
            Err(SpeechError::Failed(e)) => return Err(e),
        };

        let whole = assemble_narration(&preamble, &body, self.gap_secs)?;
        let path = ws.narration_path();
        write_f32le(&whole, &path)?;
        let track = NarrationTrack {
            path,
            duration_seconds: whole.duration_secs(),
            sample_rate: whole.sample_rate,
            channels: whole.channels,
        };
        tracing::info!(duration_sec = track.duration_seconds, "narration ready");

        Ok(match fallback_from {
            Some(requested) => NarrationOutcome::FallbackLanguageUsed { requested, track },
            None => NarrationOutcome::Ok(track),
        })
    }
}

fn unspeakable() -> NarrationOutcome {
    tracing::warn!("engine found nothing speakable; skipping item");
    NarrationOutcome::EmptyOrUnspeakable
}

/// `preamble + gap + body + gap`, all in the preamble's format.
pub fn assemble_narration(
    preamble: &AudioPcm,
    body: &AudioPcm,
    gap_secs: f64,
) -> ReelResult<AudioPcm> {
    if preamble.sample_rate != body.sample_rate || preamble.channels != body.channels {
        return Err(ReelError::narration(format!(
            "preamble ({} Hz, {} ch) and body ({} Hz, {} ch) formats differ",
            preamble.sample_rate, preamble.channels, body.sample_rate, body.channels
        )));
    }
    if preamble.sample_rate == 0 || preamble.channels == 0 {
        return Err(ReelError::narration("narration audio has an empty format"));
    }

    let gap_frames = (gap_secs * f64::from(preamble.sample_rate)).round().max(0.0) as usize;
    let gap_len = gap_frames * usize::from(preamble.channels);

    let mut samples = Vec::with_capacity(
        preamble.interleaved_f32.len() + body.interleaved_f32.len() + 2 * gap_len,
    );
    samples.extend_from_slice(&preamble.interleaved_f32);
    samples.resize(samples.len() + gap_len, 0.0);
    samples.extend_from_slice(&body.interleaved_f32);
    samples.resize(samples.len() + gap_len, 0.0);

    Ok(AudioPcm {
        sample_rate: preamble.sample_rate,
        channels: preamble.channels,
        interleaved_f32: samples,
    })
}

/// Write interleaved `f32` PCM samples to a raw little-endian `.f32le` file.
pub fn write_f32le(pcm: &AudioPcm, out_path: &Path) -> ReelResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!(
                "failed to create narration output directory '{}'",
                parent.display()
            )
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(pcm.interleaved_f32.len() * 4);
    for &sample in &pcm.interleaved_f32 {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes)
        .with_context(|| format!("failed to write narration '{}'", out_path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/narration/synth.rs"]
mod tests;
