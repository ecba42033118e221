use crate::annotate::board::ImageAnnotator;
use crate::fetch::download::{Downloader, HttpDownloader};
use crate::fetch::media::MediaFetcher;
use crate::foundation::error::ReelResult;
use crate::narration::engine::SpeechEngine;
use crate::narration::gtts::GoogleTranslateTts;
use crate::narration::synth::{NarrationOutcome, NarrationSynthesizer};
use crate::pipeline::config::ReelConfig;
use crate::render::clip::{ClipRenderer, slide_images};
use crate::render::manifest::{RenderedSegment, SegmentManifest};
use crate::render::sequence::{ConcatOutcome, SequenceConcatenator};
use crate::timeline::model::TimelineItem;
use crate::timeline::text::speech_text;
use crate::workspace::layout::Workspace;

/// Why an item contributed no segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty text, or text the engine could not speak.
    EmptyNarration,
    /// Narration reported success but its audio file was gone at render time.
    NarrationMissing,
    /// The item failed and failure containment was on.
    Failed(String),
}

/// Summary of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Items processed.
    pub items: usize,
    /// Indices that produced a segment, ascending.
    pub rendered: Vec<usize>,
    /// Indices that produced nothing, with the reason.
    pub skipped: Vec<(usize, SkipReason)>,
    /// Indices narrated in the fallback language, with the language they declared.
    pub fallbacks: Vec<(usize, String)>,
    /// Result of the final concatenation.
    pub outcome: ConcatOutcome,
}

enum ItemResult {
    Rendered {
        segment: RenderedSegment,
        fallback_from: Option<String>,
    },
    Skipped(SkipReason),
}

/// Fetch, annotate, narrate and render every item, then join the clips.
pub struct Pipeline<E, D> {
    workspace: Workspace,
    fetcher: MediaFetcher<D>,
    annotator: ImageAnnotator,
    narrator: NarrationSynthesizer<E>,
    renderer: ClipRenderer,
    concatenator: SequenceConcatenator,
    contain_item_failures: bool,
}

impl Pipeline<GoogleTranslateTts, HttpDownloader> {
    /// Pipeline over the network-backed downloader and speech engine.
    pub fn from_config(cfg: &ReelConfig) -> ReelResult<Self> {
        Self::new(cfg, GoogleTranslateTts::new()?, HttpDownloader::new()?)
    }
}

impl<E: SpeechEngine, D: Downloader> Pipeline<E, D> {
    /// Pipeline over caller-provided collaborators.
    pub fn new(cfg: &ReelConfig, engine: E, downloader: D) -> ReelResult<Self> {
        cfg.validate()?;
        let annotator = ImageAnnotator::new(
            &cfg.template_image,
            &cfg.font_source(),
            cfg.canvas,
            cfg.caption_layout(),
        )?;
        Ok(Self {
            workspace: cfg.workspace(),
            fetcher: MediaFetcher::new(downloader, cfg.canvas),
            annotator,
            narrator: NarrationSynthesizer::new(engine)
                .with_languages(&cfg.base_language, &cfg.fallback_language),
            renderer: ClipRenderer::new(cfg.canvas, cfg.fps),
            concatenator: SequenceConcatenator::new(cfg.canvas, cfg.fps),
            contain_item_failures: cfg.contain_item_failures,
        })
    }

    /// Workspace this pipeline writes into.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Process `items` in the given order and write the final video.
    ///
    /// Item `i` renders to segment `i`, so final order follows input order.
    pub fn run(&self, items: &[TimelineItem]) -> ReelResult<RunReport> {
        let ws = &self.workspace;
        ws.ensure_dirs()?;
        ws.clear_item_scratch()?;
        ws.clear_rendered_segments()?;
        ws.clear_prior_final_output()?;

        let mut manifest = SegmentManifest::new();
        let mut report = RunReport {
            items: items.len(),
            rendered: Vec::new(),
            skipped: Vec::new(),
            fallbacks: Vec::new(),
            outcome: ConcatOutcome::NothingProduced,
        };

        for (index, item) in items.iter().enumerate() {
            tracing::info!(index, author = %item.author, text = %item.text, "processing item");
            ws.clear_item_scratch()?;

            match self.process_item(index, item) {
                Ok(ItemResult::Rendered {
                    segment,
                    fallback_from,
                }) => {
                    if let Some(lang) = fallback_from {
                        report.fallbacks.push((index, lang));
                    }
                    report.rendered.push(index);
                    manifest.record(segment);
                    manifest.save(&ws.manifest_path())?;
                }
                Ok(ItemResult::Skipped(reason)) => {
                    tracing::info!(index, reason = ?reason, "item skipped");
                    report.skipped.push((index, reason));
                }
                Err(e) if self.contain_item_failures => {
                    tracing::error!(index, error = %e, "item failed; continuing");
                    report.skipped.push((index, SkipReason::Failed(e.to_string())));
                }
                Err(e) => return Err(e),
            }

            ws.clear_item_scratch()?;
        }

        report.outcome = self
            .concatenator
            .concatenate(&manifest, ws.final_output())?;
        ws.clear_rendered_segments()?;

        tracing::info!(
            items = report.items,
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "run finished"
        );
        Ok(report)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(index = index))]
    fn process_item(&self, index: usize, item: &TimelineItem) -> ReelResult<ItemResult> {
        let ws = &self.workspace;
        let fetched = self.fetcher.fetch(item, ws)?;
        let board = self.annotator.annotate(&item.author, &item.text, ws)?;

        let spoken = speech_text(&item.text);
        let outcome = self
            .narrator
            .synthesize(&item.author, &spoken, &item.language_code, ws)?;
        let (track, fallback_from) = match outcome {
            NarrationOutcome::Ok(track) => (track, None),
            NarrationOutcome::FallbackLanguageUsed { requested, track } => {
                (track, Some(requested))
            }
            NarrationOutcome::EmptyOrUnspeakable => {
                return Ok(ItemResult::Skipped(SkipReason::EmptyNarration));
            }
        };

        let images = slide_images(fetched.image_paths(), &board);
        let videos = fetched.video_paths();
        Ok(
            match self.renderer.render(index, &images, &videos, &track, ws)? {
                Some(segment) => ItemResult::Rendered {
                    segment,
                    fallback_from,
                },
                None => ItemResult::Skipped(SkipReason::NarrationMissing),
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
