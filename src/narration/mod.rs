//! Spoken narration for one item: preamble, body, and the silences between them.

/// Speech engine seam and its failure modes.
pub mod engine;
/// Google Translate text-to-speech engine.
pub mod gtts;
/// Narration assembly and the tagged synthesis outcome.
pub mod synth;
