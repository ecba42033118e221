use std::time::Duration;

use crate::assets::media::{AudioPcm, decode_audio_bytes_f32_stereo};
use crate::foundation::core::MIX_SAMPLE_RATE;
use crate::foundation::error::ReelError;
use crate::narration::engine::{SpeechEngine, SpeechError};

/// Longest text the endpoint accepts per request.
pub const MAX_CHUNK_CHARS: usize = 100;

const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Language codes the translate voice accepts.
const LANGUAGES: &[&str] = &[
    "af", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et",
    "fi", "fr", "gu", "hi", "hr", "hu", "hy", "id", "is", "it", "iw", "ja", "jw", "km", "kn",
    "ko", "la", "lv", "mk", "ml", "mr", "ms", "my", "ne", "nl", "no", "pl", "pt", "ro", "ru",
    "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr", "uk", "ur", "vi",
    "zh", "zh-cn", "zh-tw",
];

/// Normalize `lang` to a code the endpoint accepts, if any.
///
/// Region-qualified codes fall back to their base language (`en-GB` → `en`).
pub fn resolve_language(lang: &str) -> Option<String> {
    let lang = lang.trim().to_ascii_lowercase();
    if LANGUAGES.contains(&lang.as_str()) {
        return Some(lang);
    }
    let base = lang.split(['-', '_']).next()?;
    LANGUAGES.contains(&base).then(|| base.to_string())
}

/// Whether `text` has anything to speak.
pub fn is_speakable(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Split `text` into request-sized chunks on word boundaries.
///
/// Words longer than `max_chars` are split on char boundaries.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut cur = String::new();
    let mut cur_chars = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if cur_chars > 0 {
                chunks.push(std::mem::take(&mut cur));
                cur_chars = 0;
            }
            let rest = word.split_off(max_chars);
            chunks.push(word.into_iter().collect());
            word = rest;
        }
        if cur_chars > 0 && cur_chars + 1 + word.len() > max_chars {
            chunks.push(std::mem::take(&mut cur));
            cur_chars = 0;
        }
        if cur_chars > 0 {
            cur.push(' ');
            cur_chars += 1;
        }
        cur_chars += word.len();
        cur.extend(word);
    }
    if cur_chars > 0 {
        chunks.push(cur);
    }
    chunks
}

/// Speech via the Google Translate voice endpoint.
#[derive(Clone, Debug)]
pub struct GoogleTranslateTts {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GoogleTranslateTts {
    /// Engine against the public endpoint.
    pub fn new() -> Result<Self, ReelError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("feedreel/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ReelError::narration(format!("build tts http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the endpoint URL (mirrors, regional domains).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, ReelError> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", chunk),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .map_err(|e| ReelError::narration(format!("tts request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReelError::narration(format!(
                "tts request for '{lang}' returned HTTP {status}"
            )));
        }
        let bytes = response
            .bytes()
            .map_err(|e| ReelError::narration(format!("tts response read failed: {e}")))?;
        Ok(bytes.to_vec())
    }
}

impl SpeechEngine for GoogleTranslateTts {
    fn synthesize(&self, text: &str, lang: &str) -> Result<AudioPcm, SpeechError> {
        let tl = resolve_language(lang)
            .ok_or_else(|| SpeechError::UnsupportedLanguage(lang.to_string()))?;
        if !is_speakable(text) {
            return Err(SpeechError::Unspeakable);
        }

        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        let mut mp3 = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            mp3.extend(self.fetch_chunk(chunk, &tl, idx, chunks.len())?);
        }
        tracing::debug!(lang = %tl, chunks = chunks.len(), bytes = mp3.len(), "tts fetched");

        // MP3 frames concatenate cleanly, so one decode covers every chunk.
        Ok(decode_audio_bytes_f32_stereo(&mp3, MIX_SAMPLE_RATE)?)
    }

    fn supports_language(&self, lang: &str) -> bool {
        resolve_language(lang).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narration/gtts.rs"]
mod tests;
