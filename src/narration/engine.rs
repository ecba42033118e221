use crate::assets::media::AudioPcm;
use crate::foundation::error::ReelError;

/// Why a speech engine produced no audio.
#[derive(thiserror::Error, Debug)]
pub enum SpeechError {
    /// The engine does not know the requested language code.
    #[error("language '{0}' is not supported by the speech engine")]
    UnsupportedLanguage(String),

    /// The text was accepted but contains nothing the engine can speak.
    #[error("text contains nothing speakable")]
    Unspeakable,

    /// Transport, decode, or other failure.
    #[error(transparent)]
    Failed(#[from] ReelError),
}

/// Text-to-speech backend.
pub trait SpeechEngine {
    /// Speak `text` in `lang`, returning stereo PCM at the pipeline mix rate.
    fn synthesize(&self, text: &str, lang: &str) -> Result<AudioPcm, SpeechError>;

    /// Whether `lang` is known to the engine. Engines without a language table accept everything
    /// and report unknown codes through [`SpeechError::UnsupportedLanguage`] instead.
    fn supports_language(&self, _lang: &str) -> bool {
        true
    }
}

impl<E: SpeechEngine + ?Sized> SpeechEngine for &E {
    fn synthesize(&self, text: &str, lang: &str) -> Result<AudioPcm, SpeechError> {
        (**self).synthesize(text, lang)
    }

    fn supports_language(&self, lang: &str) -> bool {
        (**self).supports_language(lang)
    }
}

impl<E: SpeechEngine + ?Sized> SpeechEngine for Box<E> {
    fn synthesize(&self, text: &str, lang: &str) -> Result<AudioPcm, SpeechError> {
        (**self).synthesize(text, lang)
    }

    fn supports_language(&self, lang: &str) -> bool {
        (**self).supports_language(lang)
    }
}
