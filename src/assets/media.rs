use std::io::{Read as _, Write as _};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::foundation::error::{ReelError, ReelResult};

#[derive(Clone, Debug)]
/// Basic metadata about a media file.
pub struct MediaInfo {
    /// Video width in pixels, when a video stream exists.
    pub width: Option<u32>,
    /// Video height in pixels, when a video stream exists.
    pub height: Option<u32>,
    /// Whether ffprobe detected at least one audio stream.
    pub has_audio: bool,
    /// Container duration in seconds.
    pub duration_sec: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Decoded interleaved floating-point PCM.
pub struct AudioPcm {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Interleaved `f32` PCM samples.
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    /// Empty buffer with the given format.
    pub fn empty(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
            interleaved_f32: Vec::new(),
        }
    }

    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.interleaved_f32.len() / usize::from(self.channels)
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Probe stream and container metadata through `ffprobe`.
pub fn probe_media(source_path: &Path) -> ReelResult<MediaInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| ReelError::encode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ReelError::encode(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| ReelError::encode(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"));
    let has_audio = parsed
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));
    let duration_sec = parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| {
            ReelError::encode(format!(
                "ffprobe reported no duration for '{}'",
                source_path.display()
            ))
        })?;

    Ok(MediaInfo {
        width: video_stream.and_then(|s| s.width),
        height: video_stream.and_then(|s| s.height),
        has_audio,
        duration_sec,
    })
}

/// Decode encoded audio bytes (e.g. an MP3 response body) to stereo interleaved `f32` PCM.
pub fn decode_audio_bytes_f32_stereo(bytes: &[u8], sample_rate: u32) -> ReelResult<AudioPcm> {
    let mut child = Command::new("ffmpeg")
        .args(["-v", "error", "-i", "pipe:0"])
        .args(pcm_output_args(sample_rate))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ReelError::encode(format!("failed to run ffmpeg for audio decode: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ReelError::encode("failed to open ffmpeg stdin (unexpected)"))?;
    let input = bytes.to_vec();
    let feeder = std::thread::spawn(move || -> std::io::Result<()> {
        stdin.write_all(&input)?;
        Ok(())
    });

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| ReelError::encode("failed to open ffmpeg stdout (unexpected)"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| ReelError::encode("failed to open ffmpeg stderr (unexpected)"))?;
    let stderr_drain = std::thread::spawn(move || {
        let mut buf = Vec::new();
        stderr.read_to_end(&mut buf).map(|_| buf)
    });

    let mut pcm_bytes = Vec::new();
    stdout
        .read_to_end(&mut pcm_bytes)
        .map_err(|e| ReelError::encode(format!("failed to read ffmpeg stdout: {e}")))?;
    let status = child
        .wait()
        .map_err(|e| ReelError::encode(format!("failed to wait for ffmpeg: {e}")))?;

    // A broken pipe here just means ffmpeg stopped reading; the exit status tells the story.
    let _ = feeder.join();
    let stderr_bytes = stderr_drain
        .join()
        .map_err(|_| ReelError::encode("ffmpeg stderr drain thread panicked"))?
        .unwrap_or_default();

    if !status.success() {
        return Err(ReelError::encode(format!(
            "ffmpeg audio decode failed for in-memory input: {}",
            String::from_utf8_lossy(&stderr_bytes).trim()
        )));
    }

    pcm_from_f32le(&pcm_bytes, sample_rate)
}

fn pcm_output_args(sample_rate: u32) -> [String; 10] {
    [
        "-vn".into(),
        "-f".into(),
        "f32le".into(),
        "-acodec".into(),
        "pcm_f32le".into(),
        "-ac".into(),
        "2".into(),
        "-ar".into(),
        sample_rate.to_string(),
        "pipe:1".into(),
    ]
}

pub(crate) fn pcm_from_f32le(bytes: &[u8], sample_rate: u32) -> ReelResult<AudioPcm> {
    if !bytes.len().is_multiple_of(4) {
        return Err(ReelError::encode(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    let interleaved_f32 = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    Ok(AudioPcm {
        sample_rate,
        channels: 2,
        interleaved_f32,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
