use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::encode::ffmpeg::{ensure_parent_dir, is_ffmpeg_on_path};
use crate::foundation::core::{Canvas, Fps, MIX_SAMPLE_RATE};
use crate::foundation::error::{ReelError, ReelResult};

/// One file to join, with the probe facts the filter graph needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcatInput {
    /// Media file path.
    pub path: PathBuf,
    /// Whether the file carries an audio stream; silent audio is generated otherwise.
    pub has_audio: bool,
    /// Duration in seconds, used to size generated silence.
    pub duration_sec: f64,
}

/// Build the `-filter_complex` graph joining `inputs` in order.
///
/// Every video is stretched to the canvas and resampled to `fps`; every audio stream is brought to
/// 48 kHz stereo so the concat filter sees uniform streams.
pub(crate) fn concat_filter(inputs: &[ConcatInput], canvas: Canvas, fps: Fps) -> String {
    let mut graph = String::new();
    for (i, input) in inputs.iter().enumerate() {
        let _ = write!(
            graph,
            "[{i}:v]scale={w}:{h},setsar=1,fps={fps},format=yuv420p[v{i}];",
            w = canvas.width,
            h = canvas.height,
            fps = fps.0,
        );
        if input.has_audio {
            let _ = write!(
                graph,
                "[{i}:a]aresample={MIX_SAMPLE_RATE},aformat=sample_fmts=fltp:channel_layouts=stereo[a{i}];"
            );
        } else {
            let _ = write!(
                graph,
                "anullsrc=r={MIX_SAMPLE_RATE}:cl=stereo,atrim=duration={d:.6},aformat=sample_fmts=fltp:channel_layouts=stereo[a{i}];",
                d = input.duration_sec.max(0.0),
            );
        }
    }
    for i in 0..inputs.len() {
        let _ = write!(graph, "[v{i}][a{i}]");
    }
    let _ = write!(graph, "concat=n={}:v=1:a=1[v][a]", inputs.len());
    graph
}

pub(crate) fn concat_args(
    inputs: &[ConcatInput],
    canvas: Canvas,
    fps: Fps,
    out_path: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = ["-y", "-loglevel", "error"].map(String::from).to_vec();
    for input in inputs {
        args.push("-i".into());
        args.push(input.path.to_string_lossy().into_owned());
    }
    args.push("-filter_complex".into());
    args.push(concat_filter(inputs, canvas, fps));
    args.extend(
        [
            "-map",
            "[v]",
            "-map",
            "[a]",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-c:a",
            "aac",
            "-r",
        ]
        .map(String::from),
    );
    args.push(fps.0.to_string());
    args.extend(["-movflags", "+faststart"].map(String::from));
    args.push(out_path.to_string_lossy().into_owned());
    args
}

/// Join `inputs` end to end into `out_path`, re-encoding at `canvas`/`fps`.
pub fn concat_media(
    inputs: &[ConcatInput],
    canvas: Canvas,
    fps: Fps,
    out_path: &Path,
) -> ReelResult<()> {
    if inputs.is_empty() {
        return Err(ReelError::validation("concat needs at least one input"));
    }
    canvas.validate()?;
    ensure_parent_dir(out_path)?;
    if !is_ffmpeg_on_path() {
        return Err(ReelError::encode(
            "ffmpeg is required for MP4 encoding, but was not found on PATH",
        ));
    }

    tracing::debug!(inputs = inputs.len(), out = %out_path.display(), "ffmpeg concat");
    let out = Command::new("ffmpeg")
        .args(concat_args(inputs, canvas, fps, out_path))
        .output()
        .map_err(|e| ReelError::encode(format!("failed to spawn ffmpeg for concat: {e}")))?;
    if !out.status.success() {
        return Err(ReelError::encode(format!(
            "ffmpeg concat into '{}' failed: {}",
            out_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/concat.rs"]
mod tests;
