/// Still-image decode, resize, and alpha flattening.
pub mod image;
/// `ffprobe`/`ffmpeg` probing and audio decode.
pub mod media;
