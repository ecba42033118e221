use super::*;
use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::Fps;

fn cfg(audio: Option<AudioInputConfig>) -> SinkConfig {
    SinkConfig {
        width: 1280,
        height: 720,
        fps: Fps::CANONICAL,
        audio,
    }
}

#[test]
fn video_only_args_disable_audio() {
    let args = sink_args(&cfg(None), Path::new("out/0.mp4"), true);
    assert_eq!(args[0], "-y");
    assert!(args.windows(2).any(|w| w == ["-s", "1280x720"]));
    assert!(args.windows(2).any(|w| w == ["-r", "24"]));
    assert!(args.contains(&"-an".to_string()));
    assert_eq!(args.last().unwrap(), "out/0.mp4");
}

#[test]
fn audio_args_follow_video_input() {
    let audio = AudioInputConfig {
        path: PathBuf::from("tmp/narration.f32le"),
        sample_rate: 48_000,
        channels: 2,
    };
    let args = sink_args(&cfg(Some(audio)), Path::new("o.mp4"), false);
    assert_eq!(args[0], "-n");

    let video_in = args.iter().position(|a| a == "pipe:0").unwrap();
    let audio_in = args
        .iter()
        .position(|a| a == "tmp/narration.f32le")
        .unwrap();
    assert!(video_in < audio_in);
    assert!(args.windows(2).any(|w| w == ["-ar", "48000"]));
    assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
    assert!(!args.contains(&"-an".to_string()));
}

#[test]
fn begin_rejects_odd_canvas_and_missing_audio() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(dir.path().join("o.mp4")));

    let mut odd = cfg(None);
    odd.width = 11;
    assert!(sink.begin(odd).is_err());

    let missing = AudioInputConfig {
        path: dir.path().join("absent.f32le"),
        sample_rate: 48_000,
        channels: 2,
    };
    assert!(sink.begin(cfg(Some(missing))).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("never.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    assert!(sink.push_frame(0, &frame).is_err());
    assert!(sink.end().is_err());
}
