use super::*;

fn input(path: &str, has_audio: bool, duration_sec: f64) -> ConcatInput {
    ConcatInput {
        path: PathBuf::from(path),
        has_audio,
        duration_sec,
    }
}

#[test]
fn filter_scales_every_input_and_joins_in_order() {
    let graph = concat_filter(
        &[input("a.mp4", true, 2.0), input("b.mp4", true, 3.0)],
        Canvas::CANONICAL,
        Fps::CANONICAL,
    );
    assert!(graph.contains("[0:v]scale=1280:720,setsar=1,fps=24"));
    assert!(graph.contains("[1:v]scale=1280:720,setsar=1,fps=24"));
    assert!(graph.contains("[0:a]aresample=48000"));
    assert!(graph.ends_with("[v0][a0][v1][a1]concat=n=2:v=1:a=1[v][a]"));
}

#[test]
fn silent_inputs_get_generated_audio_of_matching_length() {
    let graph = concat_filter(
        &[input("mute.mp4", false, 1.5)],
        Canvas::CANONICAL,
        Fps::CANONICAL,
    );
    assert!(graph.contains("anullsrc=r=48000:cl=stereo,atrim=duration=1.500000"));
    assert!(!graph.contains("[0:a]"));
}

#[test]
fn args_list_inputs_before_graph_and_output_last() {
    let args = concat_args(
        &[input("a.mp4", true, 1.0), input("b.mp4", false, 1.0)],
        Canvas::CANONICAL,
        Fps::CANONICAL,
        Path::new("final.mp4"),
    );
    let a = args.iter().position(|s| s == "a.mp4").unwrap();
    let b = args.iter().position(|s| s == "b.mp4").unwrap();
    let graph = args.iter().position(|s| s == "-filter_complex").unwrap();
    assert!(a < b && b < graph);
    assert!(args.windows(2).any(|w| w == ["-r", "24"]));
    assert_eq!(args.last().unwrap(), "final.mp4");
}

#[test]
fn empty_input_list_is_rejected() {
    let err = concat_media(&[], Canvas::CANONICAL, Fps::CANONICAL, Path::new("x.mp4"));
    assert!(err.is_err());
}
