use super::*;
use crate::encode::sink::InMemorySink;

fn tiny() -> Canvas {
    Canvas {
        width: 8,
        height: 4,
    }
}

fn write_png(path: &Path, px: [u8; 4]) {
    image::RgbaImage::from_pixel(3, 3, image::Rgba(px))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn track(path: PathBuf, secs: f64) -> NarrationTrack {
    NarrationTrack {
        path,
        duration_seconds: secs,
        sample_rate: 48_000,
        channels: 2,
    }
}

#[test]
fn board_substitutes_for_missing_images() {
    let board = Path::new("tmp/board.png");
    assert_eq!(slide_images(vec![], board), vec![board.to_path_buf()]);

    let fetched = vec![PathBuf::from("tmp/0.jpg"), PathBuf::from("tmp/2.png")];
    assert_eq!(slide_images(fetched.clone(), board), fetched);
}

#[test]
fn slides_stream_in_order_with_equal_shares() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    write_png(&a, [255, 0, 0, 255]);
    write_png(&b, [0, 0, 255, 255]);

    let renderer = ClipRenderer::new(tiny(), Fps::CANONICAL);
    let plan = SlidePlan::new(&[a, b], 2.0, Fps::CANONICAL).unwrap();
    let narration = track(dir.path().join("narration.f32le"), 2.0);

    let mut sink = InMemorySink::new();
    renderer.render_slides(&plan, &narration, &mut sink).unwrap();

    let frames = sink.frames();
    assert_eq!(frames.len(), 48);
    assert!(frames.iter().enumerate().all(|(i, (idx, _))| *idx == i as u64));
    assert!(frames[..24].iter().all(|(_, fp)| *fp == frames[0].1));
    assert!(frames[24..].iter().all(|(_, fp)| *fp == frames[24].1));
    assert_ne!(frames[0].1, frames[24].1);
    assert!(sink.ended());

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (8, 4));
    assert_eq!(cfg.fps, Fps::CANONICAL);
    assert_eq!(cfg.audio.as_ref().unwrap().path, narration.path);
}

#[test]
fn missing_narration_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::under(dir.path());
    ws.ensure_dirs().unwrap();
    let board = dir.path().join("board.png");
    write_png(&board, [255, 255, 255, 255]);

    let renderer = ClipRenderer::new(tiny(), Fps::CANONICAL);
    let narration = track(ws.narration_path(), 3.0);
    let res = renderer
        .render(4, &[board], &[], &narration, &ws)
        .unwrap();
    assert!(res.is_none());
    assert!(!ws.segment_path(4).exists());
}

#[test]
fn unreadable_slide_image_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"nope").unwrap();

    let renderer = ClipRenderer::new(tiny(), Fps::CANONICAL);
    let plan = SlidePlan::new(&[bad], 1.0, Fps::CANONICAL).unwrap();
    let mut sink = InMemorySink::new();
    assert!(
        renderer
            .render_slides(&plan, &track(dir.path().join("n.f32le"), 1.0), &mut sink)
            .is_err()
    );
}
