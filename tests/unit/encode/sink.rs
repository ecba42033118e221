use super::*;

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::CANONICAL,
        audio: None,
    }
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, &frame(1)).unwrap();
    sink.push_frame(1, &frame(1)).unwrap();
    sink.push_frame(2, &frame(9)).unwrap();
    sink.end().unwrap();

    let frames = sink.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].1, frames[1].1);
    assert_ne!(frames[1].1, frames[2].1);
    assert!(sink.ended());
    assert_eq!(sink.config(), Some(&cfg()));
}

#[test]
fn in_memory_sink_rejects_out_of_order_and_unstarted() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(0, &frame(1)).is_err());

    sink.begin(cfg()).unwrap();
    sink.push_frame(5, &frame(1)).unwrap();
    assert!(sink.push_frame(5, &frame(1)).is_err());
    assert!(sink.push_frame(4, &frame(1)).is_err());
}
