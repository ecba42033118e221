use super::*;
use crate::render::manifest::RenderedSegment;

#[test]
fn empty_manifest_produces_nothing_and_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("final.mp4");

    let cat = SequenceConcatenator::new(Canvas::CANONICAL, Fps::CANONICAL);
    let outcome = cat.concatenate(&SegmentManifest::new(), &out).unwrap();
    assert_eq!(outcome, ConcatOutcome::NothingProduced);
    assert!(!out.exists());
}

#[test]
fn missing_segment_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut manifest = SegmentManifest::new();
    manifest.record(RenderedSegment {
        index: 0,
        path: dir.path().join("0.mp4"),
        duration_seconds: 1.0,
    });

    let cat = SequenceConcatenator::new(Canvas::CANONICAL, Fps::CANONICAL);
    let err = cat
        .concatenate(&manifest, &dir.path().join("final.mp4"))
        .unwrap_err();
    assert!(err.to_string().contains("segment 0 is missing"));
}
