use super::*;
use crate::timeline::model::{MediaKind, MediaRef, VideoVariant};

#[test]
fn chronological_reverses_native_order() {
    let items = vec![
        TimelineItem::new("newest", "c", "en"),
        TimelineItem::new("middle", "b", "en"),
        TimelineItem::new("oldest", "a", "en"),
    ];
    let ordered = chronological(items);
    let authors: Vec<_> = ordered.iter().map(|i| i.author.as_str()).collect();
    assert_eq!(authors, ["oldest", "middle", "newest"]);
}

#[test]
fn json_source_reads_items_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.json");
    std::fs::write(
        &path,
        r#"[
  {
    "author": "ada",
    "text": "look #rust https://t.co/x",
    "language_code": "en",
    "attachments": [
      { "kind": "image", "source_url": "https://img.example/a.jpg" },
      {
        "kind": "video",
        "source_url": "https://img.example/poster.jpg",
        "variants": [
          { "url": "https://vid.example/a.m3u8" },
          { "url": "https://vid.example/a.mp4?tag=12", "bitrate": 832000 }
        ]
      }
    ]
  },
  { "author": "bob", "text": "plain" }
]"#,
    )
    .unwrap();

    let items = JsonTimelineSource::new(&path).fetch_items().unwrap();
    assert_eq!(items.len(), 2);

    let media = items[0].attachments.as_ref().unwrap();
    assert_eq!(media[0], MediaRef::image("https://img.example/a.jpg"));
    assert_eq!(media[1].kind, MediaKind::Video);
    assert_eq!(media[1].variants[0].bitrate, None);
    assert_eq!(
        media[1].variants[1],
        VideoVariant::new("https://vid.example/a.mp4?tag=12", 832000)
    );

    assert_eq!(items[1].language_code, "en");
    assert!(items[1].attachments.is_none());
}

#[test]
fn json_source_reports_bad_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.json");
    std::fs::write(&path, r#"{"author": "not-an-array"}"#).unwrap();

    let err = JsonTimelineSource::new(&path).fetch_items().unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn json_source_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = JsonTimelineSource::new(dir.path().join("absent.json"));
    assert!(src.fetch_items().is_err());
}
