use super::*;

#[test]
fn strips_links_and_markers() {
    assert_eq!(
        speech_text("Big #news today https://t.co/abc123 read it"),
        "Big news today  read it"
    );
}

#[test]
fn link_only_text_becomes_blank() {
    assert!(speech_text("https://t.co/abc").trim().is_empty());
}

#[test]
fn plain_text_is_untouched() {
    assert_eq!(speech_text("hello world"), "hello world");
}
