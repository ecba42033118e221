use super::*;

fn template(dir: &Path) -> PathBuf {
    let path = dir.join("board.jpeg");
    image::RgbImage::from_pixel(64, 36, image::Rgb([255, 255, 255]))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

fn small_canvas() -> Canvas {
    Canvas {
        width: 128,
        height: 72,
    }
}

#[test]
fn default_layout_matches_board_geometry() {
    let layout = CaptionLayout::default();
    assert_eq!(layout.text_width, 60);
    assert_eq!((layout.left, layout.top), (75.0, 200.0));
    assert_eq!(layout.line_spacing, 55.0);
    assert_eq!(layout.font_size, 30.0);
    assert_eq!(layout.color, [0, 0, 0]);
}

#[test]
fn caption_svg_places_lines_with_fixed_spacing() {
    let lines = vec!["ada: first".to_string(), "second".to_string()];
    let svg = caption_svg(&lines, &CaptionLayout::default(), Canvas::CANONICAL, "Noto Sans");
    assert!(svg.contains(r#"width="1280" height="720""#));
    assert!(svg.contains(r#"<text x="75" y="230""#));
    assert!(svg.contains(r#"<text x="75" y="285""#));
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(">second</text>"));
}

#[test]
fn caption_svg_escapes_markup_and_parses() {
    let lines = vec![r#"bob: 1 < 2 & "quotes" <b>x</b>"#.to_string()];
    let svg = caption_svg(&lines, &CaptionLayout::default(), Canvas::CANONICAL, "A&B");
    assert!(svg.contains("1 &lt; 2 &amp; &quot;quotes&quot; &lt;b&gt;"));
    assert!(svg.contains(r#"font-family="A&amp;B""#));
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}

#[test]
fn annotate_writes_canvas_sized_board_to_workspace_slot() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::under(dir.path());
    ws.ensure_dirs().unwrap();

    let annotator = ImageAnnotator::new(
        template(dir.path()),
        &FontSource::System,
        small_canvas(),
        CaptionLayout {
            top: 4.0,
            left: 4.0,
            line_spacing: 10.0,
            font_size: 8.0,
            ..CaptionLayout::default()
        },
    )
    .unwrap();

    let out = annotator
        .annotate("ada", "hello https://t.co/x #tag", &ws)
        .unwrap();
    assert_eq!(out, ws.board_path());
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (128, 72));

    // Second item overwrites the same slot.
    let again = annotator.annotate("bob", "bye", &ws).unwrap();
    assert_eq!(again, out);
}

#[test]
fn missing_font_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = ImageAnnotator::new(
        template(dir.path()),
        &FontSource::File(dir.path().join("absent.ttf")),
        small_canvas(),
        CaptionLayout::default(),
    );
    assert!(res.is_err());
}

#[test]
fn missing_template_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let annotator = ImageAnnotator::new(
        dir.path().join("absent.jpeg"),
        &FontSource::System,
        small_canvas(),
        CaptionLayout::default(),
    )
    .unwrap();
    assert!(
        annotator
            .annotate_to("a", "b", &dir.path().join("out.png"))
            .is_err()
    );
}
