use super::*;

fn write_png(path: &Path, w: u32, h: u32, px: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let src = vec![200u8, 100, 50, 0];
    let mut dst = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_half_alpha_over_black() {
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut dst, &src, [0, 0, 0]).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_over_bg_to_opaque_rgba8(&mut dst, &[0u8; 4], [0, 0, 0]).is_err());
}

#[test]
fn resize_in_place_keeps_format_and_hits_canvas() {
    let dir = tempfile::tempdir().unwrap();
    // Extension lies about the content; the sniffed format wins.
    let path = dir.path().join("0.jpg");
    write_png(&path, 10, 6, [255, 0, 0, 255]);

    let canvas = Canvas {
        width: 32,
        height: 18,
    };
    resize_in_place(&path, canvas).unwrap();

    let (img, format) = open_image(&path).unwrap();
    assert_eq!(format, ImageFormat::Png);
    assert_eq!((img.width(), img.height()), (32, 18));
}

#[test]
fn load_frame_is_opaque_and_canvas_sized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.png");
    write_png(&path, 4, 4, [0, 255, 0, 0]);

    let canvas = Canvas {
        width: 8,
        height: 4,
    };
    let frame = load_frame(&path, canvas, [0, 0, 0]).unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), canvas.rgba_len());
    assert!(frame.data.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn unreadable_image_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.png");
    std::fs::write(&path, b"not an image").unwrap();
    assert!(open_image(&path).is_err());
}
