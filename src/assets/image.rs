use std::path::Path;

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat, ImageReader, imageops::FilterType};

use crate::encode::sink::FrameRGBA;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};

/// Decode an image file, sniffing the format from content rather than the extension.
pub fn open_image(path: &Path) -> ReelResult<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff image format of '{}'", path.display()))?;
    let format = reader.format().ok_or_else(|| {
        ReelError::fetch(format!("unrecognized image format '{}'", path.display()))
    })?;
    let img = reader
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok((img, format))
}

/// Resize an image file to exactly `canvas` and overwrite it in its original format.
pub fn resize_in_place(path: &Path, canvas: Canvas) -> ReelResult<()> {
    let (img, format) = open_image(path)?;
    let resized = fit_exact(img, canvas);
    // JPEG has no alpha channel.
    let resized = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
        _ => resized,
    };
    resized
        .save_with_format(path, format)
        .with_context(|| format!("write resized image '{}'", path.display()))?;
    Ok(())
}

/// Stretch `img` to the canvas size, ignoring aspect ratio.
pub fn fit_exact(img: DynamicImage, canvas: Canvas) -> DynamicImage {
    if img.width() == canvas.width && img.height() == canvas.height {
        return img;
    }
    img.resize_exact(canvas.width, canvas.height, FilterType::CatmullRom)
}

/// Load an image as one opaque canvas-sized frame, flattening alpha over `bg_rgb`.
pub fn load_frame(path: &Path, canvas: Canvas, bg_rgb: [u8; 3]) -> ReelResult<FrameRGBA> {
    let (img, _) = open_image(path)?;
    let rgba = fit_exact(img, canvas).to_rgba8();
    let src = rgba.into_raw();
    let mut data = vec![0u8; src.len()];
    flatten_over_bg_to_opaque_rgba8(&mut data, &src, bg_rgb)?;
    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

/// Composite straight-alpha RGBA8 over an opaque background color.
pub fn flatten_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_straight: &[u8],
    bg_rgb: [u8; 3],
) -> ReelResult<()> {
    if dst.len() != src_straight.len() || !dst.len().is_multiple_of(4) {
        return Err(ReelError::validation(
            "flatten_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src_straight.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255 - a;
        for ((dc, &sc), &bc) in d.iter_mut().zip(&s[..3]).zip(&bg_rgb) {
            let v = mul_div255(u16::from(sc), a) + mul_div255(u16::from(bc), inv);
            *dc = v.min(255) as u8;
        }
        d[3] = 255;
    }

    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (x * y + 127) / 255
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image.rs"]
mod tests;
