use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::annotate::wrap::wrap_text;
use crate::assets::image::{fit_exact, open_image};
use crate::foundation::core::{Canvas, TEXT_WIDTH};
use crate::foundation::error::{ReelError, ReelResult};
use crate::workspace::layout::Workspace;

/// Fixed caption placement on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLayout {
    /// Characters per line before wrapping.
    pub text_width: usize,
    /// Left margin in pixels.
    pub left: f32,
    /// Top of the first line in pixels.
    pub top: f32,
    /// Distance between line tops in pixels.
    pub line_spacing: f32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color (RGB).
    pub color: [u8; 3],
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self {
            text_width: TEXT_WIDTH,
            left: 75.0,
            top: 200.0,
            line_spacing: 55.0,
            font_size: 30.0,
            color: [0, 0, 0],
        }
    }
}

/// Where caption glyphs come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A single font file (the board's merged Noto face).
    File(PathBuf),
    /// Whatever the system font database provides.
    System,
}

/// Draws wrapped captions onto the template board.
pub struct ImageAnnotator {
    template: PathBuf,
    canvas: Canvas,
    layout: CaptionLayout,
    fontdb: Arc<usvg::fontdb::Database>,
    family: Option<String>,
}

impl ImageAnnotator {
    /// Annotator over `template`, loading glyphs from `font`.
    pub fn new(
        template: impl Into<PathBuf>,
        font: &FontSource,
        canvas: Canvas,
        layout: CaptionLayout,
    ) -> ReelResult<Self> {
        canvas.validate()?;
        let mut db = usvg::fontdb::Database::new();
        match font {
            FontSource::File(path) => db
                .load_font_file(path)
                .with_context(|| format!("load caption font '{}'", path.display()))?,
            FontSource::System => db.load_system_fonts(),
        }
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());
        if family.is_none() {
            tracing::warn!(?font, "no font faces available; captions will be blank");
        }

        Ok(Self {
            template: template.into(),
            canvas,
            layout,
            fontdb: Arc::new(db),
            family,
        })
    }

    /// Draw `"<author>: <text>"` on the board and store it in the workspace board slot.
    ///
    /// `text` is drawn as posted, links and markers included.
    #[tracing::instrument(level = "debug", skip_all, fields(author = %author))]
    pub fn annotate(&self, author: &str, text: &str, ws: &Workspace) -> ReelResult<PathBuf> {
        let out = ws.board_path();
        self.annotate_to(author, text, &out)?;
        Ok(out)
    }

    /// Same as [`ImageAnnotator::annotate`] with an explicit output path.
    pub fn annotate_to(&self, author: &str, text: &str, out: &Path) -> ReelResult<()> {
        let (template, _) = open_image(&self.template)?;
        let mut board = fit_exact(template, self.canvas).to_rgba8();

        let lines = wrap_text(&format!("{author}: {text}"), self.layout.text_width);
        if let Some(family) = self.family.as_deref() {
            let overlay = self.rasterize_caption(&lines, family)?;
            image::imageops::overlay(&mut board, &overlay, 0, 0);
        }

        image::DynamicImage::ImageRgba8(board)
            .to_rgb8()
            .save(out)
            .with_context(|| format!("write board image '{}'", out.display()))?;
        tracing::debug!(lines = lines.len(), out = %out.display(), "annotated board");
        Ok(())
    }

    fn rasterize_caption(&self, lines: &[String], family: &str) -> ReelResult<image::RgbaImage> {
        let svg = caption_svg(lines, &self.layout, self.canvas, family);
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse caption svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.canvas.width, self.canvas.height)
            .ok_or_else(|| ReelError::validation("failed to allocate caption pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let straight: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        image::RgbaImage::from_raw(self.canvas.width, self.canvas.height, straight)
            .ok_or_else(|| ReelError::validation("caption pixmap size mismatch"))
    }
}

/// SVG overlay with one `<text>` element per line.
///
/// Lines are positioned by their top edge like the board layout describes; the baseline sits one
/// font size below it.
pub(crate) fn caption_svg(
    lines: &[String],
    layout: &CaptionLayout,
    canvas: Canvas,
    family: &str,
) -> String {
    let [r, g, b] = layout.color;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    for (i, line) in lines.iter().enumerate() {
        let baseline = layout.top + layout.line_spacing * i as f32 + layout.font_size;
        svg.push_str(&format!(
            r##"<text x="{x}" y="{baseline}" font-family="{family}" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}" xml:space="preserve">{text}</text>"##,
            x = layout.left,
            family = xml_escape(family),
            size = layout.font_size,
            text = xml_escape(line),
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/board.rs"]
mod tests;
