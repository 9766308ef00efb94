// File: crates/chart-core/src/text.rs
// Summary: Axis label painter (price and date labels) on Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const MONO_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Horizontal anchor for a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Right,
    Center,
}

pub struct LabelPainter {
    fonts: FontCollection,
    size: f32,
    color: skia::Color,
}

impl LabelPainter {
    pub fn new(size: f32, color: skia::Color) -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts, size: size.max(1.0), color }
    }

    fn layout(&self, text: &str) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut style = TextStyle::new();
        style.set_font_size(self.size);
        style.set_color(self.color);
        // tabular digits keep price labels aligned
        style.set_font_families(MONO_FAMILIES);

        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline roughly at `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor) {
        let p = self.layout(text);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Right => x - w,
            Anchor::Center => x - w * 0.5,
        };
        p.paint(canvas, (left, y - self.size * 0.8));
    }
}
