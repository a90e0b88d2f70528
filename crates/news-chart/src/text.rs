// File: crates/news-chart/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment around an anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::axis::HAlign;

/// Laid-out text size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    /// Shape `text` at `size` pixels.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        TextExtent { width: p.longest_line(), height: p.height() }
    }

    /// Draw `text` so that its horizontal `align` edge sits on `x` and its
    /// vertical center sits on `y`.
    pub fn draw_centered_v(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: HAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (aligned_left(x, w, align), y - h * 0.5));
    }

    /// Draw `text` hanging below `y` (its top edge on `y`).
    pub fn draw_below(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: HAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        p.paint(canvas, (aligned_left(x, w, align), y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Left edge of a box of width `w` whose `align` edge is at `x`.
#[inline]
pub fn aligned_left(x: f32, w: f32, align: HAlign) -> f32 {
    match align {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    }
}
