// File: crates/news-chart/src/render.rs
// Summary: Headless PNG rendering of a Figure on a Skia CPU raster surface.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::axis::HAlign;
use crate::error::ChartError;
use crate::figure::{Figure, LineMark, Mark, PointMark, TextMark};
use crate::layout::{tight_layout, PlotArea, TICK_LENGTH, TICK_PAD, TITLE_PAD};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{pt_to_px, Insets, DPI, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Pixels per inch; point sizes in the figure are scaled by `dpi / 72`.
    pub dpi: f32,
    /// Outer padding kept free by the tight layout.
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to get font-independent output (pixel snapshots).
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::paper(),
            draw_text: true,
        }
    }
}

/// Render `fig` and return encoded PNG bytes. The surface lives only for
/// the duration of this call.
pub fn render_to_png_bytes(fig: &Figure, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
    let shaper = TextShaper::new();
    if opts.draw_text && shaper.measure("0", 10.0).width <= 0.0 {
        warn!("no usable system font; labels will be missing from the image");
    }
    let area = tight_layout(fig, &shaper, opts);

    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    draw_title(canvas, &shaper, fig, &area, opts);
    draw_frame(canvas, fig, &area, opts);
    draw_x_ticks(canvas, &shaper, fig, &area, opts);

    for mark in fig.paint_order() {
        match mark {
            Mark::Line(m) => draw_line(canvas, m, &area, opts),
            Mark::Point(m) => draw_point(canvas, m, &area, opts),
            Mark::Text(m) => draw_text(canvas, &shaper, m, &area, opts),
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    debug!(bytes = data.as_bytes().len(), "encoded png");
    Ok(data.as_bytes().to_vec())
}

/// Render `fig` to a PNG file, creating missing parent directories.
pub fn render_to_png(fig: &Figure, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<(), ChartError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let bytes = render_to_png_bytes(fig, opts)?;
    std::fs::write(path, &bytes).map_err(io_err)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px);
    paint.set_color(color);
    paint
}

fn draw_title(canvas: &skia::Canvas, shaper: &TextShaper, fig: &Figure, area: &PlotArea, opts: &RenderOptions) {
    let Some(title) = &fig.title else { return };
    if !opts.draw_text {
        return;
    }
    let size = pt_to_px(title.size, opts.dpi);
    let baseline_gap = pt_to_px(TITLE_PAD, opts.dpi);
    let ext = shaper.measure(&title.text, size);
    let y = area.rect.top - baseline_gap - ext.height * 0.5;
    shaper.draw_centered_v(canvas, &title.text, area.rect.center_x(), y, size, opts.theme.title, HAlign::Center);
}

fn draw_frame(canvas: &skia::Canvas, fig: &Figure, area: &PlotArea, opts: &RenderOptions) {
    let paint = stroke_paint(opts.theme.axis_line, pt_to_px(0.8, opts.dpi));
    let r = area.rect;
    if fig.spines.bottom {
        canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &paint);
    }
    if fig.spines.top {
        canvas.draw_line((r.left, r.top), (r.right, r.top), &paint);
    }
    if fig.spines.left {
        canvas.draw_line((r.left, r.top), (r.left, r.bottom), &paint);
    }
    if fig.spines.right {
        canvas.draw_line((r.right, r.top), (r.right, r.bottom), &paint);
    }
}

fn draw_x_ticks(canvas: &skia::Canvas, shaper: &TextShaper, fig: &Figure, area: &PlotArea, opts: &RenderOptions) {
    if !fig.x_axis.visible {
        return;
    }
    let paint = stroke_paint(opts.theme.tick, pt_to_px(0.8, opts.dpi));
    let tick_len = pt_to_px(TICK_LENGTH, opts.dpi);
    let label_top = area.rect.bottom + tick_len + pt_to_px(TICK_PAD, opts.dpi);
    let label_size = pt_to_px(fig.tick_label_size, opts.dpi);

    for tick in &fig.x_axis.ticks {
        let x = area.x.to_px(tick.position);
        canvas.draw_line((x, area.rect.bottom), (x, area.rect.bottom + tick_len), &paint);
        if opts.draw_text {
            shaper.draw_below(canvas, &tick.label, x, label_top, label_size, opts.theme.tick_label, tick.align);
        }
    }
}

fn draw_line(canvas: &skia::Canvas, m: &LineMark, area: &PlotArea, opts: &RenderOptions) {
    let Some(&(x0, y0)) = m.points.first() else { return };

    let mut path = skia::Path::new();
    path.move_to((area.x.to_px(x0), area.y.to_px(y0)));
    for &(x, y) in m.points.iter().skip(1) {
        path.line_to((area.x.to_px(x), area.y.to_px(y)));
    }

    let mut stroke = stroke_paint(m.color, pt_to_px(m.width, opts.dpi));
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &stroke);
}

fn draw_point(canvas: &skia::Canvas, m: &PointMark, area: &PlotArea, opts: &RenderOptions) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(m.color);
    let radius = pt_to_px(m.size, opts.dpi) * 0.5;
    canvas.draw_circle((area.x.to_px(m.x), area.y.to_px(m.y)), radius, &fill);
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, m: &TextMark, area: &PlotArea, opts: &RenderOptions) {
    if !opts.draw_text {
        return;
    }
    let size = pt_to_px(m.size, opts.dpi);
    shaper.draw_centered_v(canvas, &m.text, area.x.to_px(m.x), area.y.to_px(m.y), size, m.color, m.align);
}
