// File: crates/news-chart/src/layout.rs
// Summary: Tight layout: sizes the plot rectangle so title, tick labels and
// endpoint labels all fit inside the canvas.

use tracing::debug;

use crate::axis::HAlign;
use crate::figure::Figure;
use crate::geometry::{clamp, RectF};
use crate::render::RenderOptions;
use crate::scale::LinearScale;
use crate::text::{TextExtent, TextShaper};
use crate::types::pt_to_px;

/// Tick mark length, in points.
pub const TICK_LENGTH: f32 = 3.5;
/// Gap between tick mark and its label, in points.
pub const TICK_PAD: f32 = 3.5;
/// Gap between the title and the plot area, in points.
pub const TITLE_PAD: f32 = 6.0;

/// Pixel-space placement of the plot area and the transforms into it.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea {
    pub rect: RectF,
    pub x: LinearScale,
    pub y: LinearScale,
}

/// Something drawn at a data x position that extends `left`/`right`
/// pixels around it.
#[derive(Clone, Copy, Debug)]
struct HExtent {
    fraction: f64,
    left: f32,
    right: f32,
}

impl HExtent {
    fn from_align(fraction: f64, width: f32, align: HAlign) -> Self {
        match align {
            HAlign::Left => Self { fraction, left: 0.0, right: width },
            HAlign::Center => Self { fraction, left: width * 0.5, right: width * 0.5 },
            HAlign::Right => Self { fraction, left: width, right: 0.0 },
        }
    }
}

pub fn tight_layout(fig: &Figure, shaper: &TextShaper, opts: &RenderOptions) -> PlotArea {
    let measure = |text: &str, size_pt: f32| -> TextExtent {
        if opts.draw_text {
            shaper.measure(text, pt_to_px(size_pt, opts.dpi))
        } else {
            TextExtent::default()
        }
    };

    let w = opts.width as f32;
    let h = opts.height as f32;
    let pad_l = opts.insets.left as f32;
    let pad_r = opts.insets.right as f32;

    // vertical
    let mut top = opts.insets.top as f32;
    if let Some(title) = &fig.title {
        let ext = measure(&title.text, title.size);
        if ext.height > 0.0 {
            top += ext.height + pt_to_px(TITLE_PAD, opts.dpi);
        }
    }
    let mut bottom = h - opts.insets.bottom as f32;
    if fig.x_axis.visible && !fig.x_axis.ticks.is_empty() {
        let label_h = fig
            .x_axis
            .ticks
            .iter()
            .map(|t| measure(&t.label, fig.tick_label_size).height)
            .fold(0.0_f32, f32::max);
        bottom -= pt_to_px(TICK_LENGTH + TICK_PAD, opts.dpi) + label_h;
    }
    if bottom - top < 1.0 {
        top = opts.insets.top as f32;
        bottom = h - opts.insets.bottom as f32;
    }

    // horizontal: the plot edges themselves plus every label
    let mut items = vec![
        HExtent { fraction: 0.0, left: 0.0, right: 0.0 },
        HExtent { fraction: 1.0, left: 0.0, right: 0.0 },
    ];
    for t in fig.text_annotations() {
        let ext = measure(&t.text, t.size);
        items.push(HExtent::from_align(fig.x_range.fraction(t.x), ext.width, t.align));
    }
    if fig.x_axis.visible {
        for t in &fig.x_axis.ticks {
            let ext = measure(&t.label, fig.tick_label_size);
            items.push(HExtent::from_align(fig.x_range.fraction(t.position), ext.width, t.align));
        }
    }

    let (mut left, mut right) = (pad_l, w - pad_r);
    // solving against the worst offenders can expose the next one; a few
    // rounds settle it
    for _ in 0..4 {
        let at = |f: f64| left + f as f32 * (right - left);
        let worst_left = items
            .iter()
            .max_by(|a, b| (pad_l - (at(a.fraction) - a.left)).total_cmp(&(pad_l - (at(b.fraction) - b.left))));
        let worst_right = items
            .iter()
            .max_by(|a, b| ((at(a.fraction) + a.right) - (w - pad_r)).total_cmp(&((at(b.fraction) + b.right) - (w - pad_r))));
        let (Some(lo), Some(hi)) = (worst_left, worst_right) else { break };

        match solve_edges(lo, hi, pad_l, w - pad_r) {
            Some((l, r)) if r - l >= 1.0 => {
                if (l - left).abs() < 0.01 && (r - right).abs() < 0.01 {
                    break;
                }
                left = l;
                right = r;
            }
            _ => break,
        }
    }
    left = clamp(left, 0.0, w - 1.0);
    right = clamp(right, left + 1.0, w);

    let rect = RectF::from_ltrb(left, top, right, bottom);
    debug!(left, top, width = rect.width(), height = rect.height(), "tight layout");
    PlotArea {
        rect,
        x: LinearScale::horizontal(fig.x_range, rect.left, rect.right),
        y: LinearScale::vertical(fig.y_range, rect.top, rect.bottom),
    }
}

/// Plot edges (L, R) that put `lo`'s left extent exactly on `min_px` and
/// `hi`'s right extent exactly on `max_px`.
fn solve_edges(lo: &HExtent, hi: &HExtent, min_px: f32, max_px: f32) -> Option<(f32, f32)> {
    let a = lo.fraction as f32;
    let b = hi.fraction as f32;
    let det = b - a;
    if det.abs() < 1e-6 {
        return None;
    }
    // L(1-a) + aR = p ; L(1-b) + bR = q
    let p = min_px + lo.left;
    let q = max_px - hi.right;
    let l = (p * b - a * q) / det;
    let r = ((1.0 - a) * q - (1.0 - b) * p) / det;
    Some((l, r))
}
