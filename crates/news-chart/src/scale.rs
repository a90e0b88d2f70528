// File: crates/news-chart/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X (year) and Y (percent) axes.

/// Closed data interval shown along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen by `frac` of the span on each side. A degenerate range is
    /// widened by `fallback` instead so that it still maps to pixels.
    pub fn padded(&self, frac: f64, fallback: f64) -> Self {
        let span = self.span();
        if span.abs() < 1e-12 {
            return Self::new(self.min - fallback, self.max + fallback);
        }
        let m = span * frac;
        Self::new(self.min - m, self.max + m)
    }

    /// Position of `v` inside the range, 0.0 at `min` and 1.0 at `max`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span().max(1e-12)
    }
}

/// Maps a data range onto a pixel interval. For the vertical axis pass
/// `flipped = true` so larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub range: Range,
    pub start_px: f32,
    pub end_px: f32,
    pub flipped: bool,
}

impl LinearScale {
    pub fn horizontal(range: Range, left_px: f32, right_px: f32) -> Self {
        Self { range, start_px: left_px, end_px: right_px, flipped: false }
    }

    pub fn vertical(range: Range, top_px: f32, bottom_px: f32) -> Self {
        Self { range, start_px: top_px, end_px: bottom_px, flipped: true }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let f = self.range.fraction(v) as f32;
        let len = self.end_px - self.start_px;
        if self.flipped {
            self.end_px - f * len
        } else {
            self.start_px + f * len
        }
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = (self.end_px - self.start_px).max(1e-6);
        let f = if self.flipped { (self.end_px - px) / len } else { (px - self.start_px) / len };
        self.range.min + f as f64 * self.range.span()
    }
}
