// File: crates/news-chart/src/types.rs
// Summary: Shared types and constants (sizes, resolution, paddings).

/// Default surface width in pixels (8 in at 100 dpi).
pub const WIDTH: i32 = 800;
/// Default surface height in pixels (5 in at 100 dpi).
pub const HEIGHT: i32 = 500;
/// Default resolution used to turn point sizes into pixels.
pub const DPI: f32 = 100.0;

/// Convert a size in typographic points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(10)
    }
}
