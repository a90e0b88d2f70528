// File: crates/news-chart/src/theme.rs
// Summary: Colors for the non-series parts of the figure.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    /// White paper with black ink, the plotting-library default look.
    pub fn paper() -> Self {
        Self {
            background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            title: skia::Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}
