// File: crates/news-chart/src/style.rs
// Summary: Per-series styling: color, draw order and line width kept in one record.

use skia_safe as skia;

use crate::error::ChartError;
use crate::table::{Column, Table};

/// Everything needed to draw one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: skia::Color,
    /// Higher values are drawn later, i.e. on top.
    pub z_order: i32,
    /// Stroke width in points.
    pub line_width: f32,
}

impl SeriesStyle {
    pub const fn new(color: skia::Color, z_order: i32, line_width: f32) -> Self {
        Self { color, z_order, line_width }
    }
}

/// Named colors used by the presets.
pub mod palette {
    use skia_safe::Color;

    pub const GREY: Color = Color::from_rgb(0x80, 0x80, 0x80);
    pub const DIM_GRAY: Color = Color::from_rgb(0x69, 0x69, 0x69);
    pub const LIGHT_GREY: Color = Color::from_rgb(0xd3, 0xd3, 0xd3);
    pub const TAB_BLUE: Color = Color::from_rgb(0x1f, 0x77, 0xb4);
}

/// Ordered series-name to style mapping.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    entries: Vec<(String, SeriesStyle)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for the four news media series.
    pub fn news() -> Self {
        Self::new()
            .with("Newspaper", SeriesStyle::new(palette::GREY, 1, 2.0))
            .with("Television", SeriesStyle::new(palette::DIM_GRAY, 1, 2.0))
            .with("Radio", SeriesStyle::new(palette::LIGHT_GREY, 1, 2.0))
            .with("Internet", SeriesStyle::new(palette::TAB_BLUE, 2, 4.0))
    }

    /// Add or replace the style for `name`.
    pub fn with(mut self, name: impl Into<String>, style: SeriesStyle) -> Self {
        self.insert(name, style);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, style: SeriesStyle) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, s)) => *s = style,
            None => self.entries.push((name, style)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SeriesStyle> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn lookup(&self, name: &str) -> Result<&SeriesStyle, ChartError> {
        self.get(name).ok_or_else(|| ChartError::MissingStyle { column: name.to_string() })
    }

    /// Pair every column of `table` with its style, failing on the first
    /// column that has none.
    pub fn resolve<'t>(&self, table: &'t Table) -> Result<Vec<(&'t Column, SeriesStyle)>, ChartError> {
        table
            .columns()
            .iter()
            .map(|c| self.lookup(&c.name).map(|s| (c, *s)))
            .collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }
}
