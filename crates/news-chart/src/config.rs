// File: crates/news-chart/src/config.rs
// Summary: Hardcoded pipeline configuration: paths, figure look, series styles, render options.

use std::path::PathBuf;

use crate::render::RenderOptions;
use crate::style::StyleSheet;

pub const INPUT_PATH: &str = "files/input/news.csv";
pub const OUTPUT_PATH: &str = "files/plots/news.png";
pub const TITLE: &str = "How people get their news";

/// Sizes are in points; the renderer converts them with its dpi.
#[derive(Clone, Debug)]
pub struct FigureStyle {
    pub title: String,
    pub title_size: f32,
    /// Endpoint label font size.
    pub label_size: f32,
    pub tick_label_size: f32,
    /// Horizontal gap between an endpoint and its label, in years.
    pub label_offset: f64,
    /// Endpoint marker diameter.
    pub marker_size: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            title_size: 16.0,
            label_size: 8.0,
            tick_label_size: 10.0,
            label_offset: 0.2,
            marker_size: 6.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub figure: FigureStyle,
    pub styles: StyleSheet,
    pub render: RenderOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            figure: FigureStyle::default(),
            styles: StyleSheet::news(),
            render: RenderOptions::default(),
        }
    }
}
