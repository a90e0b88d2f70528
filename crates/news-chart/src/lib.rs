// File: crates/news-chart/src/lib.rs
// Summary: Core library entry point; loads the news media table and renders the chart to PNG.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod style;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;

use std::path::PathBuf;

use tracing::info;

pub use axis::{Axis, HAlign, Spines, Tick};
pub use chart::{build_figure, format_value};
pub use config::{FigureStyle, PlotConfig};
pub use error::{ChartError, TableError};
pub use figure::{Figure, LineMark, Mark, PointMark, TextMark};
pub use layout::{tight_layout, PlotArea};
pub use render::{render_to_png, render_to_png_bytes, RenderOptions};
pub use style::{SeriesStyle, StyleSheet};
pub use table::{Column, Table};
pub use text::TextShaper;
pub use theme::Theme;

/// Load the table, build the figure and write the PNG. Returns the path written.
pub fn run(config: &PlotConfig) -> Result<PathBuf, ChartError> {
    info!(input = %config.input_path.display(), "loading table");
    let table = Table::from_path(&config.input_path)?;

    let figure = build_figure(&table, &config.styles, &config.figure)?;
    info!(
        series = table.columns().len(),
        years = table.len(),
        output = %config.output_path.display(),
        "rendering chart"
    );
    render_to_png(&figure, &config.render, &config.output_path)?;
    Ok(config.output_path.clone())
}
