// File: crates/news-chart/src/error.rs
// Summary: Error types for table loading and chart rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("header must name an index column and at least one series")]
    NoSeries,
    #[error("table has no data rows")]
    Empty,
    #[error("row {row}: year '{value}' is not an integer")]
    InvalidYear { row: usize, value: String },
    #[error("row {row}: value '{value}' in column '{column}' is not numeric")]
    InvalidValue { row: usize, column: String, value: String },
    #[error("row {row}: year {year} does not follow {previous}")]
    YearOutOfOrder { row: usize, year: i32, previous: i32 },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("no style defined for series '{column}'")]
    MissingStyle { column: String },
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
