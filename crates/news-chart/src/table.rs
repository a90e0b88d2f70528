// File: crates/news-chart/src/table.rs
// Summary: Year-indexed table of percentage series loaded from CSV.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TableError;

/// One named series: a value per year of the table index.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
    /// True when every cell was written as an integer; one cell like `50.5`
    /// or `45.0` makes the whole column print as floats.
    pub integral: bool,
}

impl Column {
    pub fn first(&self) -> f64 { self.values[0] }
    pub fn last(&self) -> f64 { self.values[self.values.len() - 1] }

    /// (year, value) pairs in index order.
    pub fn points<'a>(&'a self, years: &'a [i32]) -> impl Iterator<Item = (f64, f64)> + 'a {
        years.iter().zip(&self.values).map(|(&y, &v)| (y as f64, v))
    }
}

/// Rows keyed by year, columns keyed by series name.
///
/// Contract: at least one row and one column, years strictly ascending, and
/// every column holds exactly one value per year. Immutable once loaded.
///
/// The loader is stricter than a plain CSV read: year cells must be integers
/// and must ascend without repeats, otherwise loading fails instead of
/// plotting the rows in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    index_name: String,
    years: Vec<i32>,
    columns: Vec<Column>,
}

impl Table {
    /// Load a CSV file whose first column is the year index.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            series = table.columns.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse CSV from any reader. The header row names the series; its first
    /// cell (often empty) names the index.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
        debug!(?headers, "csv headers");
        if headers.len() < 2 {
            return Err(TableError::NoSeries);
        }

        let index_name = headers[0].clone();
        let mut columns = headers[1..]
            .iter()
            .map(|name| Column { name: name.clone(), values: Vec::new(), integral: true })
            .collect::<Vec<_>>();
        let mut years: Vec<i32> = Vec::new();

        for (i, rec) in rdr.records().enumerate() {
            // 1-based data row number, header excluded
            let row = i + 1;
            let rec = rec?;

            let raw_year = rec.get(0).unwrap_or_default();
            let year = raw_year.parse::<i32>().map_err(|_| TableError::InvalidYear {
                row,
                value: raw_year.to_string(),
            })?;
            if let Some(&previous) = years.last() {
                if year <= previous {
                    return Err(TableError::YearOutOfOrder { row, year, previous });
                }
            }
            years.push(year);

            for (col, raw) in columns.iter_mut().zip(rec.iter().skip(1)) {
                let value = raw.parse::<f64>().map_err(|_| TableError::InvalidValue {
                    row,
                    column: col.name.clone(),
                    value: raw.to_string(),
                })?;
                col.integral &= raw.parse::<i64>().is_ok();
                col.values.push(value);
            }
        }

        if years.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { index_name, years, columns })
    }

    pub fn index_name(&self) -> &str { &self.index_name }
    pub fn years(&self) -> &[i32] { &self.years }
    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn first_year(&self) -> i32 { self.years[0] }
    pub fn last_year(&self) -> i32 { self.years[self.years.len() - 1] }

    /// Number of rows (years).
    pub fn len(&self) -> usize { self.years.len() }
    pub fn is_empty(&self) -> bool { self.years.is_empty() }

    /// Smallest and largest value across all series.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for v in self.columns.iter().flat_map(|c| c.values.iter()) {
            min_v = min_v.min(*v);
            max_v = max_v.max(*v);
        }
        (min_v, max_v)
    }
}
