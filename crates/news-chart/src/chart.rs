// File: crates/news-chart/src/chart.rs
// Summary: Builds the news media figure from a table: lines, minimalist axes,
// endpoint annotations and year ticks, in that order.

use tracing::debug;

use crate::axis::{HAlign, Spines, Tick};
use crate::config::FigureStyle;
use crate::error::ChartError;
use crate::figure::{Figure, LineMark, Mark, PointMark, TextMark};
use crate::scale::Range;
use crate::style::StyleSheet;
use crate::table::Table;

/// Fraction of the data span added on each side of both axes.
pub const DATA_MARGIN: f64 = 0.05;

/// Build the figure for `table`. Every column must have an entry in
/// `styles`; the lookup happens before any mark is created.
pub fn build_figure(table: &Table, styles: &StyleSheet, look: &FigureStyle) -> Result<Figure, ChartError> {
    let resolved = styles.resolve(table)?;

    let years = table.years();
    let first_year = table.first_year();
    let last_year = table.last_year();
    let (vmin, vmax) = table.value_range();

    let x_range = Range::new(first_year as f64, last_year as f64).padded(DATA_MARGIN, 0.5);
    let y_range = Range::new(vmin, vmax).padded(DATA_MARGIN, 1.0);
    let mut fig = Figure::new(x_range, y_range);

    // 1) one line per series
    for (col, style) in &resolved {
        fig.push(Mark::Line(LineMark {
            label: col.name.clone(),
            points: col.points(years).collect(),
            color: style.color,
            width: style.line_width,
            z_order: style.z_order,
        }));
    }

    // 2) minimalist axes: title, bottom spine only, no vertical axis
    fig.set_title(look.title.clone(), look.title_size);
    fig.spines = Spines::bottom_only();
    fig.y_axis_visible = false;

    // 3) endpoint markers and labels
    for (col, style) in &resolved {
        let (first, last) = (col.first(), col.last());

        fig.push(Mark::Point(PointMark {
            x: first_year as f64,
            y: first,
            size: look.marker_size,
            color: style.color,
            z_order: style.z_order,
        }));
        fig.push(Mark::Text(TextMark {
            text: format!("{} {}%", col.name, format_value(first, col.integral)),
            x: first_year as f64 - look.label_offset,
            y: first,
            size: look.label_size,
            color: style.color,
            align: HAlign::Right,
            z_order: style.z_order,
        }));

        fig.push(Mark::Point(PointMark {
            x: last_year as f64,
            y: last,
            size: look.marker_size,
            color: style.color,
            z_order: style.z_order,
        }));
        fig.push(Mark::Text(TextMark {
            text: format!("{}%", format_value(last, col.integral)),
            x: last_year as f64 + look.label_offset,
            y: last,
            size: look.label_size,
            color: style.color,
            align: HAlign::Left,
            z_order: style.z_order,
        }));
    }

    // 4) one centered tick per year
    fig.x_axis.set_ticks(years.iter().map(|&y| Tick::centered(y as f64, y.to_string())).collect());
    fig.tick_label_size = look.tick_label_size;

    debug!(
        marks = fig.marks.len(),
        ticks = fig.x_axis.ticks.len(),
        x_min = fig.x_range.min,
        x_max = fig.x_range.max,
        y_min = fig.y_range.min,
        y_max = fig.y_range.max,
        "built figure"
    );
    Ok(fig)
}

/// Integer columns print plain integers; float columns always carry a
/// fractional part (`0.0`, `45.0`, `50.5`).
pub fn format_value(v: f64, integral: bool) -> String {
    if integral && v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:?}")
    }
}
