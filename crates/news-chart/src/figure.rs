// File: crates/news-chart/src/figure.rs
// Summary: Renderer-agnostic display list: marks in data coordinates plus axis decoration.

use skia_safe as skia;

use crate::axis::{Axis, HAlign, Spines};
use crate::scale::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: skia::Color,
    /// Stroke width in points.
    pub width: f32,
    pub z_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    pub x: f64,
    pub y: f64,
    /// Marker diameter in points.
    pub size: f32,
    pub color: skia::Color,
    pub z_order: i32,
}

/// Text anchored at a data point, vertically centered on it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Font size in points.
    pub size: f32,
    pub color: skia::Color,
    pub align: HAlign,
    pub z_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Line(LineMark),
    Point(PointMark),
    Text(TextMark),
}

impl Mark {
    pub fn z_order(&self) -> i32 {
        match self {
            Mark::Line(m) => m.z_order,
            Mark::Point(m) => m.z_order,
            Mark::Text(m) => m.z_order,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub title: Option<Title>,
    pub marks: Vec<Mark>,
    pub x_axis: Axis,
    pub y_axis_visible: bool,
    pub spines: Spines,
    /// Font size of tick labels, in points.
    pub tick_label_size: f32,
    pub x_range: Range,
    pub y_range: Range,
}

impl Figure {
    pub fn new(x_range: Range, y_range: Range) -> Self {
        Self {
            title: None,
            marks: Vec::new(),
            x_axis: Axis::new(),
            y_axis_visible: true,
            spines: Spines::all(),
            tick_label_size: 10.0,
            x_range,
            y_range,
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn set_title(&mut self, text: impl Into<String>, size: f32) {
        self.title = Some(Title { text: text.into(), size });
    }

    /// Marks in paint order: ascending z-order, insertion order among equals.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut v = self.marks.iter().collect::<Vec<_>>();
        // sort_by_key is stable
        v.sort_by_key(|m| m.z_order());
        v
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &PointMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Point(p) => Some(p),
            _ => None,
        })
    }

    pub fn text_annotations(&self) -> impl Iterator<Item = &TextMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn tick_positions(&self) -> Vec<f64> {
        self.x_axis.positions()
    }
}
