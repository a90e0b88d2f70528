// File: crates/news-chart/src/axis.rs
// Summary: Axis decoration model: ticks, tick labels and frame spines.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
    pub align: HAlign,
}

impl Tick {
    pub fn centered(position: f64, label: impl Into<String>) -> Self {
        Self { position, label: label.into(), align: HAlign::Center }
    }
}

/// Visibility of the four frame lines around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Spines {
    pub const fn all() -> Self {
        Self { top: true, bottom: true, left: true, right: true }
    }

    pub const fn bottom_only() -> Self {
        Self { top: false, bottom: true, left: false, right: false }
    }
}

impl Default for Spines {
    fn default() -> Self {
        Self::all()
    }
}

/// Horizontal axis: ticks in data coordinates.
#[derive(Clone, Debug, Default)]
pub struct Axis {
    pub ticks: Vec<Tick>,
    pub visible: bool,
}

impl Axis {
    pub fn new() -> Self {
        Self { ticks: Vec::new(), visible: true }
    }

    pub fn set_ticks(&mut self, ticks: Vec<Tick>) {
        self.ticks = ticks;
    }

    pub fn positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.position).collect()
    }
}
