//! Plots of experiment results and the frontends that draw them.

#[cfg(feature = "textplots")]
mod textplots_frontend;
#[cfg(feature = "textplots")]
pub use textplots_frontend::*;

/// Default `textplots` GUI implementation.
#[cfg(feature = "textplots")]
pub type Gui = TextplotsFrontend;

/// GUI frontend agnostic color type
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// red
    pub r: u8,
    /// green
    pub g: u8,
    /// blue
    pub b: u8,
}

impl Color {
    /// Blue
    pub const BLUE: Color = Color {
        r: 31,
        g: 119,
        b: 180,
    };
    /// Orange
    pub const ORANGE: Color = Color {
        r: 255,
        g: 127,
        b: 14,
    };
    /// Green
    pub const GREEN: Color = Color {
        r: 44,
        g: 160,
        b: 44,
    };
}

#[cfg(feature = "textplots")]
impl From<Color> for rgb::RGB<u8> {
    fn from(c: Color) -> Self {
        rgb::RGB::new(c.r, c.g, c.b)
    }
}

/// A labeled series of `(x, y)` points.
#[derive(Clone, Debug)]
pub struct Line {
    /// Legend entry
    pub label: String,
    /// Line color
    pub color: Color,
    /// Points
    pub points: Vec<(f64, f64)>,
}

/// A 2D line plot.
#[derive(Clone, Debug)]
pub struct Plot {
    /// Title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    lines: Vec<Line>,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Plot {
    /// Create an empty plot.
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            lines: Vec::new(),
            x_range: None,
            y_range: None,
        }
    }

    /// Add a line through `(xs[i], ys[i])`.
    pub fn line(mut self, label: impl Into<String>, color: Color, xs: &[f64], ys: &[f64]) -> Self {
        self.lines.push(Line {
            label: label.into(),
            color,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        });
        self
    }

    /// Only show `x` in `[min, max]`.
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    /// Fix the y axis to `[min, max]`. Values outside are clamped.
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Lines of the plot.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Visible x interval, from the data unless set explicitly.
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_range
            .unwrap_or_else(|| widen(bounds(self.points().map(|(x, _)| x))))
    }

    /// Visible y interval, from the finite data in the x interval unless set
    /// explicitly.
    pub fn y_bounds(&self) -> (f64, f64) {
        if let Some(r) = self.y_range {
            return r;
        }
        let (lo, hi) = self.x_bounds();
        let visible = self.points().filter(|(x, _)| *x >= lo && *x <= hi);
        widen(bounds(visible.map(|(_, y)| y)))
    }

    /// Points of a line restricted to the visible area, with `y` clamped to
    /// the y interval. Negative infinity, e.g., `-inf` dB, ends up at the
    /// bottom of the plot.
    pub fn visible_points(&self, line: &Line) -> Vec<(f64, f64)> {
        let (x_lo, x_hi) = self.x_bounds();
        let (y_lo, y_hi) = self.y_bounds();
        line.points
            .iter()
            .filter(|(x, y)| *x >= x_lo && *x <= x_hi && !y.is_nan())
            .map(|(x, y)| (*x, y.clamp(y_lo, y_hi)))
            .collect()
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lines.iter().flat_map(|l| l.points.iter().copied())
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut finite = values.filter(|v| v.is_finite());
    let first = finite.next()?;
    let (lo, hi) = finite.fold((first, first), |(l, h), v| (l.min(v), h.max(v)));
    Some((lo, hi))
}

fn widen(b: Option<(f64, f64)>) -> (f64, f64) {
    match b {
        Some((lo, hi)) if hi > lo => (lo, hi),
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (0.0, 1.0),
    }
}

/// Trait implemented by the default GUI frontend for the currently active
/// GUI feature
pub trait GuiFrontend: Default {
    /// Register a plot to be displayed
    fn register(&mut self, plot: Plot);

    /// Draw the registered plots
    fn run(self);
}
