use textplots::Chart;
use textplots::ColorPlot;
use textplots::Shape;

use crate::gui::GuiFrontend;
use crate::gui::Plot;
use crate::runtime::config;

/// The default GUI implementation when using the `textplots` feature
///
/// Draws each plot once to stdout, sized from the `plot_width` and
/// `plot_height` config values.
pub struct TextplotsFrontend {
    plots: Vec<Plot>,
    size: (u32, u32),
}

impl Default for TextplotsFrontend {
    fn default() -> Self {
        let c = config::config();
        Self {
            plots: Vec::new(),
            size: (c.plot_width, c.plot_height),
        }
    }
}

impl GuiFrontend for TextplotsFrontend {
    fn register(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    fn run(self) {
        for plot in &self.plots {
            draw(plot, self.size);
        }
    }
}

fn draw(plot: &Plot, (columns, rows): (u32, u32)) {
    let (x_min, x_max) = plot.x_bounds();
    let (y_min, y_max) = plot.y_bounds();

    let line_points: Vec<Vec<(f32, f32)>> = plot
        .lines()
        .iter()
        .map(|line| {
            plot.visible_points(line)
                .into_iter()
                .map(|(x, y)| (x as f32, y as f32))
                .collect()
        })
        .collect();

    let line_shapes: Vec<_> = line_points
        .iter()
        .map(|points| Shape::Lines(points))
        .collect();

    println!("{}", plot.title);
    for line in plot.lines() {
        println!("  {} ({}, {}, {})", line.label, line.color.r, line.color.g, line.color.b);
    }
    println!("  y: {}", plot.y_label);

    // braille cells are 2 dots wide and 4 dots high
    let mut chart = Chart::new_with_y_range(
        columns.saturating_sub(10).max(16) * 2,
        rows.saturating_sub(2).max(4) * 4,
        x_min as f32,
        x_max as f32,
        y_min as f32,
        y_max as f32,
    );
    let mut chart_ref = &mut chart;
    for (line, shape) in plot.lines().iter().zip(line_shapes.iter()) {
        chart_ref = chart_ref.linecolorplot(shape, line.color.into());
    }
    chart_ref.display();

    println!("  x: {}", plot.x_label);
}
