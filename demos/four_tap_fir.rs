use clap::Parser;

use filterscope::anyhow::{Context, Result};
use filterscope::experiment::FourTapFir;
use filterscope::filterdsp::windows::Window;
use filterscope::gui::Color;
use filterscope::gui::Gui;
use filterscope::gui::GuiFrontend;
use filterscope::gui::Plot;
use filterscope::runtime;
use filterscope::runtime::config;
use filterscope::tracing::info;

#[derive(Parser, Debug)]
struct Args {
    /// Frequency points, defaults to the `num_points` config value
    #[clap(short, long)]
    points: Option<usize>,
    /// Compare against a Hamming windowed-sinc lowpass with this many taps
    #[clap(short, long)]
    taps: Option<usize>,
    /// Cutoff of the windowed-sinc lowpass in cycles/sample
    #[clap(short, long, default_value_t = 0.15)]
    cutoff: f64,
    /// Only print the summary
    #[clap(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    runtime::init();
    let Args {
        points,
        taps,
        cutoff,
        no_plot,
    } = Args::parse();

    let num_points = points.unwrap_or(config::config().num_points);
    let fir = FourTapFir {
        num_points,
        ..Default::default()
    };
    let report = fir.run().context("evaluating 4-tap fir")?;
    info!("taps: {:?}", report.filter.b());
    info!("dc gain: {:.6} dB", report.dc_gain_db);
    if let Some(cutoff) = report.cutoff() {
        info!("-3 dB at {cutoff:.4} x nyquist");
    }

    let mut plot = Plot::new(
        "Frequency Response of 4-Tap FIR Filter",
        "Normalized Frequency (x pi rad/sample)",
        "Magnitude (dB)",
    )
    .line(
        "4-tap",
        Color::BLUE,
        &report.frequencies,
        &report.magnitude_db,
    );

    if let Some(num_taps) = taps {
        let designed = FourTapFir {
            num_points,
            ..FourTapFir::windowed_sinc(num_taps, cutoff, Window::Hamming)?
        }
        .run()
        .context("evaluating windowed-sinc lowpass")?;
        info!(
            "windowed sinc, {} taps: dc gain {:.6} dB, -3 dB at {:?} x nyquist",
            num_taps,
            designed.dc_gain_db,
            designed.cutoff()
        );
        plot = plot
            .line(
                format!("{num_taps}-tap windowed sinc"),
                Color::ORANGE,
                &designed.frequencies,
                &designed.magnitude_db,
            )
            .y_range(-100.0, 1.0);
    }

    if !no_plot {
        let mut gui = Gui::default();
        gui.register(plot);
        gui.run();
    }

    Ok(())
}
