use clap::Parser;

use filterscope::anyhow::{Context, Result};
use filterscope::experiment::BandpassExperiment;
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
    /// Order of the lowpass prototype
    #[clap(short, long, default_value_t = 4)]
    order: usize,
    /// Lower passband edge in Hz
    #[clap(short, long, default_value_t = 30.5e6)]
    lowcut: f64,
    /// Upper passband edge in Hz
    #[clap(short = 'u', long, default_value_t = 37.0e6)]
    highcut: f64,
    /// Sample rate in Hz
    #[clap(short = 's', long, default_value_t = 117.3491e6)]
    fs: f64,
    /// Only print the summary
    #[clap(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    runtime::init();
    let Args {
        points,
        order,
        lowcut,
        highcut,
        fs,
        no_plot,
    } = Args::parse();

    let experiment = BandpassExperiment {
        fs,
        lowcut,
        highcut,
        order,
        num_points: points.unwrap_or(config::config().num_points),
        ..Default::default()
    };
    let report = experiment
        .run()
        .with_context(|| format!("running bandpass {lowcut} - {highcut} Hz at {fs} Hz"))?;

    info!("b: {:?}", report.filter.b());
    info!("a: {:?}", report.filter.a());
    for (freq, gain) in report.tone_gains() {
        info!("{:>8.3} MHz: {:>8.2} dB", freq / 1e6, gain);
    }

    if !no_plot {
        let mhz: Vec<f64> = report.response.w().iter().map(|f| f / 1e6).collect();
        let us: Vec<f64> = report.t.iter().map(|t| t * 1e6).collect();
        let db = report.response.magnitude_db();

        let mut gui = Gui::default();
        gui.register(
            Plot::new(
                format!(
                    "Frequency Response of Bandpass Filter ({}MHz - {}MHz)",
                    lowcut / 1e6,
                    highcut / 1e6
                ),
                "Frequency (MHz)",
                "Gain (dB)",
            )
            .line("response", Color::BLUE, &mhz, &db)
            .y_range(-120.0, 1.0),
        );
        gui.register(
            Plot::new("Bandpass Filtered Signal", "Time (us)", "Amplitude")
            .line("input", Color::BLUE, &us, &report.input)
            .line("lfilter", Color::ORANGE, &us, &report.causal)
            .line("filtfilt", Color::GREEN, &us, &report.zero_phase)
            .x_range(0.0, 1.0),
        );
        gui.run();
    }

    Ok(())
}
