use filterdsp::FrequencyResponse;
use filterdsp::TransferFunction;
use filterdsp::butter_bandpass;
use filterdsp::filtfilt;
use filterdsp::freqz::gain_db;
use filterdsp::freqz_hz;
use filterdsp::lfilter;
use filterdsp::response_at_hz;
use filterdsp::signal;

use crate::runtime::Error;
use crate::runtime::Result;

/// Butterworth bandpass applied to a sum of tones.
///
/// The defaults describe a 30.5 to 37 MHz passband at 117.3491 MHz sample rate,
/// excited with 25, 33, and 40 MHz tones over 10 µs.
#[derive(Debug, Clone, PartialEq)]
pub struct BandpassExperiment {
    /// Sample rate in Hz.
    pub fs: f64,
    /// Lower passband edge in Hz.
    pub lowcut: f64,
    /// Upper passband edge in Hz.
    pub highcut: f64,
    /// Order of the lowpass prototype.
    pub order: usize,
    /// Length of the test signal in seconds.
    pub duration: f64,
    /// Tone frequencies of the test signal in Hz.
    pub tones: Vec<f64>,
    /// Number of frequency points in `[0, fs/2)`.
    pub num_points: usize,
}

impl Default for BandpassExperiment {
    fn default() -> Self {
        Self {
            fs: 117.3491e6,
            lowcut: 30.5e6,
            highcut: 37.0e6,
            order: 4,
            duration: 10e-6,
            tones: vec![25e6, 33e6, 40e6],
            num_points: 1024,
        }
    }
}

impl BandpassExperiment {
    /// Design the filter, filter the test signal, and compute the response.
    pub fn run(&self) -> Result<BandpassReport> {
        let filter = butter_bandpass(self.lowcut, self.highcut, self.fs, self.order)?;
        debug!(b = ?filter.b(), a = ?filter.a(), "bandpass coefficients");

        let t = signal::time_axis(self.duration, self.fs)?;
        let input = signal::tones(&t, &self.tones);
        let causal = lfilter(&filter, &input);
        let zero_phase = filtfilt(&filter, &input)?;

        let response = freqz_hz(&filter, self.num_points, self.fs)?;
        let (peak_freq, peak) = response
            .peak()
            .filter(|(_, m)| *m > 0.0)
            .ok_or_else(|| Error::Degenerate("filter response is zero everywhere".into()))?;

        let tone_gains: Vec<(f64, f64)> = self
            .tones
            .iter()
            .map(|&f| (f, gain_db(response_at_hz(&filter, f, self.fs) / peak)))
            .collect();
        for (f, db) in &tone_gains {
            info!("tone {:.3} MHz: {:.2} dB", f / 1e6, db);
        }
        info!(
            samples = t.len(),
            peak_mhz = peak_freq / 1e6,
            "filtered test signal"
        );

        Ok(BandpassReport {
            filter,
            t,
            input,
            causal,
            zero_phase,
            response,
            tone_gains,
        })
    }
}

/// Result of [BandpassExperiment::run].
#[derive(Debug, Clone)]
pub struct BandpassReport {
    /// The designed filter.
    pub filter: TransferFunction,
    /// Sample instants in seconds.
    pub t: Vec<f64>,
    /// Test signal.
    pub input: Vec<f64>,
    /// Causally filtered test signal.
    pub causal: Vec<f64>,
    /// Zero-phase filtered test signal.
    pub zero_phase: Vec<f64>,
    /// Response over `[0, fs/2)` with frequencies in Hz.
    pub response: FrequencyResponse,
    tone_gains: Vec<(f64, f64)>,
}

impl BandpassReport {
    /// Gain in dB at each tone frequency, relative to the passband peak.
    pub fn tone_gains(&self) -> &[(f64, f64)] {
        &self.tone_gains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario() {
        let report = BandpassExperiment::default().run().unwrap();
        assert_eq!(report.t.len(), 1174);
        assert_eq!(report.input.len(), 1174);
        assert_eq!(report.causal.len(), 1174);
        assert_eq!(report.zero_phase.len(), 1174);
        assert_eq!(report.filter.b().len(), 9);
        assert_eq!(report.response.sample_rate(), Some(117.3491e6));

        let gains = report.tone_gains();
        assert_eq!(gains.len(), 3);
        assert!(gains[0].1 < -3.0);
        assert!(gains[1].1 > -3.0);
        assert!(gains[2].1 < -3.0);
    }

    #[test]
    fn highcut_above_nyquist_is_rejected() {
        let experiment = BandpassExperiment {
            highcut: 70e6,
            ..Default::default()
        };
        assert!(matches!(
            experiment.run(),
            Err(Error::Domain(filterdsp::DomainError::InvalidBand(_)))
        ));
    }

    #[test]
    fn too_short_signal_is_rejected() {
        let experiment = BandpassExperiment {
            duration: 0.1e-6,
            ..Default::default()
        };
        assert!(matches!(
            experiment.run(),
            Err(Error::Domain(filterdsp::DomainError::SignalTooShort { .. }))
        ));
    }
}
