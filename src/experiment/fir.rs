use filterdsp::FrequencyResponse;
use filterdsp::TransferFunction;
use filterdsp::firdes;
use filterdsp::freqz;
use filterdsp::freqz::gain_db;
use filterdsp::windows::Window;

use crate::runtime::Result;

/// Symmetric 4-tap lowpass with unit DC gain.
pub const FOUR_TAP_COEFFS: [f64; 4] = [0.1321, 0.3679, 0.3679, 0.1321];

/// Frequency response of an FIR filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FourTapFir {
    /// Filter taps.
    pub taps: Vec<f64>,
    /// Number of frequency points in `[0, π)`.
    pub num_points: usize,
}

impl Default for FourTapFir {
    fn default() -> Self {
        Self {
            taps: FOUR_TAP_COEFFS.to_vec(),
            num_points: 1024,
        }
    }
}

impl FourTapFir {
    /// Use a windowed-sinc lowpass with `cutoff` in cycles/sample instead of
    /// the fixed taps.
    pub fn windowed_sinc(num_taps: usize, cutoff: f64, window: Window) -> Result<Self> {
        Ok(Self {
            taps: firdes::lowpass(num_taps, cutoff, window)?,
            ..Self::default()
        })
    }

    /// Compute the response.
    pub fn run(&self) -> Result<FirReport> {
        let filter = TransferFunction::fir(self.taps.clone())?;
        let response = freqz(&filter, self.num_points)?;
        let frequencies = response.normalized_frequencies();
        let magnitude_db = response.magnitude_db();
        let dc_gain_db = gain_db(response.h()[0]);
        info!(
            taps = self.taps.len(),
            num_points = self.num_points,
            dc_gain_db,
            "computed fir response"
        );

        Ok(FirReport {
            filter,
            response,
            frequencies,
            magnitude_db,
            dc_gain_db,
        })
    }
}

/// Result of [FourTapFir::run].
#[derive(Debug, Clone)]
pub struct FirReport {
    /// The evaluated filter.
    pub filter: TransferFunction,
    /// Complex response over `[0, π)`.
    pub response: FrequencyResponse,
    /// Frequencies as a fraction of Nyquist.
    pub frequencies: Vec<f64>,
    /// Gain in dB at `frequencies`.
    pub magnitude_db: Vec<f64>,
    /// Gain at DC in dB.
    pub dc_gain_db: f64,
}

impl FirReport {
    /// First frequency (fraction of Nyquist) where the gain has dropped 3 dB
    /// below DC.
    pub fn cutoff(&self) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(&self.magnitude_db)
            .find(|(_, db)| **db < self.dc_gain_db - 3.0)
            .map(|(f, _)| *f)
    }
}
