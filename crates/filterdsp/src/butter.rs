//! Butterworth IIR filter design.
//!
//! The design starts from the analog lowpass prototype with unit cutoff,
//! maps it to the requested band in the analog domain, and converts it to a
//! digital filter with the bilinear transform. Band edges are pre-warped, so
//! the digital filter is exactly 3 dB down at the requested edges.
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;
use num_traits::Float;

use crate::DomainError;
use crate::Result;
use crate::TransferFunction;
use crate::math::poly::poly;
use crate::math::poly::product;

/// Frequency band of a filter design.
///
/// Edges are normalized to Nyquist, i.e., in `(0, 1)`, unless a sample rate
/// is given to the design function, in which case they are in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// Pass below the cutoff.
    Lowpass(f64),
    /// Pass above the cutoff.
    Highpass(f64),
    /// Pass between the lower and the upper edge.
    Bandpass(f64, f64),
    /// Stop between the lower and the upper edge.
    Bandstop(f64, f64),
}

impl Band {
    fn edges(&self) -> Vec<f64> {
        match *self {
            Band::Lowpass(f) | Band::Highpass(f) => vec![f],
            Band::Bandpass(lo, hi) | Band::Bandstop(lo, hi) => vec![lo, hi],
        }
    }

    fn with_edges(&self, e: &[f64]) -> Band {
        match self {
            Band::Lowpass(_) => Band::Lowpass(e[0]),
            Band::Highpass(_) => Band::Highpass(e[0]),
            Band::Bandpass(..) => Band::Bandpass(e[0], e[1]),
            Band::Bandstop(..) => Band::Bandstop(e[0], e[1]),
        }
    }
}

/// A filter as zeros, poles, and gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    /// Zeros of the transfer function.
    pub zeros: Vec<Complex64>,
    /// Poles of the transfer function.
    pub poles: Vec<Complex64>,
    /// Gain factor.
    pub gain: f64,
}

impl Zpk {
    /// Number of poles in excess of zeros.
    fn degree(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }

    /// Expands the zeros and poles into polynomial form.
    ///
    /// Zeros and poles have to come in conjugate pairs, so that the imaginary
    /// parts of the coefficients cancel.
    pub fn to_transfer_function(&self) -> Result<TransferFunction> {
        let gain = self.gain;
        let b: Vec<f64> = poly(&self.zeros).iter().map(|c| c.re * gain).collect();
        let a: Vec<f64> = poly(&self.poles).iter().map(|c| c.re).collect();
        TransferFunction::new(b, a)
    }
}

/// Analog Butterworth lowpass prototype of the given order with unit cutoff.
pub fn buttap(order: usize) -> Zpk {
    let n = order as f64;
    let poles = (0..order)
        .map(|i| {
            let m = 2.0 * i as f64 - n + 1.0;
            -Complex64::from_polar(1.0, PI * m / (2.0 * n))
        })
        .collect();
    Zpk {
        zeros: Vec::new(),
        poles,
        gain: 1.0,
    }
}

/// Moves the cutoff of an analog lowpass from 1 to `wo` rad/s.
pub fn lp2lp(zpk: &Zpk, wo: f64) -> Zpk {
    Zpk {
        zeros: zpk.zeros.iter().map(|z| z * wo).collect(),
        poles: zpk.poles.iter().map(|p| p * wo).collect(),
        gain: zpk.gain * Float::powi(wo, zpk.degree() as i32),
    }
}

/// Turns an analog lowpass with unit cutoff into a highpass with cutoff `wo`.
pub fn lp2hp(zpk: &Zpk, wo: f64) -> Zpk {
    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|z| wo / z).collect();
    zeros.extend(core::iter::repeat_n(Complex64::new(0.0, 0.0), zpk.degree()));
    let poles = zpk.poles.iter().map(|p| wo / p).collect();
    let num = product(zpk.zeros.iter().map(|z| -z));
    let den = product(zpk.poles.iter().map(|p| -p));
    let gain = zpk.gain * (num / den).re;
    Zpk { zeros, poles, gain }
}

/// Turns an analog lowpass with unit cutoff into a bandpass with center `wo`
/// and bandwidth `bw`.
pub fn lp2bp(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let split = |roots: &[Complex64]| -> Vec<Complex64> {
        let scaled: Vec<Complex64> = roots.iter().map(|r| r * (bw / 2.0)).collect();
        let root = |r: &Complex64| (r * r - wo * wo).sqrt();
        scaled
            .iter()
            .map(|r| r + root(r))
            .chain(scaled.iter().map(|r| r - root(r)))
            .collect()
    };
    let mut zeros = split(&zpk.zeros);
    zeros.extend(core::iter::repeat_n(Complex64::new(0.0, 0.0), zpk.degree()));
    Zpk {
        zeros,
        poles: split(&zpk.poles),
        gain: zpk.gain * Float::powi(bw, zpk.degree() as i32),
    }
}

/// Turns an analog lowpass with unit cutoff into a bandstop with center `wo`
/// and bandwidth `bw`.
pub fn lp2bs(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let split = |roots: &[Complex64]| -> Vec<Complex64> {
        let inverted: Vec<Complex64> = roots.iter().map(|r| (bw / 2.0) / r).collect();
        let root = |r: &Complex64| (r * r - wo * wo).sqrt();
        inverted
            .iter()
            .map(|r| r + root(r))
            .chain(inverted.iter().map(|r| r - root(r)))
            .collect()
    };
    let degree = zpk.degree();
    let mut zeros = split(&zpk.zeros);
    zeros.extend(core::iter::repeat_n(Complex64::new(0.0, wo), degree));
    zeros.extend(core::iter::repeat_n(Complex64::new(0.0, -wo), degree));
    let num = product(zpk.zeros.iter().map(|z| -z));
    let den = product(zpk.poles.iter().map(|p| -p));
    let gain = zpk.gain * (num / den).re;
    Zpk {
        zeros,
        poles: split(&zpk.poles),
        gain,
    }
}

/// Bilinear transform of an analog filter to a digital filter with sample
/// rate `fs`.
pub fn bilinear(zpk: &Zpk, fs: f64) -> Zpk {
    let fs2 = 2.0 * fs;
    let map = |s: &Complex64| (fs2 + s) / (fs2 - s);
    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(map).collect();
    zeros.extend(core::iter::repeat_n(Complex64::new(-1.0, 0.0), zpk.degree()));
    let num = product(zpk.zeros.iter().map(|z| fs2 - z));
    let den = product(zpk.poles.iter().map(|p| fs2 - p));
    let gain = zpk.gain * (num / den).re;
    Zpk {
        zeros,
        poles: zpk.poles.iter().map(map).collect(),
        gain,
    }
}

fn validate(order: usize, band: &Band, fs: Option<f64>) -> Result<Band> {
    if order == 0 {
        return Err(DomainError::InvalidBand("order must be at least 1".into()));
    }
    let nyquist = match fs {
        Some(fs) if fs.is_finite() && fs > 0.0 => fs / 2.0,
        Some(fs) => {
            return Err(DomainError::InvalidBand(format!(
                "sample rate must be positive, got {fs}"
            )));
        }
        None => 1.0,
    };

    let edges = band.edges();
    for &f in &edges {
        if !(f.is_finite() && f > 0.0 && f < nyquist) {
            return Err(DomainError::InvalidBand(format!(
                "edge {f} must be in (0, {nyquist})"
            )));
        }
    }
    if edges.len() == 2 && edges[0] >= edges[1] {
        return Err(DomainError::InvalidBand(format!(
            "lower edge {} must be below upper edge {}",
            edges[0], edges[1]
        )));
    }

    let normalized: Vec<f64> = edges.iter().map(|f| f / nyquist).collect();
    Ok(band.with_edges(&normalized))
}

/// Digital Butterworth filter in zero-pole-gain form.
pub fn butter_zpk(order: usize, band: Band, fs: Option<f64>) -> Result<Zpk> {
    let band = validate(order, &band, fs)?;

    // Design for fs = 2, so that normalized edges are in half-cycles/sample.
    let design_fs = 2.0;
    let warp = |wn: f64| 2.0 * design_fs * Float::tan(PI * wn / design_fs);

    let proto = buttap(order);
    let analog = match band {
        Band::Lowpass(wn) => lp2lp(&proto, warp(wn)),
        Band::Highpass(wn) => lp2hp(&proto, warp(wn)),
        Band::Bandpass(lo, hi) => {
            let (lo, hi) = (warp(lo), warp(hi));
            lp2bp(&proto, Float::sqrt(lo * hi), hi - lo)
        }
        Band::Bandstop(lo, hi) => {
            let (lo, hi) = (warp(lo), warp(hi));
            lp2bs(&proto, Float::sqrt(lo * hi), hi - lo)
        }
    };
    debug!(order, ?band, "designed butterworth filter");
    Ok(bilinear(&analog, design_fs))
}

/// Digital Butterworth filter.
///
/// Edges are normalized to Nyquist if `fs` is `None`, otherwise they are in
/// Hz. The order has to be at least one and all edges have to be strictly
/// between zero and Nyquist. A band filter doubles the order.
///
/// Example usage:
/// ```
/// use filterdsp::{butter, Band};
///
/// let tf = butter(4, Band::Lowpass(0.2), None).unwrap();
/// assert_eq!(tf.b().len(), 5);
/// assert!(butter(4, Band::Lowpass(1.2), None).is_err());
/// ```
pub fn butter(order: usize, band: Band, fs: Option<f64>) -> Result<TransferFunction> {
    butter_zpk(order, band, fs)?.to_transfer_function()
}

/// Butterworth bandpass passing `lowcut` to `highcut` Hz at sample rate `fs`.
pub fn butter_bandpass(
    lowcut: f64,
    highcut: f64,
    fs: f64,
    order: usize,
) -> Result<TransferFunction> {
    butter(order, Band::Bandpass(lowcut, highcut), Some(fs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freqz::{gain_db, response_at, response_at_hz};

    const MINUS_3DB: f64 = -3.010299956639812;

    #[test]
    fn prototype_poles_are_on_unit_circle_in_left_half_plane() {
        let proto = buttap(5);
        assert_eq!(proto.poles.len(), 5);
        for p in &proto.poles {
            assert!((p.norm() - 1.0).abs() < 1e-12);
            assert!(p.re < 0.0);
        }
    }

    #[test]
    fn first_order_half_band_lowpass() {
        let tf = butter(1, Band::Lowpass(0.5), None).unwrap();
        assert!((tf.b()[0] - 0.5).abs() < 1e-12);
        assert!((tf.b()[1] - 0.5).abs() < 1e-12);
        assert!((tf.a()[0] - 1.0).abs() < 1e-12);
        assert!(tf.a()[1].abs() < 1e-12);
    }

    #[test]
    fn lowpass_is_3db_down_at_cutoff() {
        let tf = butter(4, Band::Lowpass(0.2), None).unwrap();
        assert!((gain_db(response_at(&tf, 0.0))).abs() < 1e-9);
        assert!((gain_db(response_at(&tf, 0.2 * PI)) - MINUS_3DB).abs() < 1e-6);
    }

    #[test]
    fn highpass_is_3db_down_at_cutoff() {
        let tf = butter(3, Band::Highpass(0.4), None).unwrap();
        assert!(response_at(&tf, 0.0).norm() < 1e-9);
        assert!((gain_db(response_at(&tf, PI))).abs() < 1e-9);
        assert!((gain_db(response_at(&tf, 0.4 * PI)) - MINUS_3DB).abs() < 1e-6);
    }

    #[test]
    fn bandpass_edges_and_center() {
        let tf = butter(2, Band::Bandpass(0.2, 0.5), None).unwrap();
        assert_eq!(tf.a().len(), 5);
        assert!(response_at(&tf, 0.0).norm() < 1e-9);
        assert!(response_at(&tf, PI).norm() < 1e-9);
        assert!((gain_db(response_at(&tf, 0.2 * PI)) - MINUS_3DB).abs() < 1e-6);
        assert!((gain_db(response_at(&tf, 0.5 * PI)) - MINUS_3DB).abs() < 1e-6);
    }

    #[test]
    fn bandstop_rejects_center() {
        let tf = butter(2, Band::Bandstop(0.2, 0.5), None).unwrap();
        assert!((gain_db(response_at(&tf, 0.0))).abs() < 1e-9);
        assert!((gain_db(response_at(&tf, PI))).abs() < 1e-9);
        assert!((gain_db(response_at(&tf, 0.2 * PI)) - MINUS_3DB).abs() < 1e-6);
        // geometric center of the pre-warped edges
        let center = 2.0
            * ((0.2 * PI / 2.0).tan() * (0.5 * PI / 2.0).tan())
                .sqrt()
                .atan();
        assert!(response_at(&tf, center).norm() < 1e-6);
    }

    #[test]
    fn bandpass_in_hz() {
        let fs = 117.3491e6;
        let tf = butter_bandpass(30.5e6, 37.0e6, fs, 4).unwrap();
        assert_eq!(tf.b().len(), 9);
        assert_eq!(tf.a().len(), 9);
        let at = |f: f64| gain_db(response_at_hz(&tf, f, fs));
        assert!((at(30.5e6) - MINUS_3DB).abs() < 1e-5);
        assert!((at(37.0e6) - MINUS_3DB).abs() < 1e-5);
        assert!(at(33.0e6) > MINUS_3DB);
        assert!(at(25.0e6) < -20.0);
        assert!(at(40.0e6) < -10.0);
    }

    #[test]
    fn rejects_invalid_bands() {
        let bad = [
            butter(0, Band::Lowpass(0.2), None),
            butter(2, Band::Lowpass(0.0), None),
            butter(2, Band::Lowpass(1.0), None),
            butter(2, Band::Highpass(f64::NAN), None),
            butter(2, Band::Bandpass(0.5, 0.2), None),
            butter(2, Band::Bandstop(0.3, 0.3), None),
            butter(2, Band::Lowpass(100.0), Some(0.0)),
            butter_bandpass(30.5e6, 60.0e6, 117.3491e6, 4),
        ];
        for result in bad {
            assert!(
                matches!(result, Err(DomainError::InvalidBand(_))),
                "{result:?}"
            );
        }
    }
}
