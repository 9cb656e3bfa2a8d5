//! Frequency response of digital filters.
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;
use num_traits::Float;

use crate::DomainError;
use crate::MAX_LEN;
use crate::Result;
use crate::TransferFunction;
use crate::math::poly::polyval_ascending;

/// Complex gain of a filter at a set of frequencies.
///
/// Frequencies are in rad/sample, unless the response was computed for a
/// sample rate, in which case they are in Hz.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    w: Vec<f64>,
    h: Vec<Complex64>,
    sample_rate: Option<f64>,
}

impl FrequencyResponse {
    /// Frequencies of the evaluation points.
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    /// Complex gain at each evaluation point.
    pub fn h(&self) -> &[Complex64] {
        &self.h
    }

    /// Sample rate the frequencies refer to, if any.
    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    /// Number of evaluation points.
    pub fn len(&self) -> usize {
        self.w.len()
    }

    /// Whether there are no evaluation points.
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// `(frequency, gain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.w.iter().copied().zip(self.h.iter().copied())
    }

    /// Frequencies as a fraction of Nyquist, i.e., in units of π rad/sample.
    pub fn normalized_frequencies(&self) -> Vec<f64> {
        let nyquist = match self.sample_rate {
            Some(fs) => fs / 2.0,
            None => PI,
        };
        self.w.iter().map(|w| w / nyquist).collect()
    }

    /// Absolute gain `|H|`.
    pub fn magnitude(&self) -> Vec<f64> {
        self.h.iter().map(|h| h.norm()).collect()
    }

    /// Gain in dB, see [gain_db].
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.h.iter().map(|h| gain_db(*h)).collect()
    }

    /// Phase in rad, wrapped to (-π, π].
    pub fn phase(&self) -> Vec<f64> {
        self.h.iter().map(|h| h.arg()).collect()
    }

    /// Phase in rad with 2π jumps between neighboring points removed.
    pub fn unwrapped_phase(&self) -> Vec<f64> {
        unwrap(&self.phase())
    }

    /// Largest magnitude and the frequency it occurs at.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter()
            .map(|(w, h)| (w, h.norm()))
            .fold(None, |best, (w, m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((w, m)),
            })
    }
}

/// Converts a complex gain to `20·log10(|h|)`.
///
/// A zero gain maps to negative infinity instead of NaN.
pub fn gain_db(h: Complex64) -> f64 {
    let m = h.norm();
    if m == 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * Float::log10(m)
    }
}

/// Complex gain `H(ω)` at a single frequency `w` in rad/sample.
pub fn response_at(tf: &TransferFunction, w: f64) -> Complex64 {
    let z_inv = Complex64::from_polar(1.0, -w);
    polyval_ascending(tf.b(), z_inv) / polyval_ascending(tf.a(), z_inv)
}

/// Complex gain at frequency `f` in Hz for sample rate `fs`.
pub fn response_at_hz(tf: &TransferFunction, f: f64, fs: f64) -> Complex64 {
    response_at(tf, 2.0 * PI * f / fs)
}

/// Frequency response at `num_points` equally spaced frequencies in `[0, π)`.
///
/// Example usage:
/// ```
/// use filterdsp::{freqz, TransferFunction};
///
/// let tf = TransferFunction::fir([0.5, 0.5]).unwrap();
/// let response = freqz(&tf, 512).unwrap();
/// assert_eq!(response.len(), 512);
/// assert_eq!(response.w()[0], 0.0);
/// ```
pub fn freqz(tf: &TransferFunction, num_points: usize) -> Result<FrequencyResponse> {
    check_points(num_points)?;
    Ok(evaluate(tf, num_points, PI, None))
}

/// Frequency response at `num_points` equally spaced frequencies in `[0, 2π)`.
pub fn freqz_whole(tf: &TransferFunction, num_points: usize) -> Result<FrequencyResponse> {
    check_points(num_points)?;
    Ok(evaluate(tf, num_points, 2.0 * PI, None))
}

/// Frequency response at `num_points` equally spaced frequencies in
/// `[0, fs/2)`, with frequencies reported in Hz.
pub fn freqz_hz(tf: &TransferFunction, num_points: usize, fs: f64) -> Result<FrequencyResponse> {
    check_points(num_points)?;
    if !(fs.is_finite() && fs > 0.0) {
        return Err(DomainError::InvalidArgument(format!(
            "sample rate must be positive, got {fs}"
        )));
    }
    Ok(evaluate(tf, num_points, PI, Some(fs)))
}

fn check_points(num_points: usize) -> Result<()> {
    if num_points == 0 {
        return Err(DomainError::InvalidArgument(
            "at least one frequency point is required".into(),
        ));
    }
    if num_points > MAX_LEN {
        return Err(DomainError::InvalidArgument(format!(
            "at most {MAX_LEN} frequency points are supported, got {num_points}"
        )));
    }
    Ok(())
}

fn evaluate(
    tf: &TransferFunction,
    num_points: usize,
    span: f64,
    sample_rate: Option<f64>,
) -> FrequencyResponse {
    let mut w = Vec::with_capacity(num_points);
    let mut h = Vec::with_capacity(num_points);
    for k in 0..num_points {
        let frac = k as f64 / num_points as f64;
        let omega = span * frac;
        h.push(response_at(tf, omega));
        w.push(match sample_rate {
            Some(fs) => span / (2.0 * PI) * fs * frac,
            None => omega,
        });
    }
    trace!(num_points, span, "evaluated frequency response");
    FrequencyResponse { w, h, sample_rate }
}

fn unwrap(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let mut offset = 0.0;
    let mut prev: Option<f64> = None;
    for &p in phase {
        if let Some(prev) = prev {
            let d = p - prev;
            if d > PI {
                offset -= 2.0 * PI * Float::floor((d + PI) / (2.0 * PI));
            } else if d < -PI {
                offset += 2.0 * PI * Float::floor((-d + PI) / (2.0 * PI));
            }
        }
        out.push(p + offset);
        prev = Some(p);
    }
    out
}
