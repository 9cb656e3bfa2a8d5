//! Test signals.
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_traits::Float;

use crate::DomainError;
use crate::MAX_LEN;
use crate::Result;

/// Sample instants `n / fs` covering `[0, duration)`.
///
/// ```
/// use filterdsp::signal::time_axis;
///
/// let t = time_axis(1e-3, 8000.0).unwrap();
/// assert_eq!(t.len(), 8);
/// assert_eq!(t[1], 1.0 / 8000.0);
/// ```
pub fn time_axis(duration: f64, fs: f64) -> Result<Vec<f64>> {
    if !(fs.is_finite() && fs > 0.0) {
        return Err(DomainError::InvalidArgument(format!(
            "sample rate must be positive, got {fs}"
        )));
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(DomainError::InvalidArgument(format!(
            "duration must not be negative, got {duration}"
        )));
    }
    let len = Float::ceil(duration * fs);
    if len > MAX_LEN as f64 {
        return Err(DomainError::InvalidArgument(format!(
            "{duration} s at {fs} Hz exceeds {MAX_LEN} samples"
        )));
    }
    Ok((0..len as usize).map(|n| n as f64 / fs).collect())
}

/// Sum of unit-amplitude sines `Σ sin(2π·f·t)` at the instants `t`.
pub fn tones(t: &[f64], freqs: &[f64]) -> Vec<f64> {
    t.iter()
        .map(|&t| freqs.iter().map(|f| Float::sin(2.0 * PI * f * t)).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_length_rounds_up() {
        let fs = 117.3491e6;
        let t = time_axis(10e-6, fs).unwrap();
        assert_eq!(t.len(), 1174);
        assert_eq!(t[0], 0.0);
        assert!(t[t.len() - 1] < 10e-6);
    }

    #[test]
    fn empty_duration_is_empty() {
        assert!(time_axis(0.0, 1.0).unwrap().is_empty());
        assert!(time_axis(-1.0, 1.0).is_err());
        assert!(time_axis(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn huge_duration_is_rejected() {
        let too_long = (MAX_LEN + 1) as f64;
        for (duration, fs) in [(1e9, 1e9), (1e300, 1e300), (1.0, too_long)] {
            assert!(
                matches!(
                    time_axis(duration, fs),
                    Err(DomainError::InvalidArgument(_))
                ),
                "{duration} s at {fs} Hz"
            );
        }
    }

    #[test]
    fn tones_add_up() {
        let t = time_axis(1.0, 8.0).unwrap();
        let x = tones(&t, &[1.0, 2.0]);
        assert_eq!(x.len(), 8);
        // t = 1/8: sin(π/4) + sin(π/2)
        assert!((x[1] - (0.5f64.sqrt() + 1.0)).abs() < 1e-12);
        assert!(tones(&t, &[]).iter().all(|&v| v == 0.0));
    }
}
