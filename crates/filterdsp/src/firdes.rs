//! Methods for designing FIR filters.
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_traits::Float;

use crate::DomainError;
use crate::Result;
use crate::windows::Window;

fn check_cutoff(name: &str, cutoff: f64, lower: f64) -> Result<()> {
    if !(cutoff.is_finite() && cutoff > lower && cutoff < 0.5) {
        return Err(DomainError::InvalidBand(format!(
            "{name} must be in ({lower}, 1/2), got {cutoff}"
        )));
    }
    Ok(())
}

fn check_taps(num_taps: usize) -> Result<()> {
    if num_taps == 0 {
        return Err(DomainError::InvalidArgument(
            "num_taps must be greater than 0".into(),
        ));
    }
    Ok(())
}

/// Constructs a lowpass FIR filter with unit gain and cutoff frequency `cutoff` (in cycles/sample)
/// using the specified window.
///
/// Example usage:
/// ```
/// use filterdsp::{firdes, windows::Window};
///
/// let sampling_freq = 10_000.0;
/// // 2000 Hz cutoff frequency, Hamming window
/// let cutoff = 2_000.0 / sampling_freq;
/// let taps = firdes::lowpass(65, cutoff, Window::Hamming).unwrap();
/// assert_eq!(taps.len(), 65);
/// ```
pub fn lowpass(num_taps: usize, cutoff: f64, window: Window) -> Result<Vec<f64>> {
    check_taps(num_taps)?;
    check_cutoff("cutoff", cutoff, 0.0)?;

    let omega_c = 2.0 * PI * cutoff;
    let taps = sinc_taps(num_taps, window, |x| match x == 0.0 {
        true => omega_c / PI,
        false => Float::sin(omega_c * x) / (PI * x),
    });
    Ok(taps)
}

/// Constructs a highpass FIR filter with unit gain and cutoff frequency `cutoff` (in cycles/sample)
/// using the specified window.
/// Note that `num_taps` must be odd, otherwise one tap is added to the generated filter.
pub fn highpass(num_taps: usize, cutoff: f64, window: Window) -> Result<Vec<f64>> {
    check_taps(num_taps)?;
    check_cutoff("cutoff", cutoff, 0.0)?;

    let num_taps = match num_taps % 2 {
        0 => {
            debug!(
                "highpass needs an odd number of taps, using {}",
                num_taps + 1
            );
            num_taps + 1
        }
        _ => num_taps,
    };
    let omega_c = 2.0 * PI * cutoff;
    let taps = sinc_taps(num_taps, window, |x| match x == 0.0 {
        true => 1.0 - omega_c / PI,
        false => -Float::sin(omega_c * x) / (PI * x),
    });
    Ok(taps)
}

/// Constructs a bandpass FIR filter with unit gain and cutoff frequencies
/// `lower_cutoff` and `higher_cutoff` (in cycles/sample) using the specified window.
pub fn bandpass(
    num_taps: usize,
    lower_cutoff: f64,
    higher_cutoff: f64,
    window: Window,
) -> Result<Vec<f64>> {
    check_taps(num_taps)?;
    check_cutoff("lower_cutoff", lower_cutoff, 0.0)?;
    check_cutoff("higher_cutoff", higher_cutoff, lower_cutoff)?;

    let lower_omega_c = 2.0 * PI * lower_cutoff;
    let higher_omega_c = 2.0 * PI * higher_cutoff;
    let bw = higher_omega_c - lower_omega_c;
    let center = (lower_omega_c + higher_omega_c) / 2.0;
    let taps = sinc_taps(num_taps, window, |x| match x == 0.0 {
        true => bw / PI,
        false => 2.0 * Float::cos(center * x) * Float::sin(bw / 2.0 * x) / (PI * x),
    });
    Ok(taps)
}

/// Samples `ideal` symmetrically around the center tap and applies the window.
fn sinc_taps(num_taps: usize, window: Window, ideal: impl Fn(f64) -> f64) -> Vec<f64> {
    let alpha = (num_taps - 1) as f64 / 2.0;
    window
        .taps(num_taps)
        .into_iter()
        .enumerate()
        .map(|(n, w)| ideal(n as f64 - alpha) * w)
        .collect()
}
