//! A collection of window functions.
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_traits::Float;

use crate::math::special_funs;

/// Window used to taper FIR filter taps.
///
/// All windows are symmetric, which is what filter design needs.
///
/// Example usage:
/// ```
/// use filterdsp::windows::Window;
///
/// let taps = Window::Hamming.taps(38);
/// assert_eq!(taps.len(), 38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Window {
    /// All ones.
    Rect,
    /// Triangle with zeros at both ends.
    Bartlett,
    /// Raised cosine reaching zero at both ends.
    Hann,
    /// Raised cosine on a pedestal of 0.08.
    #[default]
    Hamming,
    /// Three-term cosine window.
    Blackman,
    /// Kaiser window with shape parameter `beta`.
    Kaiser(f64),
}

impl Window {
    /// Window of length `len`.
    pub fn taps(&self, len: usize) -> Vec<f64> {
        if len <= 1 {
            return vec![1.0; len];
        }
        match *self {
            Window::Rect => vec![1.0; len],
            Window::Bartlett => bartlett(len),
            Window::Hann => gen_cos(len, &[0.5, 0.5]),
            Window::Hamming => gen_cos(len, &[0.54, 0.46]),
            Window::Blackman => gen_cos(len, &[0.42, 0.5, 0.08]),
            Window::Kaiser(beta) => kaiser(len, beta),
        }
    }
}

fn bartlett(len: usize) -> Vec<f64> {
    let alpha = (len - 1) as f64 / 2.0;
    (0..len)
        .map(|n| 1.0 - ((n as f64 - alpha) / alpha).abs())
        .collect()
}

/// `w[n] = Σ_k (-1)^k · coeffs[k] · cos(2πkn / (len - 1))`
fn gen_cos(len: usize, coeffs: &[f64]) -> Vec<f64> {
    let span = (len - 1) as f64;
    (0..len)
        .map(|n| {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * c * Float::cos(2.0 * PI * (k * n) as f64 / span)
                })
                .sum()
        })
        .collect()
}

fn kaiser(len: usize, beta: f64) -> Vec<f64> {
    let alpha = (len - 1) as f64 / 2.0;
    let norm = special_funs::besseli0(beta);
    (0..len)
        .map(|n| {
            let r = (n as f64 - alpha) / alpha;
            special_funs::besseli0(beta * Float::sqrt((1.0 - r * r).max(0.0))) / norm
        })
        .collect()
}
