//! Zero-phase forward-backward filtering.
use alloc::vec::Vec;

use crate::DomainError;
use crate::Result;
use crate::TransferFunction;
use crate::iir::lfilter_with_state;
use crate::iir::lfilter_zi;

/// How the signal is extended at both edges before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadType {
    /// Point-symmetric reflection around the edge sample: `x[-n] = 2·x[0] − x[n]`.
    #[default]
    Odd,
    /// Mirror reflection: `x[-n] = x[n]`.
    Even,
    /// Repetition of the edge sample: `x[-n] = x[0]`.
    Constant,
    /// No extension.
    None,
}

/// Options for [filtfilt_with].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FiltFiltOptions {
    /// Edge extension.
    pub pad_type: PadType,
    /// Samples added at each edge. Defaults to three times the number of taps.
    pub pad_len: Option<usize>,
}

/// Filters `x` forward and backward, cancelling the phase response.
///
/// Uses odd extension by `3·max(len(a), len(b))` samples at both edges, see
/// [filtfilt_with].
///
/// ```
/// use filterdsp::{filtfilt, TransferFunction};
///
/// let tf = TransferFunction::fir([0.5, 0.5]).unwrap();
/// let x = vec![1.0; 16];
/// let y = filtfilt(&tf, &x).unwrap();
/// assert_eq!(y.len(), x.len());
/// assert!(y.iter().all(|v| (v - 1.0).abs() < 1e-12));
/// ```
pub fn filtfilt(tf: &TransferFunction, x: &[f64]) -> Result<Vec<f64>> {
    filtfilt_with(tf, x, FiltFiltOptions::default())
}

/// Filters `x` forward and backward with the given edge handling.
///
/// The signal is extended at both edges, then filtered once forward and once
/// over the time-reversed result. Each pass starts from the step steady state
/// ([lfilter_zi]) scaled by the first sample it sees. Finally, the extension
/// is removed, so the output has the length of the input.
///
/// The signal has to be longer than the padding. Since the whole signal is
/// needed upfront, this only works offline.
pub fn filtfilt_with(
    tf: &TransferFunction,
    x: &[f64],
    options: FiltFiltOptions,
) -> Result<Vec<f64>> {
    let pad_len = match options.pad_type {
        PadType::None => 0,
        _ => options.pad_len.unwrap_or(3 * tf.num_taps()),
    };
    if x.len() <= pad_len {
        return Err(DomainError::SignalTooShort {
            len: x.len(),
            pad_len,
        });
    }

    let ext = extend(x, pad_len, options.pad_type);
    let zi = lfilter_zi(tf)?;
    debug!(
        len = x.len(),
        pad_len,
        pad_type = ?options.pad_type,
        "zero-phase filtering"
    );

    let scaled = |s: f64| zi.iter().map(|z| z * s).collect::<Vec<f64>>();
    let (mut y, _) = lfilter_with_state(tf, &ext, &scaled(ext[0]))?;
    y.reverse();
    let (mut y, _) = lfilter_with_state(tf, &y, &scaled(y[0]))?;
    y.reverse();

    y.truncate(pad_len + x.len());
    y.drain(..pad_len);
    Ok(y)
}

fn extend(x: &[f64], n: usize, pad_type: PadType) -> Vec<f64> {
    let first = x[0];
    let last = x[x.len() - 1];
    let len = x.len();

    let mut ext = Vec::with_capacity(len + 2 * n);
    match pad_type {
        PadType::Odd => {
            ext.extend((1..=n).rev().map(|i| 2.0 * first - x[i]));
            ext.extend_from_slice(x);
            ext.extend((1..=n).map(|i| 2.0 * last - x[len - 1 - i]));
        }
        PadType::Even => {
            ext.extend((1..=n).rev().map(|i| x[i]));
            ext.extend_from_slice(x);
            ext.extend((1..=n).map(|i| x[len - 1 - i]));
        }
        PadType::Constant => {
            ext.extend(core::iter::repeat_n(first, n));
            ext.extend_from_slice(x);
            ext.extend(core::iter::repeat_n(last, n));
        }
        PadType::None => ext.extend_from_slice(x),
    }
    ext
}
