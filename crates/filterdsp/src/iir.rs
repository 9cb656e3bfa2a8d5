//! IIR filtering of finite and streamed signals.
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ComputationStatus;
use crate::DomainError;
use crate::Result;
use crate::StatefulFilter;
use crate::TransferFunction;

/// An IIR filter in direct form II transposed.
///
/// Calling `filter()` on this struct always produces exactly as many samples
/// as it consumes. The delay line is kept between calls, so a signal can be
/// fed in chunks of any size and yields the same output as one call over the
/// whole signal.
///
/// Example usage:
/// ```
/// use filterdsp::prelude::*;
/// use filterdsp::IirFilter;
///
/// let tf = TransferFunction::new([1.0], [1.0, -0.5]).unwrap();
/// let mut iir = IirFilter::new(&tf);
///
/// let input = [10.0, 10.0, 10.0];
/// let mut output = [0.0; 3];
/// iir.filter(&input, &mut output);
/// assert_eq!(output, [10.0, 15.0, 17.5]);
/// ```
#[derive(Debug, Clone)]
pub struct IirFilter {
    b_taps: Vec<f64>,
    a_taps: Vec<f64>,
    memory: Vec<f64>,
}

impl IirFilter {
    /// Create a filter with zero initial state.
    pub fn new(tf: &TransferFunction) -> Self {
        let (b_taps, a_taps) = tf.padded_taps();
        let memory = vec![0.0; tf.order()];
        Self {
            b_taps,
            a_taps,
            memory,
        }
    }

    /// Create a filter with initial state `zi`, which has to hold
    /// [TransferFunction::order] values.
    pub fn with_state(tf: &TransferFunction, zi: &[f64]) -> Result<Self> {
        let mut iir = Self::new(tf);
        if zi.len() != iir.memory.len() {
            return Err(DomainError::InvalidArgument(format!(
                "initial state needs {} values, got {}",
                iir.memory.len(),
                zi.len()
            )));
        }
        iir.memory.copy_from_slice(zi);
        Ok(iir)
    }

    /// Current content of the delay line.
    pub fn state(&self) -> &[f64] {
        &self.memory
    }

    /// Clear the delay line.
    pub fn reset(&mut self) {
        self.memory.iter_mut().for_each(|m| *m = 0.0);
    }

    #[inline]
    fn step(&mut self, x: f64) -> f64 {
        let y = self.b_taps[0] * x + self.memory.first().copied().unwrap_or(0.0);
        let n = self.memory.len();
        for k in 0..n {
            let next = if k + 1 < n { self.memory[k + 1] } else { 0.0 };
            self.memory[k] = self.b_taps[k + 1] * x - self.a_taps[k + 1] * y + next;
        }
        y
    }
}

impl StatefulFilter<f64, f64, f64> for IirFilter {
    fn filter(&mut self, input: &[f64], output: &mut [f64]) -> (usize, usize, ComputationStatus) {
        let n = input.len().min(output.len());
        for (i, o) in input[..n].iter().zip(output[..n].iter_mut()) {
            *o = self.step(*i);
        }

        let status = match input.len().cmp(&output.len()) {
            Ordering::Equal => ComputationStatus::BothSufficient,
            Ordering::Less => ComputationStatus::InsufficientInput,
            Ordering::Greater => ComputationStatus::InsufficientOutput,
        };
        (n, n, status)
    }

    fn length(&self) -> usize {
        self.b_taps.len()
    }
}

/// Filters `x` in one causal pass with zero initial state.
///
/// The output has the length of the input and follows
/// `y[n] = (Σ b[k]·x[n-k] − Σ_{k≥1} a[k]·y[n-k]) / a[0]`.
/// Like any causal filter, this delays the signal by a frequency dependent
/// amount.
///
/// ```
/// use filterdsp::{lfilter, TransferFunction};
///
/// let tf = TransferFunction::fir([1.0, 1.0]).unwrap();
/// assert_eq!(lfilter(&tf, &[1.0, 2.0, 3.0]), vec![1.0, 3.0, 5.0]);
/// ```
pub fn lfilter(tf: &TransferFunction, x: &[f64]) -> Vec<f64> {
    let mut iir = IirFilter::new(tf);
    let mut y = vec![0.0; x.len()];
    iir.filter(x, &mut y);
    y
}

/// Filters `x` starting from delay line `zi` and returns the output together
/// with the final delay line.
pub fn lfilter_with_state(
    tf: &TransferFunction,
    x: &[f64],
    zi: &[f64],
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut iir = IirFilter::with_state(tf, zi)?;
    let mut y = vec![0.0; x.len()];
    iir.filter(x, &mut y);
    Ok((y, iir.memory))
}

/// Delay line of the filter in steady state for a unit step input.
///
/// Scaling the result with the first sample of a signal and passing it to
/// [lfilter_with_state] suppresses the start-up transient.
pub fn lfilter_zi(tf: &TransferFunction) -> Result<Vec<f64>> {
    let (b, a) = tf.padded_taps();
    let n = b.len();
    if n == 1 {
        return Ok(Vec::new());
    }

    let a_sum: f64 = a.iter().sum();
    let scale: f64 = a.iter().map(|c| c.abs()).sum();
    if a_sum.abs() <= f64::EPSILON * scale {
        return Err(DomainError::SingularSteadyState);
    }

    // Solves (I - A) zi = b[1..] - a[1..] b[0] for the companion matrix A of a.
    let b_sum: f64 = (1..n).map(|k| b[k] - a[k] * b[0]).sum();
    let mut zi = vec![0.0; n - 1];
    zi[0] = b_sum / a_sum;
    let mut asum = 1.0;
    let mut csum = 0.0;
    for k in 1..n - 1 {
        asum += a[k];
        csum += b[k] - a[k] * b[0];
        zi[k] = asum * zi[0] - csum;
    }
    Ok(zi)
}

#[cfg(test)]
mod test {
    use super::*;

    use alloc::vec::Vec;

    struct Feeder {
        filter: IirFilter,
    }

    impl Feeder {
        fn feed(&mut self, input: f64) -> f64 {
            let mut out = [0.0];
            let (n_consumed, n_produced, status) = self.filter.filter(&[input], &mut out);
            assert_eq!(n_consumed, n_produced);
            assert_eq!(status, ComputationStatus::BothSufficient);
            out[0]
        }
    }

    fn make_filter(b: &[f64], a: &[f64]) -> Feeder {
        Feeder {
            filter: IirFilter::new(&TransferFunction::new(b, a).unwrap()),
        }
    }

    /// Direct evaluation of the difference equation.
    fn recurrence(b: &[f64], a: &[f64], x: &[f64]) -> Vec<f64> {
        let mut y: Vec<f64> = Vec::with_capacity(x.len());
        for n in 0..x.len() {
            let mut acc = 0.0;
            for (k, bk) in b.iter().enumerate() {
                if k <= n {
                    acc += bk * x[n - k];
                }
            }
            for (k, ak) in a.iter().enumerate().skip(1) {
                if k <= n {
                    acc -= ak * y[n - k];
                }
            }
            y.push(acc / a[0]);
        }
        y
    }

    #[test]
    fn fir_taps_algorithm() {
        let mut iir = make_filter(&[1.0, 2.0, 3.0], &[1.0]);

        assert_eq!(iir.feed(10.0), 10.0);
        assert_eq!(iir.feed(20.0), 20.0 + 20.0);
        assert_eq!(iir.feed(30.0), 30.0 + 40.0 + 30.0);
        assert_eq!(iir.feed(40.0), 40.0 + 60.0 + 60.0);
    }

    #[test]
    fn single_feedback_tap_algorithm() {
        let mut iir = make_filter(&[1.0], &[1.0, -0.5]);

        assert_eq!(iir.feed(10.0), 10.0);
        assert_eq!(iir.feed(10.0), 15.0);
        assert_eq!(iir.feed(10.0), 17.5);
        assert_eq!(iir.feed(10.0), 18.75);
    }

    #[test]
    fn matches_difference_equation() {
        let b = [0.3, -0.1, 0.2];
        let a = [2.0, -0.6, 0.3, 0.1];
        let x: Vec<f64> = (0..50).map(|n| ((n * 7 % 11) as f64) - 5.0).collect();
        let tf = TransferFunction::new(b, a).unwrap();
        let have = lfilter(&tf, &x);
        let want = recurrence(&b, &a, &x);
        assert_eq!(have.len(), x.len());
        for (h, w) in have.iter().zip(want) {
            assert!((h - w).abs() < 1e-12, "{h} != {w}");
        }
    }

    #[test]
    fn chunked_equals_one_shot() {
        let tf = TransferFunction::new([0.2, 0.4, 0.2], [1.0, -0.3, 0.2]).unwrap();
        let x: Vec<f64> = (0..40).map(|n| (n as f64 * 0.3).sin()).collect();
        let whole = lfilter(&tf, &x);

        let mut iir = IirFilter::new(&tf);
        let mut out = Vec::new();
        for chunk in x.chunks(7) {
            let mut buf = vec![0.0; chunk.len()];
            iir.filter(chunk, &mut buf);
            out.extend_from_slice(&buf);
        }
        assert_eq!(out, whole);
    }

    #[test]
    fn reports_buffer_status() {
        let tf = TransferFunction::fir([1.0]).unwrap();
        let mut iir = IirFilter::new(&tf);
        let mut out = [0.0; 2];
        assert_eq!(
            iir.filter(&[1.0, 2.0, 3.0], &mut out),
            (2, 2, ComputationStatus::InsufficientOutput)
        );
        let mut out = [0.0; 4];
        assert_eq!(
            iir.filter(&[1.0, 2.0, 3.0], &mut out),
            (3, 3, ComputationStatus::InsufficientInput)
        );
        assert!(ComputationStatus::InsufficientInput.produced_all_samples());
        assert!(!ComputationStatus::InsufficientOutput.produced_all_samples());
    }

    #[test]
    fn reset_clears_memory() {
        let tf = TransferFunction::new([1.0], [1.0, -0.9]).unwrap();
        let mut iir = IirFilter::new(&tf);
        let mut out = [0.0; 3];
        iir.filter(&[1.0, 1.0, 1.0], &mut out);
        assert!(iir.state().iter().any(|&m| m != 0.0));
        iir.reset();
        assert!(iir.state().iter().all(|&m| m == 0.0));
    }

    #[test]
    fn state_length_is_checked() {
        let tf = TransferFunction::new([1.0, 1.0], [1.0, -0.5]).unwrap();
        assert!(matches!(
            lfilter_with_state(&tf, &[1.0], &[0.0, 0.0]),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn steady_state_removes_step_transient() {
        let tf = TransferFunction::new([0.1, 0.2, 0.1], [1.0, -0.8, 0.2]).unwrap();
        let zi = lfilter_zi(&tf).unwrap();
        let step = vec![1.0; 20];
        let (y, zf) = lfilter_with_state(&tf, &step, &zi).unwrap();
        // DC gain: 0.4 / 0.4
        for v in y {
            assert!((v - 1.0).abs() < 1e-12, "{v}");
        }
        for (f, i) in zf.iter().zip(&zi) {
            assert!((f - i).abs() < 1e-12);
        }
    }

    #[test]
    fn steady_state_of_fir_and_all_pass() {
        let gain = TransferFunction::fir([2.0]).unwrap();
        assert!(lfilter_zi(&gain).unwrap().is_empty());
        let average = TransferFunction::fir([0.5, 0.5]).unwrap();
        assert_eq!(lfilter_zi(&average).unwrap(), vec![0.5]);
    }

    #[test]
    fn integrator_has_no_steady_state() {
        let tf = TransferFunction::new([1.0], [1.0, -1.0]).unwrap();
        assert_eq!(lfilter_zi(&tf), Err(DomainError::SingularSteadyState));
    }
}
