use alloc::vec::Vec;

use crate::DomainError;
use crate::Result;

/// A rational transfer function `B(z) / A(z)`.
///
/// `b` holds the feed-forward and `a` the feedback taps, both in ascending
/// powers of `z^-1`. A FIR filter has `a = [1]`.
///
/// The coefficients are checked on construction and cannot be changed
/// afterwards: both vectors are non-empty, `a[0] != 0`, and every tap is finite.
///
/// ```
/// use filterdsp::TransferFunction;
///
/// let tf = TransferFunction::new([0.5, 0.5], [1.0, -0.2]).unwrap();
/// assert_eq!(tf.order(), 1);
/// assert!(TransferFunction::new([1.0], [0.0, 1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl TransferFunction {
    /// Create a transfer function from feed-forward taps `b` and feedback taps `a`.
    pub fn new(b: impl Into<Vec<f64>>, a: impl Into<Vec<f64>>) -> Result<Self> {
        let b = b.into();
        let a = a.into();

        if b.is_empty() {
            return Err(DomainError::InvalidFilter("no feed-forward taps".into()));
        }
        if a.is_empty() {
            return Err(DomainError::InvalidFilter("no feedback taps".into()));
        }
        if a[0] == 0.0 {
            return Err(DomainError::InvalidFilter("a[0] must not be zero".into()));
        }
        if b.iter().chain(a.iter()).any(|c| !c.is_finite()) {
            return Err(DomainError::InvalidFilter("taps must be finite".into()));
        }

        Ok(Self { b, a })
    }

    /// Create a FIR filter, i.e., `a = [1]`.
    pub fn fir(b: impl Into<Vec<f64>>) -> Result<Self> {
        Self::new(b, vec![1.0])
    }

    /// Feed-forward taps.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Feedback taps.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Number of taps of the longer of the two polynomials.
    pub fn num_taps(&self) -> usize {
        self.b.len().max(self.a.len())
    }

    /// Filter order, which is also the length of the delay line.
    pub fn order(&self) -> usize {
        self.num_taps() - 1
    }

    /// Whether the filter has no effective feedback.
    pub fn is_fir(&self) -> bool {
        self.a[1..].iter().all(|&c| c == 0.0)
    }

    /// Copy of the filter scaled so that `a[0] == 1`.
    pub fn normalized(&self) -> Self {
        let a0 = self.a[0];
        if a0 == 1.0 {
            return self.clone();
        }
        Self {
            b: self.b.iter().map(|c| c / a0).collect(),
            a: self.a.iter().map(|c| c / a0).collect(),
        }
    }

    /// Both polynomials normalized and zero-padded to [Self::num_taps].
    pub(crate) fn padded_taps(&self) -> (Vec<f64>, Vec<f64>) {
        let tf = self.normalized();
        let n = tf.num_taps();
        let mut b = tf.b;
        let mut a = tf.a;
        b.resize(n, 0.0);
        a.resize(n, 0.0);
        (b, a)
    }
}
