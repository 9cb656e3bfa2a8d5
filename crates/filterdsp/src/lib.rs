//! Design, evaluate, and apply digital filters.
//!
//! A filter is described by its feed-forward taps `b` and feedback taps `a`
//! ([TransferFunction]). From there, the crate computes frequency responses
//! ([freqz]), filters finite signals causally ([lfilter]) or with zero phase
//! ([filtfilt]), and designs coefficients ([butter], [firdes]).
//!
//! ```
//! use filterdsp::prelude::*;
//!
//! let tf = TransferFunction::fir([0.1321, 0.3679, 0.3679, 0.1321]).unwrap();
//! let response = filterdsp::freqz(&tf, 1024).unwrap();
//! assert!(response.magnitude_db()[0].abs() < 1e-9);
//! ```
#![warn(missing_docs)]
#![no_std]

#[macro_use]
extern crate alloc;
#[macro_use]
extern crate tracing;

pub use num_complex;
pub use num_traits;

pub use butter::Band;
pub use butter::Zpk;
pub use butter::butter;
pub use butter::butter_bandpass;
pub use butter::butter_zpk;
pub use error::DomainError;
pub use error::Result;
pub use filtfilt::FiltFiltOptions;
pub use filtfilt::PadType;
pub use filtfilt::filtfilt;
pub use filtfilt::filtfilt_with;
pub use freqz::FrequencyResponse;
pub use freqz::freqz;
pub use freqz::freqz_hz;
pub use freqz::freqz_whole;
pub use freqz::response_at;
pub use freqz::response_at_hz;
pub use iir::IirFilter;
pub use iir::lfilter;
pub use iir::lfilter_with_state;
pub use iir::lfilter_zi;
pub use transfer_function::TransferFunction;

/// Largest number of samples or frequency points an operation allocates.
///
/// Longer requests fail with [DomainError::InvalidArgument] instead of
/// aborting on allocation.
pub const MAX_LEN: usize = 1 << 26;

pub mod butter;
mod error;
pub mod filtfilt;
pub mod firdes;
pub mod freqz;
pub mod iir;
pub mod math;
pub mod signal;
mod transfer_function;
pub mod windows;

/// Represents the status of a computation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ComputationStatus {
    /// Indicates that the output buffer could hold more samples, if more
    /// input samples were present.
    InsufficientInput,

    /// Indicates that more output samples can be computed from the given input,
    /// but there is not enough available space in the output buffer.
    InsufficientOutput,

    /// Indicates that as many samples as possible could be computed from the
    /// input buffer, and that the output buffer was exactly filled.
    BothSufficient,
}

impl ComputationStatus {
    /// Returns whether the output was sufficient to hold all producible samples.
    pub fn produced_all_samples(self) -> bool {
        self == Self::BothSufficient || self == Self::InsufficientInput
    }
}

/// Trait for a stateful filter
pub trait StatefulFilter<InputType, OutputType, TapType> {
    /// Computes the filter on the given input, outputting into the given
    /// output. The filter keeps its delay line between calls, so a signal can
    /// be processed in arbitrary chunks.
    ///
    /// Returns a tuple containing, in order:
    /// - The number of samples consumed from the input,
    /// - The number of samples produced in the output, and
    /// - A `ComputationStatus` which indicates whether the buffers were undersized.
    ///
    /// Elements of `output` beyond what is produced are left in an unspecified state.
    fn filter(
        &mut self,
        input: &[InputType],
        output: &mut [OutputType],
    ) -> (usize, usize, ComputationStatus);
    /// Returns the filter length, i.e., the number of taps per direction.
    fn length(&self) -> usize;
}

/// Prelude with common traits and types
pub mod prelude {
    pub use num_complex::Complex64;

    pub use super::ComputationStatus;
    pub use super::DomainError;
    pub use super::StatefulFilter;
    pub use super::TransferFunction;
}
