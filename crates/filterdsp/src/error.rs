use alloc::string::String;
use thiserror::Error;

/// Error for filter specifications and inputs outside the valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The coefficients do not describe a filter.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    /// Order, band edges, or sample rate of a design are out of range.
    #[error("invalid band: {0}")]
    InvalidBand(String),
    /// An argument is out of the range accepted by the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The signal is too short for the requested edge padding.
    #[error("signal of length {len} must be longer than the padding ({pad_len})")]
    SignalTooShort {
        /// Length of the signal
        len: usize,
        /// Number of samples padded at each edge
        pad_len: usize,
    },
    /// The filter has a pole at DC, so it has no step steady state.
    #[error("no steady state: the feedback taps sum to zero")]
    SingularSteadyState,
}

/// Result with a [DomainError].
pub type Result<T> = core::result::Result<T, DomainError>;
