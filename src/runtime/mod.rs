//! ## Runtime
//!
//! Process-wide state of the tools: configuration, logging, and the error
//! type of the experiments.
use std::result;
use thiserror::Error;

use filterdsp::DomainError;

pub mod config;
mod logging;

/// Initialize logging with the configured level.
///
/// Safe to call more than once.
pub fn init() {
    logging::init();
}

/// Errors of the experiments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid filter, band, or signal.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The computed result cannot be interpreted, e.g., the response is zero
    /// at every frequency.
    #[error("Degenerate result: {0}")]
    Degenerate(String),
}

/// Result with the runtime [Error].
pub type Result<T> = result::Result<T, Error>;
