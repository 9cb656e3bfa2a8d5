//! Ready-made filter experiments.
//!
//! Each experiment holds its parameters, with sensible defaults, and computes
//! everything needed to inspect the filter in a single `run()`. The results
//! are plain data, so they can be plotted with [crate::gui] or checked in tests.
mod bandpass;
mod fir;

pub use bandpass::BandpassExperiment;
pub use bandpass::BandpassReport;
pub use fir::FOUR_TAP_COEFFS;
pub use fir::FirReport;
pub use fir::FourTapFir;
