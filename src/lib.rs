#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Evaluate, design, and apply digital filters, and look at the results in
//! the terminal.
//!
//! The signal processing lives in [filterdsp], which is re-exported. This
//! crate adds configuration and logging ([runtime]), ready-made experiments
//! ([experiment]), and terminal plots ([gui]).
//!
//! ## Example
//! Design the default 30.5 to 37 MHz Butterworth bandpass and check the gain
//! at the test tones:
//! ```
//! use filterscope::experiment::BandpassExperiment;
//!
//! fn main() -> filterscope::anyhow::Result<()> {
//!     let report = BandpassExperiment::default().run()?;
//!     for (freq, gain) in report.tone_gains() {
//!         println!("{} MHz: {gain:.1} dB", freq / 1e6);
//!     }
//!     Ok(())
//! }
//! ```

/// Logging macro
#[macro_use]
pub extern crate tracing;

// re-exports
pub use anyhow;
pub use filterdsp;
pub use num_complex;

pub mod experiment;
pub mod gui;
pub mod runtime;
