//! # firvec-core
//!
//! FIR lowpass design by the windowed-sinc/Kaiser method, plus everything
//! needed to turn a design into fixed-point test vectors for hardware
//! bring-up: a multi-tone signal source, a batch convolution engine, a
//! frequency-response checker, and a peak-normalizing quantizer with flat
//! text stream export.
//!
//! ## Signal Flow
//!
//! ```text
//! tones ──► SignalSource ──► signal ──┬──► FirFilter ──► FilteredSignal
//!                                     └──► quantizer ──► sig.data
//!
//! FilterSpec ──► FilterDesign ──┬──► FirFilter
//!                               ├──► frequency_response (verification)
//!                               └──► quantizer ──► taps.data
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use firvec_core::{pipeline, GenConfig};
//!
//! let config = GenConfig::default(); // the reference parameters
//! let vectors = pipeline::generate(&config)?;
//! pipeline::write(&vectors, &config)?;
//!
//! println!(
//!     "{} taps, beta = {:.4}",
//!     vectors.design.num_taps(),
//!     vectors.design.beta()
//! );
//! # Ok::<(), firvec_core::Error>(())
//! ```
//!
//! Everything is synchronous, single-threaded batch computation over
//! immutable buffers; identical inputs produce bit-identical outputs.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod pipeline;
pub mod quantize;
pub mod signal_source;

// Re-export main types
pub use config::GenConfig;
pub use error::{Error, Result};
pub use filters::{FilterDesign, FilterSpec, FilteredSignal, FirFilter};
pub use pipeline::TestVectors;
pub use quantize::FixedPointQuantizer;
pub use signal_source::{SignalSource, Tone};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GenConfig;
    pub use crate::error::{Error, Result};
    pub use crate::filters::{FilterDesign, FilterSpec, FilteredSignal, FirFilter};
    pub use crate::pipeline::{self, TestVectors};
    pub use crate::quantize::FixedPointQuantizer;
    pub use crate::signal_source::{SignalSource, Tone};
}
