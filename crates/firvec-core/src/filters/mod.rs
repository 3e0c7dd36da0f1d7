//! FIR Filter Design and Application
//!
//! The design path is deliberately narrow: windowed-sinc lowpass with a
//! Kaiser window, which is the one method that maps a ripple/transition
//! specification directly onto a window parameter and length estimate.
//!
//! ```text
//! FilterSpec ──design──► FilterDesign ──┬──► FirFilter::apply (convolution)
//!                                       ├──► frequency_response (verification)
//!                                       └──► quantizer (fixed-point export)
//! ```

pub mod design;
pub mod fir;
pub mod response;
pub mod windows;

pub use design::{FilterDesign, FilterSpec};
pub use fir::{FilteredSignal, FirFilter};
pub use response::{frequency_response, magnitude_hz, response_at};
pub use windows::{bessel_i0, kaiser_beta, kaiser_length, kaiser_window};
