//! Kaiser Windowed-Sinc Lowpass Design
//!
//! Turns a frequency-domain specification (cutoff, transition width,
//! stopband attenuation) into FIR tap coefficients:
//!
//! ```text
//! FilterSpec → (β, N) estimate → ideal sinc · Kaiser window → normalize → taps
//! ```
//!
//! The tap count is forced odd so the filter is linear-phase with an
//! integer-sample group delay, and the taps are normalized for exactly
//! unity DC gain.
//!
//! ## Example
//!
//! ```rust
//! use firvec_core::filters::design::{FilterSpec, FilterDesign};
//!
//! let spec = FilterSpec {
//!     sample_rate: 100e6,
//!     transition_width_hz: 20e6,
//!     stopband_attenuation_db: 60.0,
//!     cutoff_hz: 35e6,
//! };
//! let design = FilterDesign::kaiser_lowpass(&spec).unwrap();
//! assert_eq!(design.num_taps() % 2, 1);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::windows::{kaiser_beta, kaiser_length, kaiser_window};
use crate::error::{Error, Result};

/// Frequency-domain lowpass specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Width of the transition band in Hz
    pub transition_width_hz: f64,
    /// Desired stopband attenuation in dB (positive)
    pub stopband_attenuation_db: f64,
    /// Cutoff frequency in Hz (-6 dB point, center of the transition band)
    pub cutoff_hz: f64,
}

impl FilterSpec {
    /// Validate the spec invariants: positive rate and transition width,
    /// positive attenuation, cutoff strictly inside `(0, sample_rate/2)`.
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate > 0.0) {
            return Err(Error::InvalidSpec(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if !(self.transition_width_hz > 0.0) {
            return Err(Error::InvalidSpec(format!(
                "transition width must be positive, got {}",
                self.transition_width_hz
            )));
        }
        if !(self.stopband_attenuation_db > 0.0) {
            return Err(Error::InvalidSpec(format!(
                "stopband attenuation must be positive, got {}",
                self.stopband_attenuation_db
            )));
        }
        let nyquist = self.sample_rate / 2.0;
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(Error::InvalidSpec(format!(
                "cutoff must lie in (0, {nyquist}), got {}",
                self.cutoff_hz
            )));
        }
        Ok(())
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }
}

/// A completed lowpass design: tap coefficients plus the derived parameters.
///
/// Computed once from a [`FilterSpec`], immutable afterward. Consumed by the
/// FIR applier, the frequency-response analyzer, and the quantizer.
#[derive(Debug, Clone)]
pub struct FilterDesign {
    spec: FilterSpec,
    beta: f64,
    taps: Vec<f64>,
}

impl FilterDesign {
    /// Design a lowpass filter from the spec using the windowed-sinc method
    /// with a Kaiser window.
    ///
    /// The ideal response `h[n] = fc·sinc(fc·(n − M/2))` (cutoff normalized
    /// to Nyquist, `sinc(0) = 1`) is multiplied by the Kaiser window and the
    /// product normalized so the taps sum to exactly 1.
    pub fn kaiser_lowpass(spec: &FilterSpec) -> Result<Self> {
        spec.validate()?;

        let delta = spec.transition_width_hz / spec.nyquist();
        let beta = kaiser_beta(spec.stopband_attenuation_db);
        let num_taps = kaiser_length(delta, spec.stopband_attenuation_db);

        let fc = spec.cutoff_hz / spec.nyquist();
        let mid = (num_taps - 1) as f64 / 2.0;
        let window = kaiser_window(num_taps, beta);

        let mut taps: Vec<f64> = (0..num_taps)
            .map(|n| fc * sinc(fc * (n as f64 - mid)) * window[n])
            .collect();

        // Unity gain at DC
        let sum: f64 = taps.iter().sum();
        for t in taps.iter_mut() {
            *t /= sum;
        }

        debug!(
            num_taps,
            beta,
            cutoff_hz = spec.cutoff_hz,
            "designed Kaiser lowpass"
        );

        Ok(Self {
            spec: *spec,
            beta,
            taps,
        })
    }

    /// The tap coefficients (impulse response).
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Number of taps N (always odd).
    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Filter order, N − 1.
    pub fn order(&self) -> usize {
        self.taps.len() - 1
    }

    /// Kaiser shape parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The spec this design was computed from.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Group delay in samples, (N − 1)/2. Exact for the symmetric taps.
    pub fn group_delay_samples(&self) -> usize {
        (self.taps.len() - 1) / 2
    }

    /// Group delay in seconds, (N − 1)/(2·fs).
    pub fn group_delay_secs(&self) -> f64 {
        (self.taps.len() - 1) as f64 / (2.0 * self.spec.sample_rate)
    }
}

/// Normalized sinc: `sin(πx)/(πx)`, `sinc(0) = 1`.
fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}
