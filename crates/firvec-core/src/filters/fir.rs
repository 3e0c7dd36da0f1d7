//! Batch FIR Application
//!
//! Causal direct-form convolution of designed taps against a fixed-length
//! signal buffer:
//!
//! ```text
//! y[n] = Σ_{k=0}^{N-1} taps[k] · x[n−k]
//! ```
//!
//! Samples before index 0 are zero (zero-padded history), so the output has
//! the same length as the input and the first N−1 samples are transient.
//! The applier reports the full array plus the group delay; trimming or
//! time-aligning against the input is left to the caller.
//!
//! The inner sum always runs in increasing `k` order. Floating-point
//! addition is not associative, so a fixed order is what makes repeated
//! runs bit-identical.

use crate::error::{Error, Result};
use crate::filters::design::FilterDesign;

/// Direct-form FIR filter over a batch buffer.
#[derive(Debug, Clone)]
pub struct FirFilter {
    coeffs: Vec<f64>,
    sample_rate: f64,
}

impl FirFilter {
    /// Create a filter from raw coefficients and the sample rate of the
    /// signals it will process (used only to express group delay in
    /// seconds).
    pub fn new(coeffs: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            coeffs,
            sample_rate,
        }
    }

    /// Create a filter from a completed design.
    pub fn from_design(design: &FilterDesign) -> Self {
        Self::new(design.taps().to_vec(), design.spec().sample_rate)
    }

    /// Get the filter coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Get the number of taps.
    pub fn num_taps(&self) -> usize {
        self.coeffs.len()
    }

    /// Group delay in samples, (N − 1)/2.
    pub fn group_delay_samples(&self) -> usize {
        (self.coeffs.len().max(1) - 1) / 2
    }

    /// Convolve the taps with `signal`.
    ///
    /// Output length equals input length. Fails with
    /// [`Error::DimensionMismatch`] when either the taps or the signal are
    /// empty, for which convolution is undefined.
    pub fn apply(&self, signal: &[f64]) -> Result<FilteredSignal> {
        if self.coeffs.is_empty() {
            return Err(Error::DimensionMismatch { what: "empty taps" });
        }
        if signal.is_empty() {
            return Err(Error::DimensionMismatch {
                what: "empty signal",
            });
        }

        let n_taps = self.coeffs.len();
        let mut out = Vec::with_capacity(signal.len());
        for n in 0..signal.len() {
            let mut acc = 0.0;
            // k runs low to high; x[n-k] is zero before the buffer start
            for (k, &c) in self.coeffs.iter().enumerate().take(n + 1) {
                acc += c * signal[n - k];
            }
            out.push(acc);
        }

        Ok(FilteredSignal {
            samples: out,
            transient_len: n_taps - 1,
            group_delay_secs: (n_taps - 1) as f64 / (2.0 * self.sample_rate),
        })
    }
}

/// Convolution output together with its time-alignment metadata.
///
/// The full-length sample array is kept; [`steady_state`](Self::steady_state)
/// exposes the portion where the filter history is fully populated. Exported
/// data stays full-length — the trim is a display/verification convenience,
/// deliberately mirroring the asymmetry of the reference pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSignal {
    samples: Vec<f64>,
    transient_len: usize,
    group_delay_secs: f64,
}

impl FilteredSignal {
    /// All output samples, same length as the input signal.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The samples after the initial N−1 transient.
    pub fn steady_state(&self) -> &[f64] {
        &self.samples[self.transient_len.min(self.samples.len())..]
    }

    /// Length of the initial transient, N−1 samples.
    pub fn transient_len(&self) -> usize {
        self.transient_len
    }

    /// Group delay in seconds, (N − 1)/(2·fs).
    pub fn group_delay_secs(&self) -> f64 {
        self.group_delay_secs
    }

    /// Consume into the raw sample vector.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
