//! Multi-Tone Test Signal Generator
//!
//! Produces the real-valued input for the filter pipeline: a sample-wise sum
//! of sinusoids over a uniform time grid. Essential for exercising a filter
//! chain without external hardware or captured data.
//!
//! ## Example
//!
//! ```rust
//! use firvec_core::signal_source::{SignalSource, Tone};
//!
//! // Two unit tones at 10 MHz and 40 MHz, sampled at 100 MHz
//! let src = SignalSource::new(
//!     vec![Tone::new(10e6, 1.0), Tone::new(40e6, 1.0)],
//!     100e6,
//! ).unwrap();
//!
//! let samples = src.generate(1000);
//! assert_eq!(samples.len(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{Error, Result};

/// A single sinusoidal component: `amplitude * sin(2*pi*frequency*t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f64,
    /// Peak amplitude (linear)
    pub amplitude: f64,
}

impl Tone {
    /// Create a tone descriptor.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Batch multi-tone signal generator.
///
/// The generated signal is immutable once produced; every call to
/// [`generate`](SignalSource::generate) recomputes from t = 0, so identical
/// calls yield identical output.
#[derive(Debug, Clone)]
pub struct SignalSource {
    tones: Vec<Tone>,
    sample_rate: f64,
}

impl SignalSource {
    /// Create a new source.
    ///
    /// Fails with [`Error::InvalidSpec`] when the sample rate is not
    /// positive or no tones are given.
    pub fn new(tones: Vec<Tone>, sample_rate: f64) -> Result<Self> {
        if !(sample_rate > 0.0) {
            return Err(Error::InvalidSpec(format!(
                "sample rate must be positive, got {sample_rate}"
            )));
        }
        if tones.is_empty() {
            return Err(Error::InvalidSpec("tone list is empty".into()));
        }
        Ok(Self { tones, sample_rate })
    }

    /// Generate `num_samples` samples of the summed tones.
    pub fn generate(&self, num_samples: usize) -> Vec<f64> {
        (0..num_samples)
            .map(|n| {
                let t = n as f64 / self.sample_rate;
                self.tones
                    .iter()
                    .map(|tone| tone.amplitude * (2.0 * PI * tone.frequency * t).sin())
                    .sum()
            })
            .collect()
    }

    /// The uniform time grid for `num_samples` samples: `t[n] = n / fs`.
    pub fn time_grid(&self, num_samples: usize) -> Vec<f64> {
        (0..num_samples)
            .map(|n| n as f64 / self.sample_rate)
            .collect()
    }

    /// Get the sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get the tone descriptors.
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }
}
