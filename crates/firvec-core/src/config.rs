//! Generator Configuration
//!
//! YAML-backed configuration for the test-vector pipeline. Every knob the
//! reference design hard-codes is exposed here, with the reference values as
//! defaults, so a bare `GenConfig::default()` reproduces the canonical
//! vectors.
//!
//! ## Example Configuration
//!
//! ```yaml
//! sample_rate: 100e6
//! nsamples: 1000
//! tones:
//!   - { frequency: 10e6, amplitude: 1.0 }
//!   - { frequency: 40e6, amplitude: 1.0 }
//! transition_width_hz: 20e6
//! stopband_db: 60.0
//! cutoff_hz: 35e6
//! taps_path: taps.data
//! signal_path: sig.data
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filters::design::FilterSpec;
use crate::signal_source::Tone;

/// Full pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Sample rate of the time grid in Hz
    pub sample_rate: f64,
    /// Number of signal samples to synthesize
    pub nsamples: usize,
    /// Tones summed into the test signal
    pub tones: Vec<Tone>,
    /// Width of the filter transition band in Hz
    pub transition_width_hz: f64,
    /// Stopband attenuation in dB
    pub stopband_db: f64,
    /// Lowpass cutoff frequency in Hz
    pub cutoff_hz: f64,
    /// Magnitude bits for coefficient codes (codes span ±(2^bits − 1))
    pub coeff_magnitude_bits: u32,
    /// Magnitude bits for signal codes (codes span ±(2^bits − 1))
    pub sample_magnitude_bits: u32,
    /// Output path for the coefficient stream
    pub taps_path: PathBuf,
    /// Output path for the signal stream
    pub signal_path: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            sample_rate: 100e6,
            nsamples: 1000,
            tones: vec![Tone::new(10e6, 1.0), Tone::new(40e6, 1.0)],
            transition_width_hz: 20e6,
            stopband_db: 60.0,
            cutoff_hz: 35e6,
            coeff_magnitude_bits: 16,
            sample_magnitude_bits: 23,
            taps_path: PathBuf::from("taps.data"),
            signal_path: PathBuf::from("sig.data"),
        }
    }
}

impl GenConfig {
    /// Parse a configuration from a YAML string. Missing fields take their
    /// defaults.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Validate all fields before running the pipeline.
    pub fn validate(&self) -> Result<()> {
        self.filter_spec().validate()?;
        if self.nsamples == 0 {
            return Err(Error::InvalidSpec("nsamples must be positive".into()));
        }
        if self.tones.is_empty() {
            return Err(Error::InvalidSpec("tone list is empty".into()));
        }
        for bits in [self.coeff_magnitude_bits, self.sample_magnitude_bits] {
            if !(1..=30).contains(&bits) {
                return Err(Error::InvalidSpec(format!(
                    "magnitude bits must be in 1..=30, got {bits}"
                )));
            }
        }
        Ok(())
    }

    /// The filter-design portion of this configuration.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            sample_rate: self.sample_rate,
            transition_width_hz: self.transition_width_hz,
            stopband_attenuation_db: self.stopband_db,
            cutoff_hz: self.cutoff_hz,
        }
    }

    /// A documented example configuration (the reference defaults).
    pub fn example_yaml() -> String {
        serde_yaml::to_string(&Self::default()).unwrap_or_default()
    }
}
