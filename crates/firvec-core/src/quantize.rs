//! Fixed-Point Quantization
//!
//! Maps real-valued coefficient/sample arrays to signed integer codes for
//! downstream hardware consumption. The mapping is peak-normalized: the
//! largest-magnitude input lands exactly on the full-scale code
//! `±(2^bits − 1)`, everything else scales proportionally and rounds to
//! nearest (half away from zero).
//!
//! The two widths used by the pipeline are 16 magnitude bits for
//! coefficients (codes in ±65535, a 17-bit signed word — the "16-bit
//! coefficient" convention of the hardware side) and 23 magnitude bits for
//! samples (codes in ±8388607, a 24-bit signed word).
//!
//! ## Example
//!
//! ```rust
//! use firvec_core::quantize::FixedPointQuantizer;
//!
//! let q = FixedPointQuantizer::new(16);
//! let codes = q.quantize(&[0.5, -1.0, 0.25]).unwrap();
//! assert_eq!(codes[1], -65535); // peak maps to full scale, sign preserved
//! ```

use crate::error::{Error, Result};

/// Peak-normalizing quantizer for a fixed magnitude-bit depth.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointQuantizer {
    magnitude_bits: u32,
}

impl FixedPointQuantizer {
    /// Create a quantizer producing codes bounded by `±(2^bits − 1)`.
    ///
    /// `magnitude_bits` must be in `1..=30` so codes fit an `i32`.
    pub fn new(magnitude_bits: u32) -> Self {
        assert!(
            (1..=30).contains(&magnitude_bits),
            "magnitude_bits must be in 1..=30"
        );
        Self { magnitude_bits }
    }

    /// The full-scale code, `2^bits − 1`.
    pub fn full_scale(&self) -> i32 {
        (1i32 << self.magnitude_bits) - 1
    }

    /// Bit depth.
    pub fn magnitude_bits(&self) -> u32 {
        self.magnitude_bits
    }

    /// Quantize a slice to integer codes.
    ///
    /// Fails with [`Error::ZeroPeak`] when the input is empty or all-zero —
    /// there is nothing to normalize against, and silently emitting zeros
    /// would hide the condition from the consumer.
    pub fn quantize(&self, values: &[f64]) -> Result<Vec<i32>> {
        let peak = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        if values.is_empty() || peak == 0.0 {
            return Err(Error::ZeroPeak);
        }

        let scale = self.full_scale() as f64 / peak;
        Ok(values.iter().map(|v| (v * scale).round() as i32).collect())
    }
}
