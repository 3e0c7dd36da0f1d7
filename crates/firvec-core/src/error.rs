//! Error types for filter design and test-vector generation

use std::io;
use thiserror::Error;

/// Result type for firvec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during design, filtering, quantization, or export.
///
/// All numeric variants are precondition failures: they are detected before
/// any computation begins, and no partial output is produced. I/O failures
/// are kept distinct from the numeric taxonomy.
#[derive(Error, Debug)]
pub enum Error {
    /// Filter or generator parameters failed validation
    #[error("invalid spec: {0}")]
    InvalidSpec(String),

    /// Quantizer input was empty or all-zero, so there is no peak to
    /// normalize against
    #[error("cannot quantize: input is empty or has zero peak")]
    ZeroPeak,

    /// Convolution operand had zero length
    #[error("dimension mismatch: {what}")]
    DimensionMismatch {
        /// Which operand was degenerate
        what: &'static str,
    },

    /// Failed to parse a YAML configuration
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// File I/O failure while reading or writing a data stream
    #[error("stream I/O failed: {0}")]
    Io(#[from] io::Error),
}
