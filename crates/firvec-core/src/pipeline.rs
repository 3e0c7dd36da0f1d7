//! End-to-End Test-Vector Pipeline
//!
//! Wires the stages together: synthesize the multi-tone signal, design the
//! Kaiser lowpass, run the batch convolution, quantize both the taps and
//! the raw signal, and (separately) write the two code streams to disk.
//!
//! Generation and writing are split so callers that only want the in-memory
//! vectors — verification tooling, plotting frontends — never touch the
//! filesystem.

use tracing::{debug, info};

use crate::config::GenConfig;
use crate::error::Result;
use crate::export::write_stream;
use crate::filters::design::FilterDesign;
use crate::filters::fir::{FilteredSignal, FirFilter};
use crate::quantize::FixedPointQuantizer;
use crate::signal_source::SignalSource;

/// Everything the pipeline produces, kept together so downstream consumers
/// need no recomputation.
#[derive(Debug, Clone)]
pub struct TestVectors {
    /// The completed filter design
    pub design: FilterDesign,
    /// The raw synthesized signal
    pub signal: Vec<f64>,
    /// The convolution output (full length, with transient metadata)
    pub filtered: FilteredSignal,
    /// Quantized coefficient codes
    pub tap_codes: Vec<i32>,
    /// Quantized raw-signal codes
    pub signal_codes: Vec<i32>,
}

/// Run the full pipeline in memory.
///
/// Fails fast on an invalid configuration; no stage runs before validation
/// passes.
pub fn generate(config: &GenConfig) -> Result<TestVectors> {
    config.validate()?;

    let source = SignalSource::new(config.tones.clone(), config.sample_rate)?;
    let signal = source.generate(config.nsamples);
    debug!(nsamples = signal.len(), "synthesized test signal");

    let design = FilterDesign::kaiser_lowpass(&config.filter_spec())?;
    info!(
        num_taps = design.num_taps(),
        beta = design.beta(),
        group_delay_secs = design.group_delay_secs(),
        "filter design complete"
    );

    let filtered = FirFilter::from_design(&design).apply(&signal)?;

    let tap_codes = FixedPointQuantizer::new(config.coeff_magnitude_bits)
        .quantize(design.taps())?;
    let signal_codes =
        FixedPointQuantizer::new(config.sample_magnitude_bits).quantize(&signal)?;

    Ok(TestVectors {
        design,
        signal,
        filtered,
        tap_codes,
        signal_codes,
    })
}

/// Write the coefficient and signal streams to the configured paths.
pub fn write(vectors: &TestVectors, config: &GenConfig) -> Result<()> {
    write_stream(&config.taps_path, &vectors.tap_codes)?;
    write_stream(&config.signal_path, &vectors.signal_codes)?;
    info!(
        taps = %config.taps_path.display(),
        signal = %config.signal_path.display(),
        "exported test vectors"
    );
    Ok(())
}
