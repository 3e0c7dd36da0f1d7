//! End-to-end test of the reference scenario: 100 MHz sample rate, 1000
//! samples of a 10 MHz + 40 MHz two-tone signal, 20 MHz transition, 60 dB
//! stopband, 35 MHz cutoff — through design, filtering, quantization, and
//! file export.

use firvec_core::export::read_stream;
use firvec_core::filters::response::magnitude_hz;
use firvec_core::{pipeline, GenConfig};

fn temp_config(tag: &str) -> GenConfig {
    let mut config = GenConfig::default();
    let dir = std::env::temp_dir();
    config.taps_path = dir.join(format!("firvec_e2e_{tag}_taps.data"));
    config.signal_path = dir.join(format!("firvec_e2e_{tag}_sig.data"));
    config
}

fn cleanup(config: &GenConfig) {
    std::fs::remove_file(&config.taps_path).ok();
    std::fs::remove_file(&config.signal_path).ok();
}

#[test]
fn reference_scenario_files() {
    let config = temp_config("files");
    let vectors = pipeline::generate(&config).unwrap();
    pipeline::write(&vectors, &config).unwrap();

    let n = vectors.design.num_taps();
    assert_eq!(n % 2, 1, "tap count must be odd");

    // Coefficient file: exactly N lines, every code within the 16-bit
    // magnitude range, extremes actually reached
    let taps = read_stream(&config.taps_path).unwrap();
    assert_eq!(taps.len(), n);
    assert!(taps.iter().all(|&c| (-65535..=65535).contains(&c)));
    assert_eq!(taps.iter().map(|c| c.abs()).max(), Some(65535));

    // Signal file: exactly nsamples lines within the 24-bit word range
    let sig = read_stream(&config.signal_path).unwrap();
    assert_eq!(sig.len(), 1000);
    assert!(sig.iter().all(|&c| (-8388607..=8388607).contains(&c)));
    assert_eq!(sig.iter().map(|c| c.abs()).max(), Some(8388607));

    cleanup(&config);
}

#[test]
fn reference_scenario_round_trip_matches_memory() {
    let config = temp_config("roundtrip");
    let vectors = pipeline::generate(&config).unwrap();
    pipeline::write(&vectors, &config).unwrap();

    assert_eq!(read_stream(&config.taps_path).unwrap(), vectors.tap_codes);
    assert_eq!(read_stream(&config.signal_path).unwrap(), vectors.signal_codes);

    cleanup(&config);
}

#[test]
fn reference_design_meets_frequency_spec() {
    let config = GenConfig::default();
    let vectors = pipeline::generate(&config).unwrap();
    let taps = vectors.design.taps();

    for (f_hz, mag) in magnitude_hz(taps, 8000, config.sample_rate) {
        if f_hz <= 8e6 {
            // Reference passband check window near DC
            assert!((0.9985..=1.001).contains(&mag), "{mag} at {f_hz} Hz");
        } else if f_hz >= 45e6 {
            // Stopband edge = cutoff + transition/2
            assert!(mag < 2e-3, "stopband leakage {mag} at {f_hz} Hz");
        }
    }
}

#[test]
fn filtered_output_attenuates_high_tone() {
    // The 40 MHz tone sits in the stopband; after the transient the output
    // should be close to the 10 MHz tone alone (which sits in the passband).
    let config = GenConfig::default();
    let vectors = pipeline::generate(&config).unwrap();

    let steady = vectors.filtered.steady_state();
    let power: f64 = steady.iter().map(|y| y * y).sum::<f64>() / steady.len() as f64;

    // A unit sinusoid has mean power 0.5; the two-tone input has 1.0
    assert!(
        (power - 0.5).abs() < 0.05,
        "steady-state power {power}, expected ~0.5 (one surviving tone)"
    );

    // Transient metadata matches the design
    assert_eq!(vectors.filtered.transient_len(), vectors.design.order());
    assert_eq!(
        vectors.filtered.group_delay_secs(),
        vectors.design.group_delay_secs()
    );
}
