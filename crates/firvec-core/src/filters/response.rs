//! Frequency Response Evaluation
//!
//! Evaluates the DTFT of a real tap vector on a dense grid of `num_points`
//! equally spaced frequencies over `[0, π)` — half the unit circle, which is
//! all the information a real-coefficient filter carries. Used to verify a
//! design against its spec (passband ripple, stopband attenuation), not for
//! filtering itself.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Evaluate `H(ω) = Σ taps[n]·e^{−jωn}` at `ω_k = π·k/num_points`.
///
/// Returns `(ω/π, H(ω))` pairs; the first element runs from 0 (DC) toward
/// 1 (Nyquist, exclusive).
pub fn frequency_response(taps: &[f64], num_points: usize) -> Vec<(f64, Complex64)> {
    (0..num_points)
        .map(|k| {
            let omega = PI * k as f64 / num_points as f64;
            (omega / PI, response_at(taps, omega))
        })
        .collect()
}

/// Evaluate the response at a single normalized angular frequency
/// `omega` (radians/sample, `0..π`).
pub fn response_at(taps: &[f64], omega: f64) -> Complex64 {
    let mut re = 0.0;
    let mut im = 0.0;
    for (n, &c) in taps.iter().enumerate() {
        let angle = omega * n as f64;
        re += c * angle.cos();
        im -= c * angle.sin();
    }
    Complex64::new(re, im)
}

/// Gain magnitudes mapped onto a Hz axis: `(freq_hz, |H|)` pairs over
/// `[0, sample_rate/2)`. The inspection-friendly view of
/// [`frequency_response`].
pub fn magnitude_hz(taps: &[f64], num_points: usize, sample_rate: f64) -> Vec<(f64, f64)> {
    let nyquist = sample_rate / 2.0;
    frequency_response(taps, num_points)
        .into_iter()
        .map(|(f_norm, h)| (f_norm * nyquist, h.norm()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::design::{FilterDesign, FilterSpec};

    fn reference_design() -> FilterDesign {
        FilterDesign::kaiser_lowpass(&FilterSpec {
            sample_rate: 100e6,
            transition_width_hz: 20e6,
            stopband_attenuation_db: 60.0,
            cutoff_hz: 35e6,
        })
        .unwrap()
    }

    #[test]
    fn test_dc_gain_is_tap_sum() {
        let taps = [0.1, 0.2, 0.4, 0.2, 0.1];
        let h0 = response_at(&taps, 0.0);
        assert!((h0.re - 1.0).abs() < 1e-12);
        assert!(h0.im.abs() < 1e-12);
    }

    #[test]
    fn test_two_tap_average_known_magnitude() {
        // H(ω) for [0.5, 0.5] has magnitude |cos(ω/2)|
        let taps = [0.5, 0.5];
        for &omega in &[0.0, PI / 4.0, PI / 2.0, 3.0 * PI / 4.0] {
            let mag = response_at(&taps, omega).norm();
            assert!(
                (mag - (omega / 2.0).cos().abs()).abs() < 1e-12,
                "at ω = {omega}: {mag}"
            );
        }
    }

    #[test]
    fn test_grid_shape() {
        let resp = frequency_response(&[1.0], 128);
        assert_eq!(resp.len(), 128);
        assert_eq!(resp[0].0, 0.0);
        assert!(resp[127].0 < 1.0, "grid excludes Nyquist");
        // Unit tap is allpass
        for (_, h) in resp {
            assert!((h.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reference_passband_window() {
        // The same near-DC window the reference design is checked against:
        // gain within [0.9985, 1.001] up to 8 MHz
        let design = reference_design();
        for (f_hz, mag) in magnitude_hz(design.taps(), 8000, 100e6) {
            if f_hz <= 8e6 {
                assert!(
                    (0.9985..=1.001).contains(&mag),
                    "passband gain {mag} at {f_hz} Hz"
                );
            }
        }
    }

    #[test]
    fn test_reference_passband_ripple() {
        // Across the whole passband (up to cutoff − Δ/2) gain stays within
        // the design ripple
        let design = reference_design();
        for (f_hz, mag) in magnitude_hz(design.taps(), 8000, 100e6) {
            if f_hz <= 25e6 {
                assert!(
                    (mag - 1.0).abs() < 2e-3,
                    "passband ripple {mag} at {f_hz} Hz"
                );
            }
        }
    }

    #[test]
    fn test_reference_stopband_attenuation() {
        // Beyond the stopband edge (cutoff + Δ/2 = 45 MHz) the 19-tap
        // design holds ~57-60 dB of attenuation
        let design = reference_design();
        let mut worst = 0.0f64;
        for (f_hz, mag) in magnitude_hz(design.taps(), 8000, 100e6) {
            if f_hz >= 45e6 {
                worst = worst.max(mag);
            }
        }
        assert!(worst > 0.0, "grid must cover the stopband");
        assert!(worst < 2e-3, "stopband leakage {worst}");
    }

    #[test]
    fn test_halfband_transition_midpoint() {
        // Cutoff is the center of the transition band: gain ≈ 0.5 there
        let design = reference_design();
        let omega = PI * 35e6 / 50e6;
        let mag = response_at(design.taps(), omega).norm();
        assert!((mag - 0.5).abs() < 0.01, "gain at cutoff: {mag}");
    }
}
