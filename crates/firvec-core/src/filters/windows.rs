//! Kaiser Window for FIR Filter Design
//!
//! The Kaiser window trades main-lobe width against sidelobe attenuation via
//! a single shape parameter β, which makes it the natural choice when the
//! design starts from a ripple/transition-width specification: both β and
//! the required filter length follow from the spec in closed form.

use std::f64::consts::PI;

/// Generate a Kaiser window with shape parameter β.
///
/// `w[n] = I0(β·sqrt(1 − ((n − M/2)/(M/2))²)) / I0(β)` with `M = length − 1`.
///
/// - β = 0: rectangular window
/// - β ≈ 5.65: ~60 dB sidelobe suppression
/// - β > 10: very low sidelobes
pub fn kaiser_window(length: usize, beta: f64) -> Vec<f64> {
    if length == 0 {
        return vec![];
    }
    if length == 1 {
        // Degenerate window; also avoids the 0/0 at the center expression
        return vec![1.0];
    }

    let half = (length - 1) as f64 / 2.0;
    let i0_beta = bessel_i0(beta);

    (0..length)
        .map(|n| {
            let x = (n as f64 - half) / half;
            bessel_i0(beta * (1.0 - x * x).sqrt()) / i0_beta
        })
        .collect()
}

/// Kaiser β parameter from desired stopband attenuation.
///
/// Standard piecewise rule: above 50 dB, `0.1102·(A − 8.7)`; between 21 and
/// 50 dB, `0.5842·(A − 21)^0.4 + 0.07886·(A − 21)`; below 21 dB a
/// rectangular window already suffices.
pub fn kaiser_beta(attenuation_db: f64) -> f64 {
    if attenuation_db > 50.0 {
        0.1102 * (attenuation_db - 8.7)
    } else if attenuation_db >= 21.0 {
        0.5842 * (attenuation_db - 21.0).powf(0.4) + 0.07886 * (attenuation_db - 21.0)
    } else {
        0.0
    }
}

/// Minimal odd tap count for a Kaiser design.
///
/// `transition_width` is normalized to Nyquist (0 to 1). The estimate
/// `(A − 8) / (2.285·π·Δ)` is rounded up and forced odd so the filter has a
/// single well-defined integer-sample group delay and linear phase.
pub fn kaiser_length(transition_width: f64, attenuation_db: f64) -> usize {
    let est = (attenuation_db - 8.0) / (2.285 * PI * transition_width);
    let n = est.ceil().max(1.0) as usize;
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

/// Modified Bessel function of the first kind, order 0.
///
/// Abramowitz & Stegun polynomial for |x| < 3.75 and asymptotic expansion
/// beyond; relative error is below 1e-7 over the β range used here (0–10).
pub fn bessel_i0(x: f64) -> f64 {
    let ax = x.abs();

    if ax < 3.75 {
        let t = (x / 3.75).powi(2);
        1.0 + t
            * (3.5156229
                + t * (3.0899424
                    + t * (1.2067492 + t * (0.2659732 + t * (0.0360768 + t * 0.0045813)))))
    } else {
        let t = 3.75 / ax;
        (ax.exp() / ax.sqrt())
            * (0.39894228
                + t * (0.01328592
                    + t * (0.00225319
                        + t * (-0.00157565
                            + t * (0.00916281
                                + t * (-0.02057706
                                    + t * (0.02635537 + t * (-0.01647633 + t * 0.00392377))))))))
    }
}
