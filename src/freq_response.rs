//! Frequency-response evaluation of rational transfer functions.
//!
//! Evaluates `H(jω) = B(jω)/A(jω)` directly on the imaginary axis and
//! reports magnitude in dB and unwrapped phase in degrees, the same call
//! contract a linear-systems bode routine exposes.

use crate::filter_bank::TransferFunction;
use crate::types::FrequencyResponse;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Horner evaluation of a descending-power real polynomial at complex `s`.
fn polyval(coeffs: &[f64], s: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Evaluate the response over an increasing angular-frequency grid (rad/s).
pub fn evaluate(tf: &TransferFunction, w: &[f64]) -> FrequencyResponse {
    let mut mag_db = Vec::with_capacity(w.len());
    let mut phase_rad = Vec::with_capacity(w.len());

    for &wi in w {
        let s = Complex64::new(0.0, wi);
        let h = polyval(&tf.num, s) / polyval(&tf.den, s);
        // Clamp before log10 so a perfect notch null stays finite.
        mag_db.push(20.0 * h.norm().max(1e-300).log10());
        phase_rad.push(h.arg());
    }

    unwrap_phase(&mut phase_rad);

    FrequencyResponse {
        w: w.to_vec(),
        mag_db,
        phase_deg: phase_rad.into_iter().map(f64::to_degrees).collect(),
    }
}

/// Remove 2π jumps so the phase curve is continuous across the sweep.
fn unwrap_phase(phase: &mut [f64]) {
    let mut offset = 0.0;
    for i in 1..phase.len() {
        let raw = phase[i];
        let prev_raw = phase[i - 1] - offset;
        let mut delta = raw - prev_raw;
        while delta > PI {
            delta -= 2.0 * PI;
            offset -= 2.0 * PI;
        }
        while delta < -PI {
            delta += 2.0 * PI;
            offset += 2.0 * PI;
        }
        phase[i] = raw + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::logspace;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_first_order_lowpass_corner() {
        // H(s) = 1/(s + 1): unity at DC, −3.01 dB and −45° at ω = 1.
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        let r = evaluate(&tf, &[1e-4, 1.0, 100.0]);
        assert_abs_diff_eq!(r.mag_db[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(r.mag_db[1], 20.0 * (0.5f64.sqrt()).log10(), epsilon = 1e-9);
        assert_abs_diff_eq!(r.phase_deg[1], -45.0, epsilon = 1e-6);
        // One decade per 20 dB rolloff well past the corner.
        assert_abs_diff_eq!(r.mag_db[2], -40.0, epsilon = 0.1);
    }

    #[test]
    fn test_differentiator_phase_lead() {
        // H(s) = s: +90° everywhere, +20 dB per decade.
        let tf = TransferFunction::new(vec![1.0, 0.0], vec![1.0]);
        let r = evaluate(&tf, &[0.1, 1.0, 10.0]);
        for &p in &r.phase_deg {
            assert_abs_diff_eq!(p, 90.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(r.mag_db[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.mag_db[2] - r.mag_db[1], 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_phase_is_unwrapped() {
        // A sharp band-stop sweeps the raw phase through ±180°; after
        // unwrapping, no adjacent pair may jump by more than 180°.
        let tf = TransferFunction::new(
            vec![1.0, 0.0, 142129.0],
            vec![1.0, 38.0, 142129.0],
        );
        let w = logspace(0.0, 6.0, 1000);
        let r = evaluate(&tf, &w);
        for pair in r.phase_deg.windows(2) {
            assert!(
                (pair[1] - pair[0]).abs() <= 180.0,
                "phase jump {:.1}° between adjacent samples",
                (pair[1] - pair[0]).abs()
            );
        }
    }

    #[test]
    fn test_notch_null_stays_finite() {
        // At exactly ω² = 142129 the numerator is a true zero; the dB
        // value must clamp, not produce −inf or NaN.
        let tf = TransferFunction::new(
            vec![1.0, 0.0, 142129.0],
            vec![1.0, 38.0, 142129.0],
        );
        let w0 = 142129.0f64.sqrt();
        let r = evaluate(&tf, &[w0]);
        assert!(r.mag_db[0].is_finite());
        assert!(r.mag_db[0] < -100.0, "null should be far below passband");
    }

    #[test]
    fn test_parallel_array_lengths() {
        let tf = TransferFunction::new(vec![62831.0], vec![1.0, 62831.0]);
        let w = logspace(0.0, 6.0, 1000);
        let r = evaluate(&tf, &w);
        assert_eq!(r.len(), 1000);
        assert_eq!(r.mag_db.len(), r.w.len());
        assert_eq!(r.phase_deg.len(), r.w.len());
    }
}
