//! Truncated Fourier-series estimation over one sampled period.
//!
//! Coefficients come from left-Riemann-sum approximations of the analysis
//! integrals; accuracy scales with grid density and there is no adaptive
//! refinement. All functions are total for finite input.

use crate::types::{CompactSpectrum, FourierCoefficients};
use std::f64::consts::PI;

/// Estimate `{a0, an, bn}` for `n = 1..=n_terms` from samples `x` taken at
/// times `t` spanning one period.
///
///   a0 = (2/T) Σ x[i]·dt
///   an = (2/T) Σ x[i]·cos(2πn·t[i]/T)·dt
///   bn = (2/T) Σ x[i]·sin(2πn·t[i]/T)·dt
pub fn estimate(x: &[f64], t: &[f64], period: f64, n_terms: usize) -> FourierCoefficients {
    debug_assert_eq!(x.len(), t.len());
    debug_assert!(n_terms >= 1, "need at least one harmonic");

    // Uniform grid spacing; a single-sample grid degenerates to the period.
    let dt = if t.len() > 1 { t[1] - t[0] } else { period };
    let scale = 2.0 / period * dt;

    let a0 = scale * x.iter().sum::<f64>();

    let mut an = Vec::with_capacity(n_terms);
    let mut bn = Vec::with_capacity(n_terms);
    for n in 1..=n_terms {
        let wn = 2.0 * PI * n as f64 / period;
        let mut cos_sum = 0.0;
        let mut sin_sum = 0.0;
        for (&xi, &ti) in x.iter().zip(t) {
            let (s, c) = (wn * ti).sin_cos();
            cos_sum += xi * c;
            sin_sum += xi * s;
        }
        an.push(scale * cos_sum);
        bn.push(scale * sin_sum);
    }

    FourierCoefficients { a0, an, bn }
}

/// Element-wise compact form: `cn = sqrt(an² + bn²)`, `theta = atan2(bn, an)`.
pub fn compact(coeffs: &FourierCoefficients) -> CompactSpectrum {
    let cn = coeffs
        .an
        .iter()
        .zip(&coeffs.bn)
        .map(|(&a, &b)| (a * a + b * b).sqrt())
        .collect();
    let theta = coeffs
        .an
        .iter()
        .zip(&coeffs.bn)
        .map(|(&a, &b)| b.atan2(a))
        .collect();
    CompactSpectrum { cn, theta }
}

/// Rebuild the signal on the grid:
/// `x̂[i] = a0/2 + Σ an·cos(2πn·t[i]/T) + bn·sin(2πn·t[i]/T)`.
///
/// Near discontinuities the partial sum overshoots (Gibbs); that is a
/// property of the series, not an estimation defect.
pub fn reconstruct(coeffs: &FourierCoefficients, t: &[f64], period: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| {
            let mut acc = coeffs.a0 / 2.0;
            for (k, (&a, &b)) in coeffs.an.iter().zip(&coeffs.bn).enumerate() {
                let arg = 2.0 * PI * (k + 1) as f64 * ti / period;
                let (s, c) = arg.sin_cos();
                acc += a * c + b * s;
            }
            acc
        })
        .collect()
}

/// Mean squared error between two equal-length sample arrays.
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return 0.0;
    }
    let sum: f64 = a.iter().zip(b).map(|(&x, &y)| (x - y) * (x - y)).sum();
    sum / a.len() as f64
}
