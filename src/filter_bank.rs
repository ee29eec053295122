//! The seven classroom transfer functions, hardcoded with their filter kinds.

use crate::types::FilterKind;
use serde::{Deserialize, Serialize};

/// Rational transfer function in the Laplace variable.
///
/// Coefficients are real, in descending power order:
/// `H(s) = (num[0]·s^M + … + num[M]) / (den[0]·s^N + … + den[N])`.
/// Fixed at construction; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferFunction {
    pub num: Vec<f64>,
    pub den: Vec<f64>,
}

impl TransferFunction {
    pub fn new(num: Vec<f64>, den: Vec<f64>) -> Self {
        debug_assert!(!num.is_empty() && !den.is_empty());
        Self { num, den }
    }

    /// Filter order: the larger of the two polynomial degrees.
    pub fn order(&self) -> usize {
        (self.num.len().max(self.den.len())).saturating_sub(1)
    }
}

/// Product of two descending-power polynomials (coefficient convolution).
pub fn convolve(p: &[f64], q: &[f64]) -> Vec<f64> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        for (j, &qj) in q.iter().enumerate() {
            out[i + j] += pi * qj;
        }
    }
    out
}

/// One catalog entry: the transfer function, a printable formula, and the
/// filter kind it is known to realize.
#[derive(Debug, Clone)]
pub struct FilterEntry {
    pub tf: TransferFunction,
    pub formula: &'static str,
    pub kind: FilterKind,
}

/// The seven fixed filters, in study order.
pub fn classroom_filter_bank() -> Vec<FilterEntry> {
    // The notch biquad squared (entry 7) is built by coefficient convolution.
    let notch_num = [1.0, 0.0, 142129.0];
    let notch_den = [1.0, 38.0, 142129.0];

    vec![
        FilterEntry {
            tf: TransferFunction::new(vec![62831.0], vec![1.0, 62831.0]),
            formula: "62831 / (s + 62831)",
            kind: FilterKind::LowPass,
        },
        FilterEntry {
            tf: TransferFunction::new(vec![3947840.0], vec![1.0, 889.0, 394784.0]),
            formula: "3947840 / (s² + 889s + 394784)",
            kind: FilterKind::LowPass,
        },
        FilterEntry {
            tf: TransferFunction::new(vec![1.0, 0.0], vec![1.0, 942.0]),
            formula: "s / (s + 942)",
            kind: FilterKind::HighPass,
        },
        FilterEntry {
            tf: TransferFunction::new(
                vec![1.0, 0.0, 0.0, 0.0],
                vec![1.0, 37.7, 710.6, 6690.0],
            ),
            formula: "s³ / (s³ + 37.7s² + 710.6s + 6690)",
            kind: FilterKind::HighPass,
        },
        FilterEntry {
            tf: TransferFunction::new(vec![626126.0, 0.0], vec![1.0, 626126.0, 394784176.0]),
            formula: "626126s / (s² + 626126s + 394784176)",
            kind: FilterKind::BandPass,
        },
        FilterEntry {
            tf: TransferFunction::new(
                vec![1.0, 0.0, 395477191.0],
                vec![1.0, 625900.0, 395477191.0],
            ),
            formula: "(s² + 395477191) / (s² + 625900s + 395477191)",
            kind: FilterKind::BandStop,
        },
        FilterEntry {
            tf: TransferFunction::new(
                convolve(&notch_num, &notch_num),
                convolve(&notch_den, &notch_den),
            ),
            formula: "((s² + 142129) / (s² + 38s + 142129))²",
            kind: FilterKind::BandStop,
        },
    ]
}
