use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Fourier study ──────────────────────────────────────────────────────────

/// Trigonometric-form Fourier coefficients for one (waveform, N) pair.
///
/// `an[k]` and `bn[k]` hold the harmonic `n = k + 1`; the DC term is `a0`.
/// Computed fresh per pair by `fourier::estimate` and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourierCoefficients {
    pub a0: f64,
    pub an: Vec<f64>,
    pub bn: Vec<f64>,
}

impl FourierCoefficients {
    pub fn n_terms(&self) -> usize {
        self.an.len()
    }
}

/// Compact (magnitude/phase) form of a coefficient set.
///
/// `cn[k] = sqrt(an² + bn²)`, `theta[k] = atan2(bn, an)` in radians.
/// `cn` is never negative; it is zero exactly when both inputs are zero,
/// in which case `theta` is zero by the atan2 origin convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompactSpectrum {
    pub cn: Vec<f64>,
    pub theta: Vec<f64>,
}

// ─── Bode study ─────────────────────────────────────────────────────────────

/// Magnitude/phase response of one transfer function over a frequency sweep.
///
/// Parallel arrays: `w` is the strictly increasing rad/s grid, `mag_db` is
/// `20·log10|H(jω)|`, `phase_deg` is the unwrapped phase in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResponse {
    pub w: Vec<f64>,
    pub mag_db: Vec<f64>,
    pub phase_deg: Vec<f64>,
}

impl FrequencyResponse {
    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// Peak magnitude over the sweep, in dB.
    pub fn peak_db(&self) -> f64 {
        self.mag_db.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Classical filter shapes, as printed on reports and figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::LowPass => "low-pass",
            FilterKind::HighPass => "high-pass",
            FilterKind::BandPass => "band-pass",
            FilterKind::BandStop => "band-stop",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Constants ──────────────────────────────────────────────────────────────

/// Waveform period (seconds).
pub const SIGNAL_PERIOD: f64 = 2.0;

/// Time-grid step (seconds) — 2000 samples per period.
pub const SIGNAL_DT: f64 = 0.001;

/// Term counts each waveform is approximated with, in run order.
pub const TERM_COUNTS: [usize; 6] = [3, 5, 10, 25, 50, 100];

/// Upper frequency bound (Hz) shown on spectrum panels.
pub const SPECTRUM_MAX_HZ: f64 = 25.0;

/// Bode sweep: log10 of the first and last angular frequency (rad/s).
pub const BODE_DECADE_LO: f64 = 0.0;
pub const BODE_DECADE_HI: f64 = 6.0;

/// Bode sweep sample count.
pub const BODE_POINTS: usize = 1000;

/// Cutoff threshold distance below the magnitude peak, in dB.
pub const CUTOFF_DROP_DB: f64 = 3.0;
