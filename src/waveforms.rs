//! The four classroom waveforms, period 2 s, defined piecewise on `[0, 2)`.

use crate::types::SIGNAL_PERIOD;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One of the fixed periodic test signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    /// 1 on [0,1), 0 on [1,2).
    RectPulse,
    /// 4t−2 on [0,1), −4t+6 on [1,2). Even about the period midpoint.
    TrianglePulse,
    /// (2/3)t − 1 over the whole period; jumps at the wrap.
    Ramp,
    /// 1 + sin(2πt) on [0,1), 0 on [1,2).
    RectifiedSine,
}

impl Waveform {
    pub fn label(&self) -> &'static str {
        match self {
            Waveform::RectPulse => "rectangular pulse",
            Waveform::TrianglePulse => "triangular pulse",
            Waveform::Ramp => "ramp",
            Waveform::RectifiedSine => "rectified sinusoid",
        }
    }

    /// Short name used in file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Waveform::RectPulse => "rect",
            Waveform::TrianglePulse => "triangle",
            Waveform::Ramp => "ramp",
            Waveform::RectifiedSine => "rectsine",
        }
    }

    /// Amplitude at time `t` (seconds). Periodic: `t` is wrapped into [0, T).
    pub fn eval(&self, t: f64) -> f64 {
        let t = t.rem_euclid(SIGNAL_PERIOD);
        match self {
            Waveform::RectPulse => {
                if t < 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Waveform::TrianglePulse => {
                if t < 1.0 {
                    4.0 * t - 2.0
                } else {
                    -4.0 * t + 6.0
                }
            }
            Waveform::Ramp => (2.0 / 3.0) * t - 1.0,
            Waveform::RectifiedSine => {
                if t < 1.0 {
                    1.0 + (2.0 * PI * t).sin()
                } else {
                    0.0
                }
            }
        }
    }

    /// Sample the waveform over a time grid.
    pub fn sample(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&ti| self.eval(ti)).collect()
    }
}

/// The study order: A (rect), B (triangle), C (ramp), D (rectified sine).
pub fn classroom_waveforms() -> [Waveform; 4] {
    [
        Waveform::RectPulse,
        Waveform::TrianglePulse,
        Waveform::Ramp,
        Waveform::RectifiedSine,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_pulse_levels() {
        let w = Waveform::RectPulse;
        assert_relative_eq!(w.eval(0.0), 1.0);
        assert_relative_eq!(w.eval(0.999), 1.0);
        assert_relative_eq!(w.eval(1.0), 0.0);
        assert_relative_eq!(w.eval(1.5), 0.0);
    }

    #[test]
    fn test_triangle_corners() {
        let w = Waveform::TrianglePulse;
        assert_relative_eq!(w.eval(0.0), -2.0);
        assert_relative_eq!(w.eval(0.5), 0.0);
        assert_relative_eq!(w.eval(1.0), 2.0);
        assert_relative_eq!(w.eval(1.5), 0.0);
    }

    #[test]
    fn test_triangle_even_about_midpoint() {
        let w = Waveform::TrianglePulse;
        for &t in &[0.1, 0.3, 0.65, 0.9] {
            assert_relative_eq!(w.eval(t), w.eval(SIGNAL_PERIOD - t), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ramp_endpoints() {
        let w = Waveform::Ramp;
        assert_relative_eq!(w.eval(0.0), -1.0);
        assert_relative_eq!(w.eval(1.5), 0.0);
        assert_relative_eq!(w.eval(1.999), 1.0 / 3.0, epsilon = 1e-2);
    }

    #[test]
    fn test_rectified_sine_segment() {
        let w = Waveform::RectifiedSine;
        assert_relative_eq!(w.eval(0.0), 1.0);
        assert_relative_eq!(w.eval(0.25), 2.0);
        assert_relative_eq!(w.eval(0.75), 0.0, epsilon = 1e-12);
        assert_relative_eq!(w.eval(1.5), 0.0);
    }

    #[test]
    fn test_periodic_wrap() {
        for w in classroom_waveforms() {
            for &t in &[0.1, 0.6, 1.2, 1.9] {
                assert_relative_eq!(w.eval(t), w.eval(t + SIGNAL_PERIOD), epsilon = 1e-9);
                assert_relative_eq!(w.eval(t), w.eval(t - SIGNAL_PERIOD), epsilon = 1e-9);
            }
        }
    }
}
