//! End-to-end tests over the two study pipelines.
//!
//! These run the full catalogs the binary runs — waveform table →
//! coefficient estimation → reconstruction, and filter bank → frequency
//! response → cutoff estimation → classification — and assert the
//! numerical properties the studies are built to demonstrate.

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sigbench::study::{run_bode_study, run_fourier_study, FilterAnalysis, WaveformAnalysis};
use sigbench::types::{FilterKind, CUTOFF_DROP_DB, TERM_COUNTS};
use sigbench::waveforms::Waveform;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn fourier_analysis(waveform: Waveform) -> WaveformAnalysis {
    run_fourier_study()
        .into_iter()
        .find(|a| a.waveform == waveform)
        .expect("waveform present in study")
}

fn bode_analysis(index: usize) -> FilterAnalysis {
    run_bode_study()
        .into_iter()
        .find(|a| a.index == index)
        .expect("filter present in bank")
}

// ─── Fourier study ─────────────────────────────────────────────────────────

#[test]
fn test_fourier_study_covers_all_term_counts() {
    let analyses = run_fourier_study();
    assert_eq!(analyses.len(), 4, "four classroom waveforms");
    for a in &analyses {
        let counts: Vec<usize> = a.runs.iter().map(|r| r.n_terms).collect();
        assert_eq!(counts, TERM_COUNTS.to_vec());
        for r in &a.runs {
            assert_eq!(r.coefficients.n_terms(), r.n_terms);
            assert_eq!(r.spectrum.cn.len(), r.n_terms);
            assert_eq!(r.reconstruction.len(), a.t.len());
        }
    }
}

#[test]
fn test_rect_pulse_dc_and_harmonic_pattern() {
    let a = fourier_analysis(Waveform::RectPulse);
    let run = a.runs.iter().find(|r| r.n_terms == 3).unwrap();
    let c = &run.coefficients;

    // Period average is 0.5, so a0 = 1.
    assert_relative_eq!(c.a0, 1.0, epsilon = 1e-9);
    // Cosine terms vanish; sine terms are 2/(nπ) for odd n, 0 for even.
    assert_abs_diff_eq!(c.an[0], 0.0, epsilon = 5e-3);
    assert_abs_diff_eq!(c.bn[0], 2.0 / PI, epsilon = 5e-3);
    assert_abs_diff_eq!(c.bn[1], 0.0, epsilon = 5e-3);
    assert_abs_diff_eq!(c.bn[2], 2.0 / (3.0 * PI), epsilon = 5e-3);
}

#[test]
fn test_even_waveform_has_cosine_only_spectrum() {
    let a = fourier_analysis(Waveform::TrianglePulse);
    let c = &a.final_run().coefficients;
    for &b in &c.bn {
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-2);
    }
}

#[test]
fn test_reconstruction_error_shrinks_with_terms() {
    // Continuous waveform: the truncation error must fall at every step
    // of the term-count table.
    let a = fourier_analysis(Waveform::TrianglePulse);
    for pair in a.runs.windows(2) {
        assert!(
            pair[1].mse < pair[0].mse,
            "MSE rose from {:.3e} (N={}) to {:.3e} (N={})",
            pair[0].mse,
            pair[0].n_terms,
            pair[1].mse,
            pair[1].n_terms
        );
    }

    // Discontinuous waveforms converge too, just slower (Gibbs residue).
    let a = fourier_analysis(Waveform::RectPulse);
    let first = a.runs.first().unwrap().mse;
    let last = a.runs.last().unwrap().mse;
    assert!(last < first, "MSE {:.3e} → {:.3e} should shrink", first, last);
}

#[test]
fn test_compact_magnitudes_nonnegative_everywhere() {
    for a in run_fourier_study() {
        for r in &a.runs {
            for (k, &cn) in r.spectrum.cn.iter().enumerate() {
                assert!(cn >= 0.0, "{} C_{} = {}", a.waveform.label(), k + 1, cn);
                if cn == 0.0 {
                    assert_eq!(r.coefficients.an[k], 0.0);
                    assert_eq!(r.coefficients.bn[k], 0.0);
                }
            }
        }
    }
}

#[test]
fn test_ramp_dc_term_is_negative_third() {
    // (2/3)t − 1 over [0,2) averages to −1/3, so a0 = −2/3.
    let a = fourier_analysis(Waveform::Ramp);
    let c = &a.final_run().coefficients;
    assert_abs_diff_eq!(c.a0, -2.0 / 3.0, epsilon = 1e-3);
}

// ─── Bode study ────────────────────────────────────────────────────────────

#[test]
fn test_bode_study_covers_the_bank() {
    let analyses = run_bode_study();
    assert_eq!(analyses.len(), 7, "seven classroom filters");
    for a in &analyses {
        assert_eq!(a.response.len(), a.response.mag_db.len());
        assert!(
            a.threshold_db <= a.response.peak_db(),
            "threshold sits {} dB below the peak",
            CUTOFF_DROP_DB
        );
        // Cutoffs are reported in ascending frequency order.
        assert!(a.cutoffs_rad.windows(2).all(|p| p[1] > p[0]));
        for (&wc, &hz) in a.cutoffs_rad.iter().zip(&a.cutoffs_hz) {
            assert_relative_eq!(hz, wc / (2.0 * PI), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_first_order_lowpass_cutoff_near_corner() {
    // H(s) 1 = 62831/(s + 62831): the −3 dB point sits at the corner
    // frequency (10 kHz), modulo the sweep's interpolation error.
    let a = bode_analysis(1);
    assert_eq!(a.detected_kind, FilterKind::LowPass);
    assert_eq!(a.cutoffs_rad.len(), 1);
    assert_relative_eq!(a.cutoffs_rad[0], 62831.0, max_relative = 0.02);
    assert_relative_eq!(a.cutoffs_hz[0], 10_000.0, max_relative = 0.02);
}

#[test]
fn test_highpass_differentiator_shape() {
    // H(s) 3 = s/(s + 942): attenuated at DC, flat at the top.
    let a = bode_analysis(3);
    assert_eq!(a.detected_kind, FilterKind::HighPass);
    assert_eq!(a.cutoffs_rad.len(), 1);
    assert_relative_eq!(a.cutoffs_rad[0], 942.0, max_relative = 0.02);
    assert!(a.response.mag_db[0] < a.threshold_db - 20.0);
}

#[test]
fn test_bandpass_reports_two_cutoffs() {
    let a = bode_analysis(5);
    assert_eq!(a.detected_kind, FilterKind::BandPass);
    assert_eq!(
        a.cutoffs_rad.len(),
        2,
        "band edges on both sides of the peak"
    );
    let center = 394784176.0f64.sqrt();
    assert!(a.cutoffs_rad[0] < center && center < a.cutoffs_rad[1]);
}

#[test]
fn test_bandstop_notch_reports_two_cutoffs() {
    let a = bode_analysis(6);
    assert_eq!(a.detected_kind, FilterKind::BandStop);
    assert_eq!(a.cutoffs_rad.len(), 2);
    let notch = 395477191.0f64.sqrt();
    assert!(a.cutoffs_rad[0] < notch && notch < a.cutoffs_rad[1]);
}

#[test]
fn test_classifier_agrees_with_catalog_labels() {
    for a in run_bode_study() {
        assert_eq!(
            a.detected_kind, a.expected_kind,
            "H(s) {} [{}] classified as {}",
            a.index, a.expected_kind, a.detected_kind
        );
    }
}

#[test]
fn test_phase_curves_are_unwrapped() {
    // After unwrapping, adjacent samples may differ by at most a half
    // turn (a sharp notch legitimately sweeps nearly 180° between
    // neighboring grid points, but never more).
    for a in run_bode_study() {
        for pair in a.response.phase_deg.windows(2) {
            assert!(
                (pair[1] - pair[0]).abs() <= 180.0,
                "H(s) {}: phase jump of {:.1}°",
                a.index,
                (pair[1] - pair[0]).abs()
            );
        }
    }
}
