//! Runs the two studies end to end and collects their results.
//!
//! Everything here is deterministic and synchronous: each (waveform,
//! term-count) pair and each filter is processed independently over the
//! hardcoded catalogs, producing result structs consumed by the console
//! report, the plot renderer, and the data exporter.

use crate::cutoff;
use crate::filter_bank::{classroom_filter_bank, TransferFunction};
use crate::fourier;
use crate::freq_response;
use crate::sweep;
use crate::types::*;
use crate::waveforms::{classroom_waveforms, Waveform};
use log::{debug, info, warn};
use std::f64::consts::PI;

// ─── Fourier study ──────────────────────────────────────────────────────────

/// One waveform approximated at a single term count.
#[derive(Debug, Clone)]
pub struct TermRun {
    pub n_terms: usize,
    pub coefficients: FourierCoefficients,
    pub spectrum: CompactSpectrum,
    pub reconstruction: Vec<f64>,
    pub mse: f64,
}

/// One waveform analyzed at every configured term count.
#[derive(Debug, Clone)]
pub struct WaveformAnalysis {
    pub waveform: Waveform,
    pub t: Vec<f64>,
    pub samples: Vec<f64>,
    pub runs: Vec<TermRun>,
}

impl WaveformAnalysis {
    /// The run at the largest term count (the one tabulated on the console).
    pub fn final_run(&self) -> &TermRun {
        self.runs
            .iter()
            .max_by_key(|r| r.n_terms)
            .expect("term-count table is non-empty")
    }
}

pub fn run_fourier_study() -> Vec<WaveformAnalysis> {
    let t = sweep::time_grid(SIGNAL_PERIOD, SIGNAL_DT);

    classroom_waveforms()
        .into_iter()
        .map(|waveform| {
            let samples = waveform.sample(&t);
            let runs: Vec<TermRun> = TERM_COUNTS
                .iter()
                .map(|&n_terms| {
                    let coefficients = fourier::estimate(&samples, &t, SIGNAL_PERIOD, n_terms);
                    let spectrum = fourier::compact(&coefficients);
                    let reconstruction = fourier::reconstruct(&coefficients, &t, SIGNAL_PERIOD);
                    let mse = fourier::mean_squared_error(&samples, &reconstruction);
                    debug!(
                        "fourier: {} N={:<3} a0={:+.4} mse={:.3e}",
                        waveform.label(),
                        n_terms,
                        coefficients.a0,
                        mse
                    );
                    TermRun {
                        n_terms,
                        coefficients,
                        spectrum,
                        reconstruction,
                        mse,
                    }
                })
                .collect();

            info!(
                "fourier: {} analyzed at N={:?}, final mse={:.3e}",
                waveform.label(),
                TERM_COUNTS,
                runs.last().map(|r| r.mse).unwrap_or(f64::NAN)
            );
            WaveformAnalysis {
                waveform,
                t: t.clone(),
                samples,
                runs,
            }
        })
        .collect()
}

// ─── Bode study ─────────────────────────────────────────────────────────────

/// One filter's frequency response, cutoffs, and classification.
#[derive(Debug, Clone)]
pub struct FilterAnalysis {
    /// 1-based position in the bank, used in titles ("H(s) 1").
    pub index: usize,
    pub formula: &'static str,
    pub tf: TransferFunction,
    pub expected_kind: FilterKind,
    pub detected_kind: FilterKind,
    pub response: FrequencyResponse,
    pub threshold_db: f64,
    pub cutoffs_rad: Vec<f64>,
    pub cutoffs_hz: Vec<f64>,
}

pub fn run_bode_study() -> Vec<FilterAnalysis> {
    let w = sweep::logspace(BODE_DECADE_LO, BODE_DECADE_HI, BODE_POINTS);

    classroom_filter_bank()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let index = i + 1;
            let response = freq_response::evaluate(&entry.tf, &w);
            let threshold_db = response.peak_db() - CUTOFF_DROP_DB;
            let cutoffs_rad =
                cutoff::cutoff_frequencies(&response.w, &response.mag_db, threshold_db);
            let cutoffs_hz: Vec<f64> = cutoffs_rad.iter().map(|wc| wc / (2.0 * PI)).collect();
            let detected_kind = cutoff::classify(&response, threshold_db);

            if detected_kind != entry.kind {
                warn!(
                    "bode: H(s) {} labeled {} but magnitude curve reads as {}",
                    index, entry.kind, detected_kind
                );
            }
            info!(
                "bode: H(s) {} [{}] — {} cutoff(s): {:?} Hz",
                index,
                detected_kind,
                cutoffs_hz.len(),
                cutoffs_hz
                    .iter()
                    .map(|f| format!("{:.2}", f))
                    .collect::<Vec<_>>()
            );

            FilterAnalysis {
                index,
                formula: entry.formula,
                tf: entry.tf,
                expected_kind: entry.kind,
                detected_kind,
                response,
                threshold_db,
                cutoffs_rad,
                cutoffs_hz,
            }
        })
        .collect()
}
