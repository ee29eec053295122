//! Opt-in JSON export of study results: a manifest describing the fixed
//! parameter tables plus one results file per study.

use crate::study::{FilterAnalysis, WaveformAnalysis};
use crate::types::*;
use log::info;
use serde_json::json;
use std::fs;
use std::io;
use std::path::Path;

fn write_pretty(path: &Path, value: &serde_json::Value) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, text)
}

/// Write `manifest.json`, and `fourier.json` / `bode.json` for whichever
/// studies ran. Creates the output directory if needed.
pub fn export(
    dir: &Path,
    fourier: Option<&[WaveformAnalysis]>,
    bode: Option<&[FilterAnalysis]>,
) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let manifest = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "system": "sigbench",
        "signal_config": {
            "period_s": SIGNAL_PERIOD,
            "dt_s": SIGNAL_DT,
            "term_counts": TERM_COUNTS,
        },
        "sweep_config": {
            "decade_lo": BODE_DECADE_LO,
            "decade_hi": BODE_DECADE_HI,
            "points": BODE_POINTS,
            "cutoff_drop_db": CUTOFF_DROP_DB,
        },
    });
    write_pretty(&dir.join("manifest.json"), &manifest)?;

    if let Some(analyses) = fourier {
        let value = json!(analyses
            .iter()
            .map(|a| {
                json!({
                    "waveform": a.waveform.label(),
                    "runs": a.runs.iter().map(|r| {
                        json!({
                            "n_terms": r.n_terms,
                            "a0": r.coefficients.a0,
                            "an": r.coefficients.an,
                            "bn": r.coefficients.bn,
                            "cn": r.spectrum.cn,
                            "theta": r.spectrum.theta,
                            "mse": r.mse,
                        })
                    }).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>());
        write_pretty(&dir.join("fourier.json"), &value)?;
    }

    if let Some(analyses) = bode {
        let value = json!(analyses
            .iter()
            .map(|a| {
                json!({
                    "index": a.index,
                    "formula": a.formula,
                    "num": a.tf.num,
                    "den": a.tf.den,
                    "expected_kind": a.expected_kind,
                    "detected_kind": a.detected_kind,
                    "threshold_db": a.threshold_db,
                    "cutoffs_rad_s": a.cutoffs_rad,
                    "cutoffs_hz": a.cutoffs_hz,
                })
            })
            .collect::<Vec<_>>());
        write_pretty(&dir.join("bode.json"), &value)?;
    }

    info!("Results exported → {:?}", dir);
    Ok(())
}
