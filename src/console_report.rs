//! Plain-stdout report: the per-waveform coefficient table and the Bode
//! summary, rendered as fixed-width box-drawing tables.

use crate::study::{FilterAnalysis, WaveformAnalysis};

/// Print the coefficient table for a waveform at its largest term count.
///
/// The DC row is listed as `n = 0` with `C_0 = a0/2` and zero phase.
pub fn print_coefficient_table(analysis: &WaveformAnalysis) {
    let run = analysis.final_run();
    let c = &run.coefficients;
    let s = &run.spectrum;

    println!(
        "Coefficient table — {} (N = {}):",
        analysis.waveform.label(),
        run.n_terms
    );
    println!("┌───────┬────────────┬────────────┬────────────┬────────────┐");
    println!(
        "│ {:>5} │ {:>10} │ {:>10} │ {:>10} │ {:>10} │",
        "n", "a_n", "b_n", "C_n", "θ_n (rad)"
    );
    println!("├───────┼────────────┼────────────┼────────────┼────────────┤");
    println!(
        "│ {:>5} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │",
        0,
        c.a0,
        0.0,
        c.a0 / 2.0,
        0.0
    );
    for n in 1..=run.n_terms {
        println!(
            "│ {:>5} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │",
            n,
            c.an[n - 1],
            c.bn[n - 1],
            s.cn[n - 1],
            s.theta[n - 1]
        );
    }
    println!("└───────┴────────────┴────────────┴────────────┴────────────┘");
    println!();
}

/// Print one summary row per filter: detected/catalog kind, the -3 dB
/// threshold, and every interpolated cutoff in Hz.
pub fn print_bode_summary(analyses: &[FilterAnalysis]) {
    println!("Bode summary ({} filters):", analyses.len());
    println!("┌──────┬───────────┬───────────┬───────────┬──────────────────────────────┐");
    println!(
        "│ {:>4} │ {:<9} │ {:<9} │ {:>9} │ {:<28} │",
        "H(s)", "detected", "catalog", "thr (dB)", "cutoffs (Hz)"
    );
    println!("├──────┼───────────┼───────────┼───────────┼──────────────────────────────┤");
    for a in analyses {
        let cutoffs = if a.cutoffs_hz.is_empty() {
            "—".to_string()
        } else {
            a.cutoffs_hz
                .iter()
                .map(|f| format!("{:.2}", f))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "│ {:>4} │ {:<9} │ {:<9} │ {:>9.2} │ {:<28.28} │",
            a.index,
            a.detected_kind.as_str(),
            a.expected_kind.as_str(),
            a.threshold_db,
            cutoffs
        );
    }
    println!("└──────┴───────────┴───────────┴───────────┴──────────────────────────────┘");
    for a in analyses {
        println!("  H(s) {} = {}", a.index, a.formula);
    }
    println!();
}
