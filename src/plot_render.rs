//! PNG figure rendering via plotters.
//!
//! Layouts mirror the console study order: a two-panel reconstruction /
//! spectrum figure per (waveform, N) pair, and a stacked magnitude /
//! phase figure per filter with the -3 dB threshold and cutoffs marked.

use crate::study::{FilterAnalysis, TermRun, WaveformAnalysis};
use crate::types::{SIGNAL_PERIOD, SPECTRUM_MAX_HZ};
use plotters::prelude::*;
use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;

const NAVY: RGBColor = RGBColor(0, 0, 128);
const ORANGE: RGBColor = RGBColor(255, 140, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else {
        (lo, hi)
    }
}

/// Pad a range by 10% on each side (with a floor for flat data).
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = (hi - lo).max(1e-3);
    (lo - 0.1 * span, hi + 0.1 * span)
}

/// Render one (waveform, N) pair: reconstruction on the left, compact
/// spectrum stems on the right.
pub fn render_fourier_figure(
    analysis: &WaveformAnalysis,
    run: &TermRun,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(700);

    // ── Reconstruction vs original ──
    let (lo, hi) = bounds(
        analysis
            .samples
            .iter()
            .chain(&run.reconstruction)
            .copied(),
    );
    let (y_lo, y_hi) = padded(lo, hi);

    let mut chart = ChartBuilder::on(&left)
        .caption(
            format!("{} — {} terms", analysis.waveform.label(), run.n_terms),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..SIGNAL_PERIOD, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .x_desc("time (s)")
        .y_desc("amplitude")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            analysis.t.iter().zip(&analysis.samples).map(|(&x, &y)| (x, y)),
            BLUE.stroke_width(2),
        ))?
        .label("original")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart
        .draw_series(LineSeries::new(
            analysis
                .t
                .iter()
                .zip(&run.reconstruction)
                .map(|(&x, &y)| (x, y)),
            RED.stroke_width(1),
        ))?
        .label(format!("{} terms", run.n_terms))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    // ── Compact spectrum stems ──
    let stems: Vec<(f64, f64)> = run
        .spectrum
        .cn
        .iter()
        .enumerate()
        .map(|(k, &c)| ((k + 1) as f64 / SIGNAL_PERIOD, c))
        .filter(|&(f, _)| f <= SPECTRUM_MAX_HZ)
        .collect();
    let c_max = stems.iter().map(|&(_, c)| c).fold(0.0f64, f64::max).max(1e-3);

    let mut spectrum = ChartBuilder::on(&right)
        .caption("compact spectrum |C_n|", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..SPECTRUM_MAX_HZ, 0.0..c_max * 1.1)?;
    spectrum
        .configure_mesh()
        .x_desc("frequency (Hz)")
        .y_desc("|C_n|")
        .draw()?;
    spectrum.draw_series(
        stems
            .iter()
            .map(|&(f, c)| PathElement::new(vec![(f, 0.0), (f, c)], &PURPLE)),
    )?;
    spectrum.draw_series(
        stems
            .iter()
            .map(|&(f, c)| Circle::new((f, c), 3, PURPLE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Render one filter: magnitude with threshold/cutoff markers on top,
/// phase below. Frequency axes are log-scaled, in Hz.
pub fn render_bode_figure(analysis: &FilterAnalysis, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1000, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let (top, bottom) = root.split_vertically(350);

    let resp = &analysis.response;
    let f: Vec<f64> = resp.w.iter().map(|&w| w / (2.0 * PI)).collect();
    let f_lo = f[0];
    let f_hi = *f.last().unwrap();

    // Deep notch nulls would squash the axis; keep the window at 100 dB.
    let peak = resp.peak_db();
    let (m_lo, m_hi) = bounds(resp.mag_db.iter().copied());
    let m_lo = m_lo.max(peak - 100.0);
    let (m_lo, m_hi) = padded(m_lo, m_hi);

    let mut mag = ChartBuilder::on(&top)
        .caption(
            format!(
                "H(s) {} — {} [{}]",
                analysis.index,
                analysis.detected_kind,
                analysis.formula
            ),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((f_lo..f_hi).log_scale(), m_lo..m_hi)?;
    mag.configure_mesh()
        .x_desc("frequency (Hz)")
        .y_desc("magnitude (dB)")
        .draw()?;
    mag.draw_series(LineSeries::new(
        f.iter().zip(&resp.mag_db).map(|(&x, &y)| (x, y)),
        NAVY.stroke_width(2),
    ))?
    .label("magnitude")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], NAVY.stroke_width(2)));

    // Threshold line plus one vertical marker per interpolated cutoff.
    mag.draw_series(std::iter::once(PathElement::new(
        vec![(f_lo, analysis.threshold_db), (f_hi, analysis.threshold_db)],
        &ORANGE,
    )))?
    .label(format!("{:.2} dB threshold", analysis.threshold_db))
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));
    for &fc in &analysis.cutoffs_hz {
        mag.draw_series(std::iter::once(PathElement::new(
            vec![(fc, m_lo), (fc, analysis.threshold_db)],
            &ORANGE,
        )))?;
        mag.draw_series(std::iter::once(Circle::new(
            (fc, analysis.threshold_db),
            4,
            ORANGE.filled(),
        )))?;
    }
    mag.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    let (p_lo, p_hi) = bounds(resp.phase_deg.iter().copied());
    let (p_lo, p_hi) = padded(p_lo, p_hi);
    let mut phase = ChartBuilder::on(&bottom)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((f_lo..f_hi).log_scale(), p_lo..p_hi)?;
    phase
        .configure_mesh()
        .x_desc("frequency (Hz)")
        .y_desc("phase (deg)")
        .draw()?;
    phase.draw_series(LineSeries::new(
        f.iter().zip(&resp.phase_deg).map(|(&x, &y)| (x, y)),
        DARK_GREEN.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
