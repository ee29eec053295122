//! Sampling-grid helpers shared by both studies.

/// `n` uniformly spaced samples covering `[start, stop]` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// `n` logarithmically spaced samples: `10^x` with `x` uniform in
/// `[start_exp, stop_exp]`. Strictly increasing when `start_exp < stop_exp`.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, n)
        .into_iter()
        .map(|x| 10f64.powf(x))
        .collect()
}

/// Left-closed uniform time grid over one period: samples at `0, dt, 2dt, …`
/// strictly below `period`. The endpoint is excluded so that summing
/// `x[i]·dt` over the grid is a left Riemann sum of one full period.
pub fn time_grid(period: f64, dt: f64) -> Vec<f64> {
    assert!(dt > 0.0, "time grid step must be positive");
    let n = (period / dt).floor() as usize;
    (0..n).map(|i| i as f64 * dt).collect()
}
