// File: crates/chart-core/src/indicator.rs
// Summary: Simple moving averages over closing prices, index-aligned with the input bars.

use crate::series::MarketBar;

/// Round to 2 decimals, half away from zero (half-up for positive prices).
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// SMA over a close series, same length as `closes`.
///
/// Entry `i` is the mean of `closes[i + 1 - window..=i]` rounded with [`round2`],
/// or `None` while fewer than `window` values exist. A zero window yields all `None`.
/// Each window is summed from scratch, so a `NaN` only affects the windows holding it.
pub fn moving_average_closes(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window == 0 || closes.len() < window {
        return out;
    }
    let p = window as f64;
    for (i, w) in closes.windows(window).enumerate() {
        let sum: f64 = w.iter().sum();
        out[i + window - 1] = Some(round2(sum / p));
    }
    out
}

/// SMA of `close` over `bars` for an arbitrary window.
pub fn moving_average(bars: &[MarketBar], window: usize) -> Vec<Option<f64>> {
    let closes = bars.iter().map(|b| b.close).collect::<Vec<_>>();
    moving_average_closes(&closes, window)
}
