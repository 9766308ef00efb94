// File: crates/chart-core/src/view.rs
// Summary: Y-axis price domain of the displayed bars, padded by 10% of the range.

use crate::error::{ChartError, Result};
use crate::series::MarketBar;

/// Fraction of `max_high - min_low` added above and below the bars.
pub const DOMAIN_PADDING: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Padded `[min_low - pad, max_high + pad]` over `bars`, which should already be the
/// displayed slice. There is no outlier rejection, and `NaN` lows or highs propagate.
pub fn resolve_price_domain(bars: &[MarketBar]) -> Result<PriceDomain> {
    if bars.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    let min_low = bars.iter().map(|b| b.low).fold(f64::INFINITY, nan_min);
    let max_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, nan_max);
    let padding = (max_high - min_low) * DOMAIN_PADDING;
    Ok(PriceDomain { min: min_low - padding, max: max_high + padding })
}

// f64::min/max drop NaN operands; these keep them.
pub(crate) fn nan_min(acc: f64, v: f64) -> f64 {
    if v.is_nan() || v < acc { v } else { acc }
}

pub(crate) fn nan_max(acc: f64, v: f64) -> f64 {
    if v.is_nan() || v > acc { v } else { acc }
}
