// File: crates/chart-core/src/stats.rs
// Summary: Period summary (latest close/volume, period high/low) over the displayed bars.

use crate::series::MarketBar;
use crate::view::{nan_max, nan_min};

/// Volume is reported upstream in lots; summaries show it in units of 10,000 lots (万手).
pub const VOLUME_UNIT: f64 = 10_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeriodSummary {
    pub latest_close: Option<f64>,
    pub latest_volume: Option<f64>,
    pub period_high: Option<f64>,
    pub period_low: Option<f64>,
}

impl PeriodSummary {
    /// All fields are `None` for an empty slice. A `NaN` high or low propagates into
    /// the period extreme, as it does into the price domain.
    pub fn from_bars(bars: &[MarketBar]) -> Self {
        let Some(last) = bars.last() else { return Self::default() };
        Self {
            latest_close: Some(last.close),
            latest_volume: Some(last.volume),
            period_high: Some(bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, nan_max)),
            period_low: Some(bars.iter().map(|b| b.low).fold(f64::INFINITY, nan_min)),
        }
    }

    pub fn latest_volume_wan(&self) -> Option<f64> {
        self.latest_volume.map(|v| v / VOLUME_UNIT)
    }
}
