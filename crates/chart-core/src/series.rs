// File: crates/chart-core/src/series.rs
// Summary: Daily bar model (raw market bars and chart-ready bars) plus display trimming.
// Notes:
// - Bars are kept in the order the source delivered them (ascending by date).
//   Nothing in this crate re-sorts them.

use serde::{Deserialize, Serialize};

/// One trading day as delivered by a market data source.
///
/// `low <= open, close <= high` is expected but not enforced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBar {
    /// `YYYY-MM-DD` as delivered upstream, or `YYYYMMDD`.
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub amount: f64,
    pub amplitude: f64,
    pub pct_change: f64,
    pub amount_change: f64,
    pub turnover: f64,
}

impl MarketBar {
    /// Bar with only date and OHLC set; secondary metrics are zero.
    pub fn ohlc(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { date: date.into(), open, high, low, close, ..Self::default() }
    }

    /// Flat days (`close == open`) count as up.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// A [`MarketBar`] enriched with its moving averages and direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    #[serde(flatten)]
    pub bar: MarketBar,
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub is_up: bool,
}

impl ChartBar {
    /// Moving average for one of the three chart windows, in `MaLine` order.
    pub fn ma(&self, line: MaLine) -> Option<f64> {
        match line {
            MaLine::Ma5 => self.ma5,
            MaLine::Ma10 => self.ma10,
            MaLine::Ma20 => self.ma20,
        }
    }
}

/// The three moving-average lines drawn over the candles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaLine {
    Ma5,
    Ma10,
    Ma20,
}

impl MaLine {
    pub const ALL: [MaLine; 3] = [MaLine::Ma5, MaLine::Ma10, MaLine::Ma20];

    pub const fn window(self) -> usize {
        match self {
            MaLine::Ma5 => 5,
            MaLine::Ma10 => 10,
            MaLine::Ma20 => 20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaLine::Ma5 => "MA5",
            MaLine::Ma10 => "MA10",
            MaLine::Ma20 => "MA20",
        }
    }
}

/// Keep only the most recent `n` bars, so period statistics and the price axis
/// reflect the visible window rather than the whole fetched lookback.
pub fn recent(bars: &[MarketBar], n: usize) -> &[MarketBar] {
    let start = bars.len().saturating_sub(n);
    &bars[start..]
}
