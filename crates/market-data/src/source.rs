// File: crates/market-data/src/source.rs
// Summary: Market data source trait.

use async_trait::async_trait;
use chart_core::MarketBar;

use crate::error::DataError;

/// Anything that can deliver daily bars for a ticker.
///
/// Implementations return bars ascending by date. An empty vector is a valid
/// answer (unknown code, no trading days in range).
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Daily bars for `code` covering the last `lookback_days` calendar days.
    async fn fetch_daily(&self, code: &str, lookback_days: u32) -> Result<Vec<MarketBar>, DataError>;
}
