// File: crates/market-data/src/kline.rs
// Summary: Positional parser for Eastmoney kline strings (fields2 = f51..f61).

use chart_core::MarketBar;
use tracing::warn;

use crate::error::DataError;

/// f51 date, f52 open, f53 close, f54 high, f55 low, f56 volume, f57 amount,
/// f58 amplitude, f59 pct change, f60 amount change, f61 turnover.
pub const KLINE_FIELDS: usize = 11;

/// Parse one comma-separated kline.
///
/// The field count is checked; the field meaning is trusted by position. Extra
/// trailing fields are ignored. A numeric field that does not parse becomes `NaN`
/// and is logged, so one bad value does not drop the whole series.
pub fn parse_kline(line: &str) -> Result<MarketBar, DataError> {
    let parts = line.split(',').map(str::trim).collect::<Vec<_>>();
    if parts.len() < KLINE_FIELDS {
        return Err(DataError::Kline { line: line.to_string(), fields: parts.len(), expected: KLINE_FIELDS });
    }
    let date = parts[0];
    let num = |i: usize, field: &'static str| -> f64 {
        parts[i].parse::<f64>().unwrap_or_else(|_| {
            warn!(%date, field, raw = parts[i], "unparsable kline field");
            f64::NAN
        })
    };

    Ok(MarketBar {
        date: date.to_string(),
        open: num(1, "open"),
        close: num(2, "close"),
        high: num(3, "high"),
        low: num(4, "low"),
        volume: num(5, "volume"),
        amount: num(6, "amount"),
        amplitude: num(7, "amplitude"),
        pct_change: num(8, "pct_change"),
        amount_change: num(9, "amount_change"),
        turnover: num(10, "turnover"),
    })
}

/// Parse every kline, failing on the first malformed line.
pub fn parse_klines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<MarketBar>, DataError> {
    lines.iter().map(|l| parse_kline(l.as_ref())).collect()
}
