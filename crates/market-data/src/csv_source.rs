// File: crates/market-data/src/csv_source.rs
// Summary: Offline daily bars from a CSV file with header-driven column lookup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chart_core::MarketBar;
use tracing::{debug, warn};

use crate::error::DataError;
use crate::source::MarketDataSource;

/// Reads bars from a CSV file. The ticker and lookback arguments of
/// [`MarketDataSource::fetch_daily`] are ignored; the file is the data.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MarketDataSource for CsvSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn fetch_daily(&self, _code: &str, _lookback_days: u32) -> Result<Vec<MarketBar>, DataError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || load_bars_csv(&path)).await?
    }
}

/// Column positions resolved from the header row.
struct Columns {
    date: Option<usize>,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: Option<usize>,
    amount: Option<usize>,
    amplitude: Option<usize>,
    pct_change: Option<usize>,
    amount_change: Option<usize>,
    turnover: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &[String]) -> Result<Self, DataError> {
        let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
        let need = |names: &[&str], what: &'static str| idx(names).ok_or(DataError::MissingColumn(what));
        Ok(Self {
            date: idx(&["date", "time", "timestamp", "datetime", "trade_date"]),
            open: need(&["open", "o"], "open")?,
            high: need(&["high", "h"], "high")?,
            low: need(&["low", "l"], "low")?,
            close: need(&["close", "c", "adj_close", "close_price"], "close")?,
            volume: idx(&["volume", "vol", "v"]),
            amount: idx(&["amount", "turnover_value"]),
            amplitude: idx(&["amplitude"]),
            pct_change: idx(&["pct_change", "pctchange", "change_pct"]),
            amount_change: idx(&["amount_change", "amountchange", "change"]),
            turnover: idx(&["turnover", "turnover_rate"]),
        })
    }
}

/// Load bars in file order. Rows whose OHLC does not parse are skipped; missing
/// secondary metrics are zero. Without a date column the row index is used.
pub fn load_bars_csv(path: &Path) -> Result<Vec<MarketBar>, DataError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(path = %path.display(), ?headers, "csv headers");
    let cols = Columns::from_headers(&headers)?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let opt = |i: Option<usize>| i.and_then(num).unwrap_or(0.0);

        let (Some(open), Some(high), Some(low), Some(close)) =
            (num(cols.open), num(cols.high), num(cols.low), num(cols.close))
        else {
            skipped += 1;
            continue;
        };
        let date = cols
            .date
            .and_then(|i| rec.get(i))
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());

        out.push(MarketBar {
            date,
            open,
            close,
            high,
            low,
            volume: opt(cols.volume),
            amount: opt(cols.amount),
            amplitude: opt(cols.amplitude),
            pct_change: opt(cols.pct_change),
            amount_change: opt(cols.amount_change),
            turnover: opt(cols.turnover),
        });
    }
    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped csv rows without numeric OHLC");
    }
    Ok(out)
}
