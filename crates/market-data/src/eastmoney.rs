// File: crates/market-data/src/eastmoney.rs
// Summary: Eastmoney daily kline source (forward adjusted), over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use chart_core::MarketBar;
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::DataError;
use crate::kline::parse_klines;
use crate::source::MarketDataSource;

pub const BASE_URL: &str = "https://push2his.eastmoney.com/api/qt/stock/kline/get";

const FIELDS1: &str = "f1,f2,f3,f4,f5,f6";
const FIELDS2: &str = "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61,f116";
const UT: &str = "fa5fd1943c7b386f172d6893dbfba10b";
/// Daily bars.
const KLT_DAILY: &str = "101";
/// 0 = unadjusted, 1 = forward adjusted, 2 = backward adjusted.
const FQT_FORWARD: &str = "1";

#[derive(Debug, Deserialize)]
pub struct KlineResponse {
    pub data: Option<KlineData>,
}

#[derive(Debug, Deserialize)]
pub struct KlineData {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub klines: Option<Vec<String>>,
}

/// Market prefix of a `secid`: Shanghai codes start with 6, everything else is
/// Shenzhen (0xxxxx, 3xxxxx).
pub fn market_code(code: &str) -> u8 {
    if code.starts_with('6') { 1 } else { 0 }
}

pub fn secid(code: &str) -> String {
    format!("{}.{}", market_code(code), code)
}

/// `[today - lookback_days, today]` as `YYYYMMDD` strings.
pub fn date_range(today: NaiveDate, lookback_days: u32) -> (String, String) {
    let start = today.checked_sub_days(Days::new(lookback_days.into())).unwrap_or(NaiveDate::MIN);
    (start.format("%Y%m%d").to_string(), today.format("%Y%m%d").to_string())
}

/// Query parameters for one daily-kline request.
pub fn query_params(code: &str, today: NaiveDate, lookback_days: u32) -> Vec<(&'static str, String)> {
    let (beg, end) = date_range(today, lookback_days);
    vec![
        ("fields1", FIELDS1.to_string()),
        ("fields2", FIELDS2.to_string()),
        ("ut", UT.to_string()),
        ("klt", KLT_DAILY.to_string()),
        ("fqt", FQT_FORWARD.to_string()),
        ("secid", secid(code)),
        ("beg", beg),
        ("end", end),
    ]
}

/// Body -> bars. A null `data` or missing `klines` means "nothing", not an error.
pub fn decode_response(body: &str) -> Result<Vec<MarketBar>, DataError> {
    let resp: KlineResponse = serde_json::from_str(body)?;
    let Some(data) = resp.data else { return Ok(Vec::new()) };
    debug!(code = %data.code, name = %data.name, klines = data.klines.as_ref().map_or(0, Vec::len), "kline envelope");
    match data.klines {
        Some(lines) => parse_klines(&lines),
        None => Ok(Vec::new()),
    }
}

pub struct EastmoneySource {
    client: Client,
    base_url: String,
}

impl EastmoneySource {
    pub fn new() -> Result<Self, DataError> {
        Self::with_base_url(BASE_URL)
    }

    /// Point the source at another host (mirrors, local fixtures).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DataError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait]
impl MarketDataSource for EastmoneySource {
    fn name(&self) -> &'static str {
        "eastmoney"
    }

    async fn fetch_daily(&self, code: &str, lookback_days: u32) -> Result<Vec<MarketBar>, DataError> {
        let params = query_params(code, Local::now().date_naive(), lookback_days);
        debug!(code, lookback_days, url = %self.base_url, "requesting daily klines");

        let response = self.client.get(&self.base_url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Status { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        let bars = decode_response(&body)?;
        debug!(code, bars = bars.len(), "decoded daily klines");
        Ok(bars)
    }
}
