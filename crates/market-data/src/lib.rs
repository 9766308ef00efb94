// File: crates/market-data/src/lib.rs
// Summary: Daily bar sources for the chart: Eastmoney kline API and CSV files.

pub mod csv_source;
pub mod eastmoney;
pub mod error;
pub mod kline;
pub mod source;

pub use csv_source::CsvSource;
pub use eastmoney::EastmoneySource;
pub use error::DataError;
pub use kline::{parse_kline, parse_klines};
pub use source::MarketDataSource;
