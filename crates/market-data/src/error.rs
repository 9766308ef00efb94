// File: crates/market-data/src/error.rs
// Summary: Error type for market data sources.

use thiserror::Error;

/// Errors raised while fetching or decoding daily bars.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network failure, timeout, or body read error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A kline string with fewer fields than the positional layout requires.
    #[error("kline '{line}' has {fields} fields, expected at least {expected}")]
    Kline { line: String, fields: usize, expected: usize },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv has no '{0}' column")]
    MissingColumn(&'static str),

    /// The blocking file read was cancelled or panicked.
    #[error("loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
