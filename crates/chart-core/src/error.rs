// File: crates/chart-core/src/error.rs
// Summary: Error type for domain resolution, theming and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Nothing to display; the price domain and the chart are undefined.
    #[error("no bars to display")]
    EmptySeries,

    #[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
