// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; bar model, moving averages, candle geometry and PNG rendering.

pub mod candle;
pub mod chart;
pub mod error;
pub mod grid;
pub mod indicator;
pub mod projector;
pub mod scale;
pub mod series;
pub mod stats;
pub mod text;
pub mod theme;
pub mod view;

pub use candle::{CandleGeometry, CandleInput, CandleMapper, CandleSlot};
pub use chart::{CandlestickChart, Insets, RenderOptions};
pub use error::ChartError;
pub use indicator::{moving_average, moving_average_closes};
pub use projector::project;
pub use scale::{BandScale, PriceScale, ValueScale};
pub use series::{recent, ChartBar, MaLine, MarketBar};
pub use stats::PeriodSummary;
pub use theme::Theme;
pub use view::{resolve_price_domain, PriceDomain};
