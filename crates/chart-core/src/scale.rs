// File: crates/chart-core/src/scale.rs
// Summary: Price (Y) scale and category band (X) scale used to place candles.

use crate::view::PriceDomain;

/// Monotonic price -> pixel mapping handed to the candle mapper.
pub trait PriceScale {
    fn to_px(&self, price: f64) -> f32;
}

impl<F> PriceScale for F
where
    F: Fn(f64) -> f32,
{
    #[inline]
    fn to_px(&self, price: f64) -> f32 {
        self(price)
    }
}

/// Vertical value scale mapping a price domain to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, domain: PriceDomain) -> Self {
        let mut s = Self { top_px, bottom_px, vmin: domain.min, vmax: domain.max };
        // flat domain: widen by one unit
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}

impl PriceScale for ValueScale {
    #[inline]
    fn to_px(&self, price: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((price - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Horizontal category scale: `count` equal bands across [left, right].
/// Each bar is drawn inside its band, leaving `gap` (fraction of the band) empty.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub band: f32,
    pub gap: f32,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize, gap: f32) -> Self {
        let band = (right_px - left_px) / count.max(1) as f32;
        Self { left_px, band, gap: gap.clamp(0.0, 0.9) }
    }
    /// Center of band `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.band
    }
    /// Drawing slot of bar `i` inside its band.
    pub fn slot(&self, i: usize) -> crate::candle::CandleSlot {
        let width = self.band * (1.0 - self.gap);
        crate::candle::CandleSlot { x: self.center(i) - width * 0.5, width }
    }
}
