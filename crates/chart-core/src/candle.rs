// File: crates/chart-core/src/candle.rs
// Summary: Per-bar candle geometry (wick + body + color) in pixel space.

use skia_safe as skia;

use crate::scale::PriceScale;
use crate::series::ChartBar;

/// Minimum body height so zero-movement days stay visible.
pub const MIN_BODY_PX: f32 = 1.0;

/// Horizontal slot of a bar: left edge and full body width, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleSlot {
    pub x: f32,
    pub width: f32,
}

/// Everything the mapper needs for one bar, besides the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleInput {
    pub slot: CandleSlot,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl CandleInput {
    pub fn new(bar: &ChartBar, slot: CandleSlot) -> Self {
        Self { slot, open: bar.bar.open, close: bar.bar.close, high: bar.bar.high, low: bar.bar.low }
    }

    #[inline]
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Vertical segment from the high to the low at the slot center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wick {
    pub x: f32,
    pub y_high: f32,
    pub y_low: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Body {
    pub fn to_rect(&self) -> skia::Rect {
        skia::Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub wick: Wick,
    pub body: Body,
    pub color: skia::Color,
}

/// Maps bars to candle geometry with a fixed up/down palette.
#[derive(Clone, Copy, Debug)]
pub struct CandleMapper {
    pub up: skia::Color,
    pub down: skia::Color,
}

impl CandleMapper {
    pub fn new(up: skia::Color, down: skia::Color) -> Self {
        Self { up, down }
    }

    /// Geometry for one bar, or `None` when no scale is available; the caller skips
    /// that bar and keeps painting the rest.
    pub fn map(&self, input: &CandleInput, scale: Option<&dyn PriceScale>) -> Option<CandleGeometry> {
        let scale = scale?;
        let y_open = scale.to_px(input.open);
        let y_close = scale.to_px(input.close);
        let y_high = scale.to_px(input.high);
        let y_low = scale.to_px(input.low);

        let top = y_open.min(y_close);
        let bottom = y_open.max(y_close);
        let CandleSlot { x, width } = input.slot;

        Some(CandleGeometry {
            wick: Wick { x: x + width / 2.0, y_high, y_low },
            body: Body { x, y: top, width, height: (bottom - top).max(MIN_BODY_PX) },
            color: if input.is_up() { self.up } else { self.down },
        })
    }

    /// Convenience over [`CandleMapper::map`] for a projected bar.
    pub fn map_bar(&self, bar: &ChartBar, slot: CandleSlot, scale: Option<&dyn PriceScale>) -> Option<CandleGeometry> {
        self.map(&CandleInput::new(bar, slot), scale)
    }
}
