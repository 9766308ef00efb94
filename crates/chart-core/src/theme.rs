// File: crates/chart-core/src/theme.rs
// Summary: Chart colors (background, grid, labels, candle up/down, MA lines) and hex parsing.

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::series::MaLine;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    /// MA5, MA10, MA20 in that order.
    pub ma: [skia::Color; 3],
}

impl Theme {
    /// Slate dark theme with red-up / green-down candles (mainland China convention).
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0x0f, 0x17, 0x2a),  // slate-900
            grid: skia::Color::from_argb(77, 0x33, 0x41, 0x55),        // slate-700 @ 30%
            axis_line: skia::Color::from_argb(255, 0x47, 0x55, 0x69),  // slate-600
            axis_label: skia::Color::from_argb(255, 0x94, 0xa3, 0xb8), // slate-400
            candle_up: skia::Color::from_argb(255, 0xef, 0x44, 0x44),
            candle_down: skia::Color::from_argb(255, 0x22, 0xc5, 0x5e),
            ma: [
                skia::Color::from_argb(255, 0xfb, 0xbf, 0x24),
                skia::Color::from_argb(255, 0x38, 0xbd, 0xf8),
                skia::Color::from_argb(255, 0xc0, 0x84, 0xfc),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            candle_up: skia::Color::from_argb(255, 200, 60, 60),
            candle_down: skia::Color::from_argb(255, 20, 160, 90),
            ma: [
                skia::Color::from_argb(255, 0xd9, 0x77, 0x06),
                skia::Color::from_argb(255, 0x02, 0x84, 0xc7),
                skia::Color::from_argb(255, 0x93, 0x33, 0xea),
            ],
        }
    }

    /// Replace the candle and MA colors, keeping the rest of the theme.
    pub fn with_palette(mut self, up: skia::Color, down: skia::Color, ma: [skia::Color; 3]) -> Self {
        self.candle_up = up;
        self.candle_down = down;
        self.ma = ma;
        self
    }

    pub fn ma_color(&self, line: MaLine) -> skia::Color {
        match line {
            MaLine::Ma5 => self.ma[0],
            MaLine::Ma10 => self.ma[1],
            MaLine::Ma20 => self.ma[2],
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || ChartError::InvalidColor(s.to_string());
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(skia::Color::from_argb(a, r, g, b))
}
