// File: crates/marketvis/src/config.rs
// Summary: Application configuration (defaults < TOML file < command line).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chart_core::theme::{self, parse_hex_color};
use chart_core::RenderOptions;
use serde::Deserialize;

pub const DEFAULT_TICKER: &str = "300246";
/// Calendar days requested so that roughly `DEFAULT_DISPLAY_DAYS` trading days come back.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 400;
pub const DEFAULT_DISPLAY_DAYS: usize = 250;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub ticker_code: String,
    pub lookback_days: u32,
    pub display_days: usize,
    pub up_color: String,
    pub down_color: String,
    /// MA5, MA10, MA20.
    pub ma_colors: [String; 3],
    pub theme: String,
    pub width: i32,
    pub height: i32,
    /// Defaults to `target/out/<ticker>.png`.
    pub output: Option<PathBuf>,
    /// Also write the projected series as JSON.
    pub json: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticker_code: DEFAULT_TICKER.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            display_days: DEFAULT_DISPLAY_DAYS,
            up_color: "#ef4444".to_string(),
            down_color: "#22c55e".to_string(),
            ma_colors: ["#fbbf24".to_string(), "#38bdf8".to_string(), "#c084fc".to_string()],
            theme: "dark".to_string(),
            width: chart_core::chart::WIDTH,
            height: chart_core::chart::HEIGHT,
            output: None,
            json: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Ticker codes are exactly six ASCII digits.
    pub fn validate(&self) -> Result<()> {
        let code = &self.ticker_code;
        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
            bail!("invalid ticker code '{code}': expected 6 digits");
        }
        if self.display_days == 0 {
            bail!("display_days must be at least 1");
        }
        if self.width <= 0 || self.height <= 0 {
            bail!("chart size must be positive, got {}x{}", self.width, self.height);
        }
        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        let color = |s: &str| parse_hex_color(s).with_context(|| format!("config color '{s}'"));
        let ma = [color(&self.ma_colors[0])?, color(&self.ma_colors[1])?, color(&self.ma_colors[2])?];
        let palette = theme::find(&self.theme).with_palette(color(&self.up_color)?, color(&self.down_color)?, ma);
        Ok(RenderOptions { width: self.width, height: self.height, theme: palette, ..RenderOptions::default() })
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("target/out").join(format!("{}.png", self.ticker_code)))
    }
}
