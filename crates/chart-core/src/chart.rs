// File: crates/chart-core/src/chart.rs
// Summary: Candlestick chart (candles + MA5/10/20) and headless PNG rendering on Skia raster surfaces.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::candle::CandleMapper;
use crate::error::{ChartError, Result};
use crate::grid::{label_stride, linspace};
use crate::projector::project;
use crate::scale::{BandScale, PriceScale, ValueScale};
use crate::series::{ChartBar, MaLine, MarketBar};
use crate::text::{Anchor, LabelPainter};
use crate::theme::Theme;
use crate::view::{resolve_price_domain, PriceDomain};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for price labels on the left and date labels below.
    fn default() -> Self {
        Self::new(64, 30, 20, 40)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is platform dependent; tests turn it off.
    pub draw_labels: bool,
    /// Number of horizontal grid lines / price labels across the domain.
    pub y_ticks: usize,
    /// Minimum distance between two date labels.
    pub min_label_gap_px: f32,
    /// Fraction of each bar's band left empty between candles.
    pub bar_gap: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            y_ticks: 6,
            min_label_gap_px: 80.0,
            bar_gap: 0.2,
        }
    }
}

/// Plot rectangle in pixels.
#[derive(Clone, Copy, Debug)]
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl Plot {
    fn new(opts: &RenderOptions) -> Self {
        Self {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        }
    }
}

pub struct CandlestickChart {
    pub bars: Vec<ChartBar>,
    pub domain: PriceDomain,
}

impl CandlestickChart {
    pub fn new(bars: Vec<ChartBar>, domain: PriceDomain) -> Self {
        Self { bars, domain }
    }

    /// Project `bars` and resolve their price domain. `bars` should already be trimmed
    /// to the display window.
    pub fn from_market_bars(bars: &[MarketBar]) -> Result<Self> {
        let domain = resolve_price_domain(bars)?;
        Ok(Self::new(project(bars), domain))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if self.bars.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Paint one frame. Returns the number of candles drawn.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> usize {
        let theme = &opts.theme;
        let plot = Plot::new(opts);
        let yscale = ValueScale::new(plot.t, plot.b, self.domain);
        let bands = BandScale::new(plot.l, plot.r, self.bars.len(), opts.bar_gap);
        let labels = opts.draw_labels.then(|| LabelPainter::new(12.0, theme.axis_label));

        canvas.clear(theme.background);
        draw_grid(canvas, plot, &yscale, self.domain, opts, labels.as_ref());
        draw_x_axis(canvas, plot, &bands, &self.bars, opts, labels.as_ref());

        for line in MaLine::ALL {
            draw_ma_line(canvas, &bands, &yscale, &self.bars, line, theme.ma_color(line));
        }

        let mapper = CandleMapper::new(theme.candle_up, theme.candle_down);
        let scale: &dyn PriceScale = &yscale;
        let drawn = draw_candles(canvas, &mapper, &bands, Some(scale), &self.bars);
        debug!(bars = self.bars.len(), drawn, min = self.domain.min, max = self.domain.max, "painted candlestick chart");
        drawn
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: Plot,
    yscale: &ValueScale,
    domain: PriceDomain,
    opts: &RenderOptions,
    labels: Option<&LabelPainter>,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[3.0, 3.0], 0.0));

    // horizontals only
    for v in linspace(domain.min, domain.max, opts.y_ticks) {
        let y = yscale.to_px(v);
        canvas.draw_line((plot.l, y), (plot.r, y), &paint);
        if let Some(labels) = labels {
            labels.draw(canvas, &format!("{v:.2}"), plot.l - 6.0, y + 4.0, Anchor::Right);
        }
    }
}

fn draw_x_axis(
    canvas: &skia::Canvas,
    plot: Plot,
    bands: &BandScale,
    bars: &[ChartBar],
    opts: &RenderOptions,
    labels: Option<&LabelPainter>,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);

    let Some(labels) = labels else { return };
    let stride = label_stride(bands.band, opts.min_label_gap_px);
    for (i, bar) in bars.iter().enumerate().step_by(stride) {
        labels.draw(canvas, &bar.bar.date, bands.center(i), plot.b + 18.0, Anchor::Center);
    }
}

/// Polyline through the present values of one MA; absent values break the line.
fn draw_ma_line(
    canvas: &skia::Canvas,
    bands: &BandScale,
    yscale: &ValueScale,
    bars: &[ChartBar],
    line: MaLine,
    color: skia::Color,
) {
    let mut path = skia::PathBuilder::new();
    let mut pen_down = false;
    for (i, bar) in bars.iter().enumerate() {
        match bar.ma(line) {
            Some(v) => {
                let pt = (bands.center(i), yscale.to_px(v));
                if pen_down { path.line_to(pt); } else { path.move_to(pt); }
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    if path.is_empty() { return; }
    let path = path.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}

fn draw_candles(
    canvas: &skia::Canvas,
    mapper: &CandleMapper,
    bands: &BandScale,
    yscale: Option<&dyn PriceScale>,
    bars: &[ChartBar],
) -> usize {
    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let mut drawn = 0;
    for (i, bar) in bars.iter().enumerate() {
        let Some(g) = mapper.map_bar(bar, bands.slot(i), yscale) else {
            warn!(date = %bar.bar.date, "no price scale; skipping candle");
            continue;
        };
        wick.set_color(g.color);
        body.set_color(g.color);
        canvas.draw_line((g.wick.x, g.wick.y_high), (g.wick.x, g.wick.y_low), &wick);
        canvas.draw_rect(g.body.to_rect(), &body);
        drawn += 1;
    }
    drawn
}
