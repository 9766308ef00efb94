// File: crates/chart-core/tests/render.rs
// Purpose: End-to-end PNG rendering: output shape, candle colors at known pixels, and empty input.

use chart_core::theme::{self, parse_hex_color};
use chart_core::{CandlestickChart, ChartError, Insets, MarketBar, RenderOptions, Theme};

fn small_opts() -> RenderOptions {
    RenderOptions {
        width: 200,
        height: 200,
        insets: Insets::new(64, 30, 20, 40),
        draw_labels: false, // avoid font variance
        ..RenderOptions::default()
    }
}

/// Plot spans x 64..170, y 20..160; domain [8.6, 13.4] puts price 11 at y = 90.
fn up_and_down() -> Vec<MarketBar> {
    vec![
        MarketBar::ohlc("2024-01-02", 10.0, 13.0, 9.0, 12.0),
        MarketBar::ohlc("2024-01-03", 12.0, 13.0, 9.0, 10.0),
    ]
}

fn rgba(c: skia_safe::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

#[test]
fn render_png_bytes_has_png_header_and_size() {
    let chart = CandlestickChart::from_market_bars(&up_and_down()).expect("chart");
    let bytes = chart.render_to_png_bytes(&small_opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (200, 200));
}

#[test]
fn candle_bodies_use_palette_colors() {
    let opts = small_opts();
    let chart = CandlestickChart::from_market_bars(&up_and_down()).expect("chart");
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // bands are 53px wide; bodies span x 69.3..111.7 and 122.3..164.7
    assert_eq!(img.get_pixel(80, 90).0, rgba(opts.theme.candle_up));
    assert_eq!(img.get_pixel(133, 90).0, rgba(opts.theme.candle_down));
    assert_eq!(img.get_pixel(5, 5).0, rgba(opts.theme.background));
}

#[test]
fn custom_palette_reaches_the_candles() {
    let up = parse_hex_color("#0000ff").expect("color");
    let mut opts = small_opts();
    opts.theme = Theme::dark().with_palette(up, opts.theme.candle_down, opts.theme.ma);

    let chart = CandlestickChart::from_market_bars(&up_and_down()).expect("chart");
    let img = image::load_from_memory(&chart.render_to_png_bytes(&opts).expect("render"))
        .expect("decode")
        .to_rgba8();
    assert_eq!(img.get_pixel(80, 90).0, [0, 0, 255, 255]);
}

#[test]
fn paint_draws_every_candle() {
    let bars = (0..30)
        .map(|i| {
            let c = 10.0 + (i % 7) as f64;
            MarketBar::ohlc(format!("{i}"), c - 0.3, c + 1.0, c - 1.0, c)
        })
        .collect::<Vec<_>>();
    let chart = CandlestickChart::from_market_bars(&bars).expect("chart");
    let opts = small_opts();
    let mut surface = skia_safe::surfaces::raster_n32_premul((opts.width, opts.height)).expect("surface");
    assert_eq!(chart.paint(surface.canvas(), &opts), 30);
}

#[test]
fn render_to_png_writes_file() {
    let chart = CandlestickChart::from_market_bars(&up_and_down()).expect("chart");
    let out = std::path::PathBuf::from("target/test_out/candles.png");
    chart.render_to_png(&small_opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn empty_chart_is_refused() {
    assert!(matches!(CandlestickChart::from_market_bars(&[]), Err(ChartError::EmptySeries)));
}

#[test]
fn hex_colors() {
    assert_eq!(rgba(parse_hex_color("#ef4444").expect("rgb")), [0xef, 0x44, 0x44, 0xff]);
    assert_eq!(rgba(parse_hex_color("22c55e80").expect("rgba")), [0x22, 0xc5, 0x5e, 0x80]);
    assert!(matches!(parse_hex_color("#12345"), Err(ChartError::InvalidColor(_))));
    assert!(matches!(parse_hex_color("#gggggg"), Err(ChartError::InvalidColor(_))));
    assert_eq!(theme::find("LIGHT").name, "light");
    assert_eq!(theme::find("nope").name, "dark");
}
