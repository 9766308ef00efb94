// File: crates/marketvis/src/app.rs
// Summary: Orchestration: fetch -> trim to display window -> project -> render -> summarize.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chart_core::{recent, CandlestickChart, PeriodSummary};
use market_data::MarketDataSource;
use tracing::info;

use crate::config::AppConfig;

#[derive(Clone, Debug)]
pub struct Report {
    pub code: String,
    pub fetched: usize,
    pub shown: usize,
    pub summary: PeriodSummary,
    pub output: PathBuf,
}

pub async fn run(config: &AppConfig, source: &dyn MarketDataSource) -> Result<Report> {
    config.validate()?;
    let opts = config.render_options()?;
    let code = config.ticker_code.as_str();

    let bars = source
        .fetch_daily(code, config.lookback_days)
        .await
        .with_context(|| format!("fetching {code} from {}", source.name()))?;
    info!(code, source = source.name(), fetched = bars.len(), "loaded daily bars");

    let shown = recent(&bars, config.display_days);
    if shown.is_empty() {
        bail!("no daily bars for {code}");
    }

    let chart = CandlestickChart::from_market_bars(shown)?;
    let output = config.output_path();
    chart
        .render_to_png(&opts, &output)
        .with_context(|| format!("rendering {}", output.display()))?;
    info!(code, bars = shown.len(), path = %output.display(), "wrote chart");

    if let Some(json) = &config.json {
        let f = std::fs::File::create(json).with_context(|| format!("creating {}", json.display()))?;
        let mut writer = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut writer, &chart.bars)?;
        writer.flush().with_context(|| format!("writing {}", json.display()))?;
        info!(path = %json.display(), "wrote chart series");
    }

    Ok(Report {
        code: code.to_string(),
        fetched: bars.len(),
        shown: shown.len(),
        summary: PeriodSummary::from_bars(shown),
        output,
    })
}

fn fmt2(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

/// Human-readable period summary, one stat per line.
pub fn format_summary(report: &Report) -> String {
    let s = &report.summary;
    let volume = s
        .latest_volume_wan()
        .map(|v| format!("{v:.0} 万手"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{code}  Daily K-Line (Forward Adjusted), {shown} bars\n\
         Latest Close:     {close}\n\
         Latest Volume:    {volume}\n\
         Highest (Period): {high}\n\
         Lowest (Period):  {low}",
        code = report.code,
        shown = report.shown,
        close = fmt2(s.latest_close),
        high = fmt2(s.period_high),
        low = fmt2(s.period_low),
    )
}
