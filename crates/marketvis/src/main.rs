// File: crates/marketvis/src/main.rs
// Summary: CLI: fetch daily bars for a ticker (or load a CSV), render candles + MA5/10/20 to PNG,
// and print the period summary.

mod app;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use market_data::{CsvSource, EastmoneySource, MarketDataSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Daily candlestick chart with MA5/MA10/MA20")]
struct Cli {
    /// TOML config file; command-line flags override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Six-digit ticker code, e.g. 300246 or 600519.
    #[arg(long)]
    code: Option<String>,
    /// Calendar days to request from the data source.
    #[arg(long)]
    lookback_days: Option<u32>,
    /// Most recent bars to display.
    #[arg(long)]
    display_days: Option<usize>,
    /// Load bars from a CSV file instead of the network.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Output PNG path.
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Also write the projected series (bars + MAs) as JSON.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
    /// Theme preset: dark or light.
    #[arg(long)]
    theme: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<(AppConfig, Option<PathBuf>)> {
        let mut cfg = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(v) = self.code { cfg.ticker_code = v; }
        if let Some(v) = self.lookback_days { cfg.lookback_days = v; }
        if let Some(v) = self.display_days { cfg.display_days = v; }
        if let Some(v) = self.width { cfg.width = v; }
        if let Some(v) = self.height { cfg.height = v; }
        if let Some(v) = self.theme { cfg.theme = v; }
        if self.output.is_some() { cfg.output = self.output; }
        if self.json.is_some() { cfg.json = self.json; }
        Ok((cfg, self.csv))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let (config, csv) = Cli::parse().into_config()?;
    let source: Box<dyn MarketDataSource> = match csv {
        Some(path) => Box::new(CsvSource::new(path)),
        None => Box::new(EastmoneySource::new()?),
    };

    let report = app::run(&config, source.as_ref()).await?;
    println!("{}", app::format_summary(&report));
    println!("Fetched {} bars, showing {}. Wrote {}", report.fetched, report.shown, report.output.display());
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn flags_override_toml_which_overrides_defaults() {
        let mut toml = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(toml, "display_days = 120\nlookback_days = 90\nticker_code = \"000001\"").expect("write toml");
        let config_path = toml.path().to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "marketvis",
            "--config", config_path.as_str(),
            "--display-days", "30",
            "--code", "600519",
            "--csv", "bars.csv",
        ])
        .expect("parse args");
        let (cfg, csv) = cli.into_config().expect("config");

        assert_eq!(cfg.display_days, 30);
        assert_eq!(cfg.ticker_code, "600519");
        assert_eq!(cfg.lookback_days, 90);
        assert_eq!(cfg.width, AppConfig::default().width);
        assert_eq!(csv, Some(PathBuf::from("bars.csv")));
    }

    #[test]
    fn no_config_file_means_defaults_plus_flags() {
        let cli = Cli::try_parse_from(["marketvis", "-o", "out.png", "--theme", "light"]).expect("parse args");
        let (cfg, csv) = cli.into_config().expect("config");
        let defaults = AppConfig::default();
        assert_eq!(cfg.ticker_code, defaults.ticker_code);
        assert_eq!(cfg.lookback_days, defaults.lookback_days);
        assert_eq!(cfg.output, Some(PathBuf::from("out.png")));
        assert_eq!(cfg.theme, "light");
        assert!(csv.is_none());
    }
}
