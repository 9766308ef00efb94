// File: crates/chart-core/src/projector.rs
// Summary: Turns raw market bars into the chart series (bars + MA5/10/20 + direction).

use crate::indicator::moving_average;
use crate::series::{ChartBar, MaLine, MarketBar};

/// Project `bars` into chart bars. Output length and order match the input.
///
/// Recomputed on every call; memoize at the call site if the input is unchanged.
pub fn project(bars: &[MarketBar]) -> Vec<ChartBar> {
    let ma5 = moving_average(bars, MaLine::Ma5.window());
    let ma10 = moving_average(bars, MaLine::Ma10.window());
    let ma20 = moving_average(bars, MaLine::Ma20.window());

    bars.iter()
        .enumerate()
        .map(|(i, b)| ChartBar {
            bar: b.clone(),
            ma5: ma5[i],
            ma10: ma10[i],
            ma20: ma20[i],
            is_up: b.is_up(),
        })
        .collect()
}
