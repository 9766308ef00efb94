// File: crates/chart-core/benches/projector_bench.rs
// Summary: Criterion bench for projection and price domain resolution.

use chart_core::{project, resolve_price_domain, MarketBar};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_bars(n: usize) -> Vec<MarketBar> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let o = price;
        let c = o + if i % 3 == 0 { -0.4 } else { 0.3 };
        v.push(MarketBar::ohlc(format!("{i}"), o, o.max(c) + 1.0, o.min(c) - 1.0, c));
        price = c;
    }
    v
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    for &n in &[250usize, 5_000usize] {
        let bars = gen_bars(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| {
                let out = project(black_box(bars));
                let _ = black_box(resolve_price_domain(bars));
                out
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
