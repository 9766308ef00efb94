// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Every how many bands an X label can be drawn so that neighbours are at least
/// `min_gap_px` apart. Always >= 1.
pub fn label_stride(band_px: f32, min_gap_px: f32) -> usize {
    if band_px <= 0.0 { return 1; }
    ((min_gap_px / band_px).ceil() as usize).max(1)
}
