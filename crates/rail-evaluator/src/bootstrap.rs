//! Percentile bootstrap confidence interval for paired deltas.

use rail_core::SimRng;

/// Fixed seed for the bootstrap RNG, independent of any trial's simulation
/// seed — CIs must be reproducible across calls regardless of what `seed`
/// the caller passed to `rerun_optimized`.
const CI_SEED: u64 = 12345;
const DEFAULT_B: usize = 1000;
const DEFAULT_ALPHA: f64 = 0.05;

/// 95% percentile bootstrap CI over `deltas`, resampling with replacement
/// `B = 1000` times from a fixed-seed RNG. `(0.0, 0.0)` for an empty input.
pub fn paired_bootstrap_ci(deltas: &[f64]) -> (f64, f64) {
    bootstrap_ci(deltas, DEFAULT_ALPHA, DEFAULT_B)
}

fn bootstrap_ci(deltas: &[f64], alpha: f64, b: usize) -> (f64, f64) {
    if deltas.is_empty() {
        return (0.0, 0.0);
    }
    let n = deltas.len();
    let mut rng = SimRng::new(CI_SEED);

    let mut sample_means: Vec<f64> = Vec::with_capacity(b);
    for _ in 0..b {
        let mut sum = 0.0;
        for _ in 0..n {
            let idx: usize = rng.gen_range(0..n);
            sum += deltas[idx];
        }
        sample_means.push(sum / n as f64);
    }
    sample_means.sort_by(|x, y| x.partial_cmp(y).unwrap());

    let lo_idx = ((alpha / 2.0) * b as f64).floor() as usize;
    let lo_idx = lo_idx.min(b - 1);
    let hi_idx = (((1.0 - alpha / 2.0) * b as f64).ceil() as usize).saturating_sub(1).min(b - 1);
    (sample_means[lo_idx], sample_means[hi_idx])
}
