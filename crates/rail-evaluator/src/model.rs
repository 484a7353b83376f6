//! Diff and batch-summary types produced by [`crate::rerun_optimized`].

use serde::Serialize;

use rail_engine::Metrics;

/// A completed run's aggregate KPIs. An alias, not a newtype: the evaluator
/// reports exactly what `Engine::get_state_message().metrics` already
/// computes, for both the baseline and optimized legs of a trial.
pub type RunMetrics = Metrics;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RerunDiffTrain {
    pub train_id: String,
    pub name: String,
    pub delta_delay_min: f64,
}

/// `baseline − optimized`; positive means the optimized run did better.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RerunDiff {
    pub delta_avg_delay_min: f64,
    pub delta_duration_sec: f64,
    pub trains: Vec<RerunDiffTrain>,
}

/// Matches trains present in both legs by id; unmatched ids are dropped.
/// Sorted descending by `delta_delay_min` so the most-improved train is
/// first.
pub fn diff_metrics(baseline: &RunMetrics, optimized: &RunMetrics) -> RerunDiff {
    let delta_avg_delay_min = round2(baseline.avg_delay_min - optimized.avg_delay_min);
    let delta_duration_sec = round2(baseline.duration_sec - optimized.duration_sec);

    let mut trains: Vec<RerunDiffTrain> = baseline
        .by_train
        .iter()
        .filter_map(|b| {
            optimized
                .by_train
                .iter()
                .find(|o| o.id == b.id)
                .map(|o| RerunDiffTrain {
                    train_id: b.id.clone(),
                    name: b.name.clone(),
                    delta_delay_min: b.delay_min - o.delay_min,
                })
        })
        .collect();
    trains.sort_by(|a, b| b.delta_delay_min.partial_cmp(&a.delta_delay_min).unwrap());

    RerunDiff {
        delta_avg_delay_min,
        delta_duration_sec,
        trains,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Statistical summary of a multi-trial batch, mirroring the wire `meta`
/// object: trial seeds, how many holds the plan applied, and the bootstrap
/// confidence interval on each delta's mean.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RerunMeta {
    pub trials: usize,
    pub seeds_used: Vec<u64>,
    pub holds_applied: usize,
    pub avg_delay_min_delta_mean: f64,
    pub avg_delay_min_delta_ci95: (f64, f64),
    pub duration_sec_delta_mean: f64,
    pub duration_sec_delta_ci95: (f64, f64),
}

/// The full result of a `rerun_optimized` batch: first-trial metrics for
/// readability, the applied plan, their diff, and the batch statistics.
#[derive(Clone, Debug, Serialize)]
pub struct RerunResult {
    pub baseline: RunMetrics,
    pub optimized: RunMetrics,
    pub plan: rail_plan::Plan,
    pub diff: RerunDiff,
    pub meta: RerunMeta,
}
