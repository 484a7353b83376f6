//! Paired A/B batch evaluation: baseline vs. plan-optimized reruns on fresh,
//! isolated engine instances sharing a common per-trial seed.

use rail_adapter::{build_optimizer_input, optimize_from_sim};
use rail_engine::{Engine, EngineBuilder, Lifecycle};
use rail_plan::Plan;
use rail_topology::Topology;

use crate::bootstrap::paired_bootstrap_ci;
use crate::error::EvaluatorResult;
use crate::model::{diff_metrics, RerunMeta, RerunResult, RunMetrics};

/// Safety cap on ticks per isolated rerun, matching the engine's own batch
/// ceiling — it only bites if a malformed topology or plan would otherwise
/// spin forever.
const MAX_TICKS: u64 = 20_000;

/// Run `rerun_optimized(seed, trials)` against `engine`'s current (live)
/// state and topology.
///
/// Per §4.4:
/// 1. Snapshot the live engine and solve a plan from it, seeded with `seed`.
/// 2. For `t` in `0..trials`, with trial seed `s = seed + t`, run a fresh
///    baseline engine (no plan) and a fresh optimized engine (plan applied)
///    to completion, both seeded with `s`.
/// 3. Diff the first trial's metrics; compute a 95% bootstrap CI over all
///    trials' paired deltas.
///
/// Neither rerun touches `engine` — each trial builds its own `Engine` over
/// a clone of `engine`'s topology. Rejects with the engine's own lifecycle
/// error unless `engine` is COMPLETED or `force` is set.
pub fn rerun_optimized(
    engine: &Engine,
    seed: u64,
    trials: usize,
    force: bool,
) -> EvaluatorResult<RerunResult> {
    if !force {
        engine.require_completed()?;
    }

    let snapshot = build_optimizer_input(engine);
    let plan = optimize_from_sim(&snapshot, Some(seed))?;
    let topology = engine.topology().clone();

    let trials = trials.max(1);
    let seeds_used: Vec<u64> = (0..trials as u64).map(|i| seed + i).collect();

    let mut baselines = Vec::with_capacity(trials);
    let mut optimizeds = Vec::with_capacity(trials);
    let mut delta_avg = Vec::with_capacity(trials);
    let mut delta_dur = Vec::with_capacity(trials);

    for &s in &seeds_used {
        let baseline = run_to_completion(topology.clone(), s, None)?;
        let optimized = run_to_completion(topology.clone(), s, Some(plan.clone()))?;

        delta_avg.push(baseline.avg_delay_min - optimized.avg_delay_min);
        delta_dur.push(baseline.duration_sec - optimized.duration_sec);

        baselines.push(baseline);
        optimizeds.push(optimized);
    }

    let avg_delay_min_delta_mean = mean(&delta_avg);
    let duration_sec_delta_mean = mean(&delta_dur);
    let avg_delay_min_delta_ci95 = paired_bootstrap_ci(&delta_avg);
    let duration_sec_delta_ci95 = paired_bootstrap_ci(&delta_dur);

    let baseline_first = baselines.remove(0);
    let optimized_first = optimizeds.remove(0);
    let diff = diff_metrics(&baseline_first, &optimized_first);
    let holds_applied = plan.holds.len();

    Ok(RerunResult {
        baseline: baseline_first,
        optimized: optimized_first,
        plan,
        diff,
        meta: RerunMeta {
            trials,
            seeds_used,
            holds_applied,
            avg_delay_min_delta_mean,
            avg_delay_min_delta_ci95,
            duration_sec_delta_mean,
            duration_sec_delta_ci95,
        },
    })
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        0.0
    } else {
        xs.iter().sum::<f64>() / xs.len() as f64
    }
}

fn run_to_completion(topology: Topology, seed: u64, plan: Option<Plan>) -> EvaluatorResult<RunMetrics> {
    let mut engine = EngineBuilder::new(topology).seed(seed).build()?;
    if let Some(plan) = plan {
        engine.apply_plan(plan);
    }
    engine.start()?;
    for _ in 0..MAX_TICKS {
        if engine.lifecycle() == Lifecycle::Completed {
            break;
        }
        engine.step();
    }
    Ok(engine.get_state_message().metrics)
}
