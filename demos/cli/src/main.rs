//! cli — runs the fixed eight-train roster over a demo topology to
//! completion, then (with `optimize`) solves a hold plan from the finished
//! state and reruns a baseline-vs-optimized A/B batch.
//!
//! Usage: `rail-demo-cli [optimize] [--seed N] [--trials N]`

use std::time::Instant;

use anyhow::Result;

use rail_engine::{Engine, EngineBuilder, Lifecycle};
use rail_evaluator::rerun_optimized;
use rail_topology::load_topology_str;

const TOPOLOGY_JSON: &str = include_str!("../topology.json");
const DEFAULT_SEED: u64 = 42;
const DEFAULT_TRIALS: usize = 5;
const MAX_TICKS: u64 = 20_000;

struct Args {
    optimize: bool,
    json: bool,
    seed: u64,
    trials: usize,
}

fn parse_args() -> Args {
    let mut args = Args {
        optimize: false,
        json: false,
        seed: DEFAULT_SEED,
        trials: DEFAULT_TRIALS,
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "optimize" => args.optimize = true,
            "--json" => args.json = true,
            "--seed" => {
                if let Some(v) = raw.next() {
                    args.seed = v.parse().unwrap_or(DEFAULT_SEED);
                }
            }
            "--trials" => {
                if let Some(v) = raw.next() {
                    args.trials = v.parse().unwrap_or(DEFAULT_TRIALS);
                }
            }
            _ => {}
        }
    }
    args
}

fn run_to_completion(engine: &mut Engine) {
    engine.start().expect("start from IDLE always succeeds");
    for _ in 0..MAX_TICKS {
        if engine.lifecycle() == Lifecycle::Completed {
            break;
        }
        engine.step();
    }
}

fn print_metrics(label: &str, metrics: &rail_engine::Metrics) {
    println!("{label}");
    println!(
        "  avg_delay_min: {:.1}   trains_on_line: {}   duration_sec: {:.0}",
        metrics.avg_delay_min, metrics.trains_on_line, metrics.duration_sec
    );
    for t in &metrics.by_train {
        println!("    {:<6} {:<12} delay={:.1} min", t.id, t.name, t.delay_min);
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    println!("=== railway dispatch demo ===");
    println!("seed: {}  trials: {}  optimize: {}", args.seed, args.trials, args.optimize);
    println!();

    let topology = load_topology_str(TOPOLOGY_JSON)?;
    let mut engine = EngineBuilder::new(topology).seed(args.seed).build()?;

    let t0 = Instant::now();
    run_to_completion(&mut engine);
    let elapsed = t0.elapsed();

    println!(
        "live run reached {} after {:.3}s wall-clock",
        engine.lifecycle(),
        elapsed.as_secs_f64()
    );

    let state = engine.get_state_message();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    print_metrics("final state", &state.metrics);
    println!();

    if args.optimize {
        let result = rerun_optimized(&engine, args.seed, args.trials, false)?;

        print_metrics("baseline (no holds)", &result.baseline);
        println!();
        print_metrics("optimized (plan applied)", &result.optimized);
        println!();

        println!("diff (baseline - optimized; positive = improvement)");
        println!(
            "  delta_avg_delay_min: {:.2}   delta_duration_sec: {:.2}",
            result.diff.delta_avg_delay_min, result.diff.delta_duration_sec
        );
        for t in &result.diff.trains {
            println!("    {:<6} {:<12} delta_delay={:.2} min", t.train_id, t.name, t.delta_delay_min);
        }
        println!();

        println!("batch meta");
        println!("  trials: {}   seeds_used: {:?}", result.meta.trials, result.meta.seeds_used);
        println!("  holds_applied: {}", result.meta.holds_applied);
        println!(
            "  avg_delay_min_delta_mean: {:.3}   ci95: [{:.3}, {:.3}]",
            result.meta.avg_delay_min_delta_mean,
            result.meta.avg_delay_min_delta_ci95.0,
            result.meta.avg_delay_min_delta_ci95.1
        );
        println!(
            "  duration_sec_delta_mean: {:.3}   ci95: [{:.3}, {:.3}]",
            result.meta.duration_sec_delta_mean,
            result.meta.duration_sec_delta_ci95.0,
            result.meta.duration_sec_delta_ci95.1
        );
    }

    Ok(())
}
