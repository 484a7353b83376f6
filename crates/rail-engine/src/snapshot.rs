//! Wire-shaped state snapshot returned by `Engine::get_state_message`.

use serde::Serialize;

use rail_mobility::IssueKind;

use crate::engine::Engine;
use crate::lifecycle::Lifecycle;

#[derive(Clone, Debug, Serialize)]
pub struct IssueSummary {
    pub block_id: String,
    pub kind: String,
    pub since_iso: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BlockSummary {
    pub id: String,
    pub name: String,
    pub occupied_by: Option<String>,
    pub issue: Option<IssueSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrainSummary {
    pub id: String,
    pub name: String,
    pub priority: String,
    pub current_block: String,
    pub next_block: Option<String>,
    pub delay_minutes: f64,
    pub waiting_sec: f64,
    pub dwell_sec_remaining: f64,
    pub speed_kmh: f64,
    pub entered_block_at: Option<String>,
    pub will_exit_at: Option<String>,
    pub eta_next: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrainDelay {
    pub id: String,
    pub name: String,
    pub delay_min: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct BlockOccupancyMetric {
    pub id: String,
    pub occupied_sec: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Metrics {
    pub avg_delay_min: f64,
    pub trains_on_line: usize,
    pub duration_sec: f64,
    pub by_train: Vec<TrainDelay>,
    pub by_block: Vec<BlockOccupancyMetric>,
    /// Placeholder — conflict deconfliction counting is not tracked yet.
    pub conflicts_resolved: u32,
    /// Placeholder — no energy model is implemented yet.
    pub energy_efficiency: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct StateMessage {
    pub sim_time_iso: String,
    pub status: String,
    pub headway_sec: f64,
    pub dwell_sec: f64,
    pub simulation_speed: f64,
    pub blocks: Vec<BlockSummary>,
    pub trains: Vec<TrainSummary>,
    pub issues: Vec<IssueSummary>,
    pub metrics: Metrics,
}

/// Build the current `StateMessage` for `engine`.
///
/// Placeholder per-block occupied time (`by_block`) is always `0.0`, and
/// `conflicts_resolved`/`energy_efficiency` are always `0`/`0.0` —
/// occupancy-time, conflict-count, and energy tracking are not implemented
/// yet.
pub fn build_state_message(engine: &Engine) -> StateMessage {
    let blocks: Vec<BlockSummary> = engine
        .topology
        .blocks()
        .iter()
        .enumerate()
        .map(|(idx, b)| {
            let block_idx = rail_core::BlockIdx(idx as u32);
            let occupied_by = engine
                .occupancy
                .occupant(block_idx)
                .map(|t| engine.trains.id[t.index()].clone());
            let issue = engine.occupancy.issue(block_idx).map(|i| IssueSummary {
                block_id: b.id.clone(),
                kind: issue_kind_str(i.kind).to_string(),
                since_iso: engine.clock.instant_iso(i.since),
            });
            BlockSummary {
                id: b.id.clone(),
                name: b.name.clone(),
                occupied_by,
                issue,
            }
        })
        .collect();

    let issues: Vec<IssueSummary> = blocks
        .iter()
        .filter_map(|b| b.issue.clone())
        .collect();

    let trains: Vec<TrainSummary> = engine
        .trains
        .train_ids()
        .map(|t| {
            let i = t.index();
            let next_block = engine
                .trains
                .peek_next_block(t)
                .map(|b| engine.topology.block(b).id.clone());
            let will_exit_at_iso = engine.clock.instant_iso(engine.trains.will_exit_at[i]);
            TrainSummary {
                id: engine.trains.id[i].clone(),
                name: engine.trains.name[i].clone(),
                priority: engine.trains.priority[i].to_string(),
                current_block: engine.topology.block(engine.trains.current_block[i]).id.clone(),
                eta_next: next_block.as_ref().map(|_| will_exit_at_iso.clone()),
                next_block,
                delay_minutes: engine.trains.delay_minutes[i],
                waiting_sec: engine.trains.waiting_sec[i],
                dwell_sec_remaining: engine.trains.dwell_remaining[i],
                speed_kmh: engine.trains.speed_kmh[i],
                entered_block_at: Some(engine.clock.instant_iso(engine.trains.entered_block_at[i])),
                will_exit_at: Some(will_exit_at_iso),
            }
        })
        .collect();

    let by_train: Vec<TrainDelay> = trains
        .iter()
        .map(|t| TrainDelay {
            id: t.id.clone(),
            name: t.name.clone(),
            delay_min: t.delay_minutes,
        })
        .collect();
    let by_block: Vec<BlockOccupancyMetric> = blocks
        .iter()
        .map(|b| BlockOccupancyMetric {
            id: b.id.clone(),
            occupied_sec: 0.0,
        })
        .collect();

    let avg_delay_min = if trains.is_empty() {
        0.0
    } else {
        let sum: f64 = trains.iter().map(|t| t.delay_minutes).sum();
        (sum / trains.len() as f64 * 10.0).round() / 10.0
    };

    let status = match engine.lifecycle {
        Lifecycle::Idle => "IDLE",
        Lifecycle::Running => "RUNNING",
        Lifecycle::Completed => "COMPLETED",
    }
    .to_string();

    StateMessage {
        sim_time_iso: engine.clock.now_iso(),
        status,
        headway_sec: engine.params.headway_sec,
        dwell_sec: engine.params.dwell_sec,
        simulation_speed: engine.params.simulation_speed,
        blocks,
        trains,
        issues,
        metrics: Metrics {
            avg_delay_min,
            trains_on_line: engine.trains.count,
            duration_sec: (engine.clock.elapsed.0 - engine.run_start.0).max(0.0),
            by_train,
            by_block,
            conflicts_resolved: 0,
            energy_efficiency: 0.0,
        },
    }
}

fn issue_kind_str(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::Blocked => "BLOCKED",
        IssueKind::SignalFailure => "SIGNAL_FAILURE",
        IssueKind::Maintenance => "MAINTENANCE",
    }
}
