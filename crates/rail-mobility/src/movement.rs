//! Per-train movement: dwell countdown, block-traversal timing, and the
//! three-tier entry gate (plan hold, then occupancy/issue, then headway).

use rail_core::{BlockIdx, SimTime, TrainIdx};
use rail_plan::HoldIndex;
use rail_topology::Topology;
use rail_train::TrainStore;

use crate::event::{Event, EventIdGen, EventKind};
use crate::occupancy::BlockOccupancy;

/// Runtime parameters governing movement, distinct from the fixed roster
/// and topology data. All are updatable at runtime via `update_parameters`.
#[derive(Copy, Clone, Debug)]
pub struct MobilityParams {
    pub headway_sec: f64,
    pub dwell_sec: f64,
    pub max_block_travel_sec: f64,
}

impl Default for MobilityParams {
    fn default() -> Self {
        Self {
            headway_sec: 120.0,
            dwell_sec: 60.0,
            max_block_travel_sec: 45.0,
        }
    }
}

/// Seconds required to traverse a block at `effective_speed_kmh`, clamped to
/// `[1, params.max_block_travel_sec]`. Exposed for engine-side train
/// placement, which computes the same quantity outside of `step_train`.
pub fn block_travel_seconds(length_km: f64, effective_speed_kmh: f64, params: &MobilityParams) -> f64 {
    let raw = (length_km / effective_speed_kmh) * 3600.0;
    raw.clamp(1.0, params.max_block_travel_sec)
}

/// Result of attempting to advance one train by one tick.
#[derive(Default)]
pub struct StepOutcome {
    pub events: Vec<Event>,
    /// `true` if the train moved into a new block this tick — used by the
    /// engine's idle-fuse check.
    pub moved: bool,
    /// `true` if the train reached the end of its route this tick.
    pub completed: bool,
}

/// Advance a single train by one tick of `dt` seconds, ending at sim-time `now`.
///
/// The caller must not invoke this for a train that is already completed
/// (terminus reached and `will_exit_at` passed on a prior tick).
#[allow(clippy::too_many_arguments)]
pub fn step_train(
    train: TrainIdx,
    now: SimTime,
    dt: f64,
    tick_count: u64,
    topology: &Topology,
    trains: &mut TrainStore,
    occupancy: &mut BlockOccupancy,
    holds: &HoldIndex,
    params: &MobilityParams,
    ids: &mut EventIdGen,
) -> StepOutcome {
    let i = train.index();
    let mut outcome = StepOutcome::default();

    if trains.dwell_remaining[i] > 0.0 {
        trains.dwell_remaining[i] = (trains.dwell_remaining[i] - dt).max(0.0);
        return outcome;
    }

    if now.0 < trains.will_exit_at[i].0 {
        return outcome;
    }

    if trains.is_at_terminus(train) {
        outcome.completed = true;
        return outcome;
    }

    let next_block = match trains.peek_next_block(train) {
        Some(b) => b,
        None => {
            outcome.completed = true;
            return outcome;
        }
    };
    let current_block = trains.current_block[i];
    let train_id = trains.id[i].clone();
    let next_block_id = topology.block(next_block).id.clone();

    if holds.is_held(&train_id, &next_block_id, now) {
        accrue_wait(trains, i, dt);
        return outcome;
    }
    if !occupancy.is_free(next_block) || occupancy.has_issue(next_block) {
        accrue_wait(trains, i, dt);
        return outcome;
    }
    if !occupancy.headway_elapsed(next_block, now, params.headway_sec) {
        accrue_wait(trains, i, dt);
        return outcome;
    }

    occupancy.vacate(current_block, now);
    let current_block_id = topology.block(current_block).id.clone();
    outcome.events.push(Event::new(
        ids.next(tick_count),
        EventKind::TrainDeparted,
        Some(current_block_id),
        Some(train_id.clone()),
        now,
        None,
    ));

    trains.route_index[i] += 1;
    trains.current_block[i] = next_block;
    trains.next_block[i] = trains.peek_next_block(train).unwrap_or(BlockIdx::INVALID);
    occupancy.occupy(next_block, train);
    trains.entered_block_at[i] = now;

    let block = topology.block(next_block);
    let effective_speed_kmh = trains.speed_kmh[i].min(block.max_speed_kmh);
    let travel_sec = block_travel_seconds(block.length_km, effective_speed_kmh, params);
    trains.will_exit_at[i] = now.offset(travel_sec);
    trains.dwell_remaining[i] = if block.is_station() { params.dwell_sec } else { 0.0 };
    trains.waiting_sec[i] = 0.0;

    outcome.events.push(Event::new(
        ids.next(tick_count),
        EventKind::TrainArrived,
        Some(next_block_id),
        Some(train_id),
        now,
        None,
    ));
    outcome.moved = true;
    outcome
}

/// Accrue one tick of wait time, converting completed minutes into
/// `delay_minutes` as they accumulate. `delay_minutes` is a running total
/// across the whole run and is never decreased; only `waiting_sec` wraps.
fn accrue_wait(trains: &mut TrainStore, i: usize, dt: f64) {
    trains.waiting_sec[i] += dt;
    if trains.waiting_sec[i] >= 60.0 {
        let whole_minutes = (trains.waiting_sec[i] / 60.0).floor();
        trains.delay_minutes[i] += whole_minutes;
        trains.waiting_sec[i] -= 60.0 * whole_minutes;
    }
}
