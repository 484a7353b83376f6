//! The core simulation engine: lifecycle, tick loop, plan application, and
//! the injection/parameter controls exposed to the transport layer.

use chrono::Utc;

use rail_core::{BlockIdx, SimClock, SimRng, SimTime, TrainIdx};
use rail_mobility::{
    block_travel_seconds, step_train, BlockOccupancy, Event, EventIdGen, EventKind, IssueKind,
    MobilityParams,
};
use rail_plan::{HoldIndex, Plan};
use rail_topology::Topology;
use rail_train::{build_default_roster, TrainStore};

use crate::error::{EngineError, EngineResult};
use crate::lifecycle::Lifecycle;
use crate::observer::EngineObserver;
use crate::params::{EngineParams, ParamUpdate};
use crate::snapshot::{self, StateMessage};

/// Consecutive ticks with no train movement before the idle fuse forces
/// COMPLETED.
const IDLE_LIMIT: u32 = 200;

/// Fixed cap on block-traversal time; a demo-visibility constant, not a
/// runtime-tunable parameter.
const MAX_BLOCK_TRAVEL_SEC: f64 = 45.0;

/// Simulated seconds advanced per `step()` at `simulation_speed == 1.0`.
const BASE_TICK_SEC: f64 = 5.0;

/// Bound on retained event history; old events are dropped oldest-first.
const RECENT_EVENTS_CAP: usize = 500;

/// The stateful railway dispatch simulation.
///
/// Not thread-safe: callers must serialize `step`, `start`, `reset`,
/// `apply_plan`, the injection methods, and `get_state_message`.
pub struct Engine {
    pub(crate) topology: Topology,
    pub(crate) trains: TrainStore,
    pub(crate) occupancy: BlockOccupancy,
    pub(crate) clock: SimClock,
    rng: SimRng,
    seed: u64,
    hold_index: HoldIndex,
    plan: Option<Plan>,
    pub(crate) params: EngineParams,
    pub(crate) lifecycle: Lifecycle,
    idle_ticks: u32,
    tick_count: u64,
    event_ids: EventIdGen,
    recent_events: Vec<Event>,
    pub(crate) run_start: SimTime,
    completion_emitted: bool,
    placement_warnings: Vec<String>,
}

impl Engine {
    /// Construct a fresh engine over `topology` and immediately run
    /// `reset()`, so a newly built engine is always in a valid IDLE state.
    pub(crate) fn new(topology: Topology, seed: u64) -> EngineResult<Self> {
        let headway_sec = topology.default_headway_sec as f64;
        let dwell_sec = topology.default_dwell_sec as f64;
        let trains = build_default_roster(&topology)?;
        let block_count = topology.block_count();

        let mut engine = Engine {
            occupancy: BlockOccupancy::new(block_count),
            trains,
            topology,
            clock: SimClock::new(Utc::now(), BASE_TICK_SEC),
            rng: SimRng::new(seed),
            seed,
            hold_index: HoldIndex::new(),
            plan: None,
            params: EngineParams {
                headway_sec,
                dwell_sec,
                simulation_speed: 1.0,
            },
            lifecycle: Lifecycle::Idle,
            idle_ticks: 0,
            tick_count: 0,
            event_ids: EventIdGen::new(),
            recent_events: Vec::new(),
            run_start: SimTime::ZERO,
            completion_emitted: false,
            placement_warnings: Vec::new(),
        };
        engine.reset()?;
        Ok(engine)
    }

    /// Re-materialize a fresh train roster on the already-loaded topology,
    /// clear the active plan, and transition to IDLE. The RNG is reseeded
    /// from the engine's construction seed so `reset(); start();
    /// run-to-completion` reproduces byte-identical runs.
    pub fn reset(&mut self) -> EngineResult<()> {
        self.trains = build_default_roster(&self.topology)?;
        self.occupancy = BlockOccupancy::new(self.topology.block_count());
        self.clock = SimClock::new(Utc::now(), BASE_TICK_SEC);
        self.rng = SimRng::new(self.seed);
        self.hold_index = HoldIndex::new();
        self.plan = None;
        self.params.headway_sec = self.topology.default_headway_sec as f64;
        self.params.dwell_sec = self.topology.default_dwell_sec as f64;
        self.lifecycle = Lifecycle::Idle;
        self.idle_ticks = 0;
        self.tick_count = 0;
        self.event_ids = EventIdGen::new();
        self.recent_events.clear();
        self.run_start = SimTime::ZERO;
        self.completion_emitted = false;
        self.placement_warnings.clear();
        self.place_trains();
        Ok(())
    }

    /// Scan-entire-route start placement, staggered entry, and initial
    /// delay draws, in roster order so deconfliction sees earlier trains'
    /// placements.
    ///
    /// Scans the *whole* route for a free block rather than stopping at a
    /// fixed prefix — a route whose first few blocks are all occupied must
    /// still find a free one further along. If no block in the route is
    /// free, the train is placed at index 0 anyway and a warning is
    /// recorded in `placement_warnings`.
    fn place_trains(&mut self) {
        let now = self.clock.elapsed;
        for i in 0..self.trains.count {
            let route = self.trains.route[i].clone();
            let start_index = find_free_route_index(&route, &self.occupancy).unwrap_or_else(|| {
                self.placement_warnings.push(format!(
                    "train {:?} found no free block in its route; placed at index 0",
                    self.trains.id[i]
                ));
                0
            });

            let start_block = route[start_index];
            self.trains.route_index[i] = start_index;
            self.trains.current_block[i] = start_block;
            self.trains.next_block[i] = route
                .get(start_index + 1)
                .copied()
                .unwrap_or(BlockIdx::INVALID);

            let enter_offset: f64 = self.rng.gen_range(0u32..=40) as f64;
            let entered_at = SimTime(now.0 - enter_offset);
            self.trains.entered_block_at[i] = entered_at;

            let block = self.topology.block(start_block);
            self.trains.will_exit_at[i] = if block.is_station() {
                entered_at.offset(self.params.dwell_sec)
            } else {
                let effective_speed_kmh = self.trains.speed_kmh[i].min(block.max_speed_kmh);
                let mobility_params = self.mobility_params();
                entered_at.offset(block_travel_seconds(
                    block.length_km,
                    effective_speed_kmh,
                    &mobility_params,
                ))
            };
            self.trains.dwell_remaining[i] = 0.0;
            self.trains.waiting_sec[i] = 0.0;
            self.trains.delay_minutes[i] = self.rng.gen_range(0u32..=2) as f64;

            self.occupancy.occupy(start_block, TrainIdx(i as u32));
        }
    }

    fn mobility_params(&self) -> MobilityParams {
        MobilityParams {
            headway_sec: self.params.headway_sec,
            dwell_sec: self.params.dwell_sec,
            max_block_travel_sec: MAX_BLOCK_TRAVEL_SEC,
        }
    }

    /// IDLE → RUNNING. Idempotent while RUNNING; rejected from COMPLETED.
    pub fn start(&mut self) -> EngineResult<()> {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.lifecycle = Lifecycle::Running;
                Ok(())
            }
            Lifecycle::Running => Ok(()),
            Lifecycle::Completed => Err(EngineError::StartAfterCompletion),
        }
    }

    /// Advance simulated time by one tick and run the per-train movement
    /// pass. Returns the events produced; empty unless RUNNING.
    pub fn step(&mut self) -> Vec<Event> {
        if self.lifecycle != Lifecycle::Running {
            return Vec::new();
        }

        self.tick_count += 1;
        let dt = self.clock.advance(self.params.simulation_speed);
        let now = self.clock.elapsed;
        let mobility_params = self.mobility_params();

        let mut events = Vec::new();
        let mut moved_this_tick = false;

        let train_ids: Vec<TrainIdx> = self.trains.train_ids().collect();
        for train in train_ids {
            let outcome = step_train(
                train,
                now,
                dt,
                self.tick_count,
                &self.topology,
                &mut self.trains,
                &mut self.occupancy,
                &self.hold_index,
                &mobility_params,
                &mut self.event_ids,
            );
            if outcome.moved {
                moved_this_tick = true;
            }
            events.extend(outcome.events);
        }

        if moved_this_tick {
            self.idle_ticks = 0;
        } else {
            self.idle_ticks += 1;
        }

        let should_complete = self.all_trains_finished(now) || self.idle_ticks >= IDLE_LIMIT;
        if should_complete {
            self.lifecycle = Lifecycle::Completed;
            if !self.completion_emitted {
                events.push(Event::new(
                    self.event_ids.next(self.tick_count),
                    EventKind::SimulationCompleted,
                    None,
                    None,
                    now,
                    Some("All trains reached their final blocks".to_string()),
                ));
                self.completion_emitted = true;
            }
        }

        self.record_events(&events);
        events
    }

    /// Same as [`step`](Self::step), additionally notifying `observer`
    /// around the tick — ambient, optional instrumentation mirroring the
    /// no-op-by-default observer pattern used elsewhere in this workspace.
    pub fn step_observed(&mut self, observer: &mut impl EngineObserver) -> Vec<Event> {
        observer.on_tick_start(self.tick_count + 1);
        let events = self.step();
        observer.on_tick_end(self.tick_count, &events);
        if self.lifecycle == Lifecycle::Completed {
            observer.on_completed();
        }
        events
    }

    /// Natural completion predicate: every train at its final route index,
    /// not traversing, and not dwelling.
    fn all_trains_finished(&self, now: SimTime) -> bool {
        for i in 0..self.trains.count {
            let at_end = self.trains.route_index[i] + 1 >= self.trains.route[i].len();
            let traversing = now.0 < self.trains.will_exit_at[i].0;
            let dwelling = self.trains.dwell_remaining[i] > 0.0;
            if !at_end || traversing || dwelling {
                return false;
            }
        }
        true
    }

    fn record_events(&mut self, events: &[Event]) {
        self.recent_events.extend(events.iter().cloned());
        if self.recent_events.len() > RECENT_EVENTS_CAP {
            let excess = self.recent_events.len() - RECENT_EVENTS_CAP;
            self.recent_events.drain(0..excess);
        }
    }

    /// A consistent snapshot of block/train state, KPIs, and lifecycle
    /// status. Safe in any lifecycle state.
    pub fn get_state_message(&self) -> StateMessage {
        snapshot::build_state_message(self)
    }

    /// Clamp and apply a partial parameter update.
    pub fn update_parameters(&mut self, update: ParamUpdate) {
        self.params.apply(update);
    }

    /// Add `minutes` to a train's cumulative delay and emit DELAY_INJECTED.
    pub fn inject_delay(&mut self, train_id: &str, minutes: f64) -> EngineResult<Event> {
        let idx = self
            .trains
            .index_of(train_id)
            .ok_or_else(|| EngineError::UnknownTrain(train_id.to_string()))?;
        self.trains.delay_minutes[idx.index()] += minutes;

        let event = Event::new(
            self.event_ids.next(self.tick_count),
            EventKind::DelayInjected,
            None,
            Some(train_id.to_string()),
            self.clock.elapsed,
            Some(format!("injected {minutes:.0} min delay")),
        );
        self.record_events(std::slice::from_ref(&event));
        Ok(event)
    }

    /// Set or clear the BLOCKED issue on a block, emitting BLOCK_FAILED or
    /// BLOCK_CLEARED.
    pub fn set_block_issue(&mut self, block_id: &str, blocked: bool) -> EngineResult<Event> {
        let idx = self
            .topology
            .index_of(block_id)
            .map_err(|_| EngineError::UnknownBlock(block_id.to_string()))?;
        let now = self.clock.elapsed;

        let (kind, note) = if blocked {
            self.occupancy.set_issue(idx, IssueKind::Blocked, now);
            (EventKind::BlockFailed, format!("{block_id} reported BLOCKED"))
        } else {
            self.occupancy.clear_issue(idx);
            (EventKind::BlockCleared, format!("{block_id} cleared"))
        };

        let event = Event::new(
            self.event_ids.next(self.tick_count),
            kind,
            Some(block_id.to_string()),
            None,
            now,
            Some(note),
        );
        self.record_events(std::slice::from_ref(&event));
        Ok(event)
    }

    /// Store `plan` and materialize its hold index against the current
    /// sim-time.
    pub fn apply_plan(&mut self, plan: Plan) {
        self.hold_index = plan.to_index(self.clock.elapsed);
        self.plan = Some(plan);
    }

    /// Drop the active plan and its hold index.
    pub fn clear_plan(&mut self) {
        self.plan = None;
        self.hold_index = HoldIndex::new();
    }

    /// Reject unless the engine has reached COMPLETED — the guard used by
    /// `export_snapshot`, `optimize_plan`, and `rerun_optimized` (without
    /// `force`).
    pub fn require_completed(&self) -> EngineResult<()> {
        if self.lifecycle == Lifecycle::Completed {
            Ok(())
        } else {
            Err(EngineError::NotCompleted)
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn trains(&self) -> &TrainStore {
        &self.trains
    }

    pub fn occupancy(&self) -> &BlockOccupancy {
        &self.occupancy
    }

    pub fn params(&self) -> EngineParams {
        self.params
    }

    pub fn sim_time(&self) -> SimTime {
        self.clock.elapsed
    }

    pub fn recent_events(&self) -> &[Event] {
        &self.recent_events
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn active_plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Warnings recorded by the most recent `reset()`'s train placement —
    /// one per train that found no free block anywhere in its route and was
    /// placed at index 0 instead. Empty on the common path.
    pub fn placement_warnings(&self) -> &[String] {
        &self.placement_warnings
    }
}

/// Scan `route` in order for the first block `occupancy` reports free.
/// `None` means every block in the route is currently occupied.
pub(crate) fn find_free_route_index(route: &[BlockIdx], occupancy: &BlockOccupancy) -> Option<usize> {
    route.iter().position(|&block| occupancy.is_free(block))
}
