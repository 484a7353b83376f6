//! Simulation events emitted by the movement engine.

use std::fmt;

use rail_core::SimTime;

/// Kind of event raised by the movement engine or the engine's lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    BlockFailed,
    BlockCleared,
    DelayInjected,
    TrainArrived,
    TrainDeparted,
    SimulationCompleted,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::BlockFailed => "BLOCK_FAILED",
            EventKind::BlockCleared => "BLOCK_CLEARED",
            EventKind::DelayInjected => "DELAY_INJECTED",
            EventKind::TrainArrived => "TRAIN_ARRIVED",
            EventKind::TrainDeparted => "TRAIN_DEPARTED",
            EventKind::SimulationCompleted => "SIMULATION_COMPLETED",
        };
        f.write_str(s)
    }
}

/// A single timestamped occurrence during the simulation.
///
/// `timestamp` is kept as a [`SimTime`] internally; the wire adapter
/// converts it to an ISO-8601 string anchored to the engine's `SimClock`
/// when building external-facing messages.
#[derive(Clone, Debug)]
pub struct Event {
    pub event_id: String,
    pub event_kind: EventKind,
    pub block_id: Option<String>,
    pub train_id: Option<String>,
    pub timestamp: SimTime,
    pub note: Option<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_id: String,
        event_kind: EventKind,
        block_id: Option<String>,
        train_id: Option<String>,
        timestamp: SimTime,
        note: Option<String>,
    ) -> Self {
        Self {
            event_id,
            event_kind,
            block_id,
            train_id,
            timestamp,
            note,
        }
    }
}

/// Monotonic per-tick event id generator, matching the original
/// `f"E{tick_count}-{event_counter}"` format.
#[derive(Default)]
pub struct EventIdGen {
    counter: u64,
}

impl EventIdGen {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    pub fn next(&mut self, tick_count: u64) -> String {
        self.counter += 1;
        format!("E{tick_count}-{}", self.counter)
    }
}
