//! Engine observer trait for progress reporting and data collection.

use rail_mobility::Event;

use crate::snapshot::StateMessage;

/// Callbacks invoked by [`Engine::step_observed`][crate::Engine::step_observed]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait EngineObserver {
    /// Called just before a tick runs, with the tick number about to start.
    fn on_tick_start(&mut self, _tick_count: u64) {}

    /// Called after a tick completes, with the events it produced.
    fn on_tick_end(&mut self, _tick_count: u64, _events: &[Event]) {}

    /// Called whenever a caller pulls a snapshot via `get_state_message`.
    fn on_snapshot(&mut self, _state: &StateMessage) {}

    /// Called once, on the tick that transitions the engine to COMPLETED.
    fn on_completed(&mut self) {}
}

/// An [`EngineObserver`] that does nothing.
#[derive(Default)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
