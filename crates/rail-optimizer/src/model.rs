//! Input records for the block-interval scheduling model.

/// One train's occupancy of one block, in route order.
///
/// A train's route contributes one `TrainRouteBlock` per remaining block
/// from its current position to the end of its route. Order within a train
/// (insertion order in the slice passed to [`crate::DispatchOptimizer::optimize`])
/// is the precedence order: block `k` must be entered before block `k+1`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainRouteBlock {
    pub train_id: String,
    pub block_id: String,
    pub is_station: bool,
    /// Seconds the train dwells if `is_station`, otherwise ignored.
    pub dwell_sec: i64,
    /// Seconds the train takes to traverse the block if not a station.
    pub travel_sec: i64,
}

impl TrainRouteBlock {
    pub fn duration_sec(&self) -> i64 {
        (if self.is_station { self.dwell_sec } else { self.travel_sec }).max(1)
    }
}

/// Tunable knobs for [`crate::DispatchOptimizer`].
///
/// Values are clamped at construction time rather than rejected, matching
/// the clamp-not-reject policy used for the engine's own runtime parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimizerParams {
    /// Scheduling horizon, in seconds past `now_sec`.
    pub max_time_sec: i64,
    /// Minimum separation between successive occupants of the same block.
    /// A value of `0` disables the headway constraint entirely.
    pub headway_sec: i64,
    /// Solver time budget. `microlp` has no incremental cutoff, so this is
    /// carried for API parity and future solver swaps rather than enforced.
    pub time_limit_sec: f64,
    pub num_workers: u32,
}

impl OptimizerParams {
    pub fn new(max_time_sec: i64, headway_sec: i64, time_limit_sec: f64, num_workers: u32) -> Self {
        Self {
            max_time_sec: max_time_sec.max(1),
            headway_sec: headway_sec.max(0),
            time_limit_sec: time_limit_sec.max(0.1),
            num_workers: num_workers.max(1),
        }
    }
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self::new(600, 120, 2.0, 4)
    }
}
