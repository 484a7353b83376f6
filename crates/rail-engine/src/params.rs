//! Runtime-updatable simulation parameters.

/// Parameters that `update_parameters` may change after construction.
///
/// `max_block_travel_sec` is deliberately absent — it is a fixed constant of
/// the movement model, not a tunable runtime parameter.
#[derive(Copy, Clone, Debug)]
pub struct EngineParams {
    pub headway_sec: f64,
    pub dwell_sec: f64,
    pub energy_stop_penalty: f64,
    pub simulation_speed: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            headway_sec: 120.0,
            dwell_sec: 60.0,
            energy_stop_penalty: 0.0,
            simulation_speed: 1.0,
        }
    }
}

/// A partial update, as received from the external `update_parameters` call.
/// Any field left `None` leaves the corresponding parameter unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParamUpdate {
    pub headway_sec: Option<f64>,
    pub dwell_sec: Option<f64>,
    pub energy_stop_penalty: Option<f64>,
    pub simulation_speed: Option<f64>,
}

impl EngineParams {
    /// Apply `update`, clamping `simulation_speed` to `[0.1, 10.0]` and
    /// floor-clamping `headway_sec`/`dwell_sec`/`energy_stop_penalty` at
    /// `0.0` rather than rejecting out-of-range values.
    pub fn apply(&mut self, update: ParamUpdate) {
        if let Some(h) = update.headway_sec {
            self.headway_sec = h.max(0.0);
        }
        if let Some(d) = update.dwell_sec {
            self.dwell_sec = d.max(0.0);
        }
        if let Some(e) = update.energy_stop_penalty {
            self.energy_stop_penalty = e.max(0.0);
        }
        if let Some(s) = update.simulation_speed {
            self.simulation_speed = s.clamp(0.1, 10.0);
        }
    }
}
