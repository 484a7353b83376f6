//! Materialized hold index consulted by the engine's per-tick gating check.

use std::collections::HashMap;

use rail_core::SimTime;

/// Maps `(train_id, block_id)` to the absolute sim-time before which the
/// train may not enter that block.
#[derive(Clone, Debug, Default)]
pub struct HoldIndex {
    deadlines: HashMap<(String, String), SimTime>,
}

impl HoldIndex {
    pub fn new() -> Self {
        Self {
            deadlines: HashMap::new(),
        }
    }

    pub fn insert(&mut self, train_id: String, block_id: String, deadline: SimTime) {
        self.deadlines.insert((train_id, block_id), deadline);
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// `true` if `train_id` is held from entering `block_id` at `now`.
    pub fn is_held(&self, train_id: &str, block_id: &str, now: SimTime) -> bool {
        match self.deadlines.get(&(train_id.to_string(), block_id.to_string())) {
            Some(deadline) => now.0 < deadline.0,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
