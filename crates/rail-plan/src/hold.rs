//! Hold directives and dispatch plans.
//!
//! A [`HoldDirective`] is an optimizer-proposed lower bound on when a
//! specific train may enter a specific block, expressed as a seconds offset
//! from the sim-time at which the plan is applied. A [`Plan`] is an
//! unordered set of directives, applied atomically.

use serde::{Deserialize, Serialize};

use rail_core::SimTime;

use crate::error::{PlanError, PlanResult};
use crate::index::HoldIndex;

// ── HoldDirective ─────────────────────────────────────────────────────────────

/// A single hold: train `train_id` may not enter `block_id` before
/// `not_before_offset_sec` seconds have elapsed from plan-apply time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldDirective {
    pub train_id: String,
    pub block_id: String,
    pub not_before_offset_sec: u32,
}

impl HoldDirective {
    /// Construct a directive, validating non-empty ids.
    ///
    /// `not_before_offset_sec` is `u32` so negative offsets are rejected at
    /// the type level; malformed directives arriving from JSON (negative or
    /// non-integer offsets) are caught during deserialization upstream and
    /// never reach this constructor.
    pub fn new(
        train_id: impl Into<String>,
        block_id: impl Into<String>,
        not_before_offset_sec: u32,
    ) -> PlanResult<Self> {
        let train_id = train_id.into();
        let block_id = block_id.into();
        if train_id.is_empty() {
            return Err(PlanError::Malformed("train_id must not be empty".into()));
        }
        if block_id.is_empty() {
            return Err(PlanError::Malformed("block_id must not be empty".into()));
        }
        Ok(Self {
            train_id,
            block_id,
            not_before_offset_sec,
        })
    }

    #[inline]
    pub fn key(&self) -> (&str, &str) {
        (&self.train_id, &self.block_id)
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// An unordered set of [`HoldDirective`]s.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Plan {
    pub holds: Vec<HoldDirective>,
}

impl Plan {
    pub fn new(holds: Vec<HoldDirective>) -> Self {
        Self { holds }
    }

    pub fn empty() -> Self {
        Self { holds: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.holds.is_empty()
    }

    /// Dedup by `(train_id, block_id)`, keeping the maximum offset for each
    /// key. Idempotent: `merged().merged() == merged()`.
    pub fn merged(&self) -> Plan {
        let mut best: Vec<HoldDirective> = Vec::with_capacity(self.holds.len());
        for h in &self.holds {
            match best.iter_mut().find(|b: &&mut HoldDirective| b.key() == h.key()) {
                Some(existing) => {
                    if h.not_before_offset_sec > existing.not_before_offset_sec {
                        existing.not_before_offset_sec = h.not_before_offset_sec;
                    }
                }
                None => best.push(h.clone()),
            }
        }
        Plan { holds: best }
    }

    /// Materialize an absolute-deadline index, anchored at `apply_sim_time`.
    ///
    /// Each directive becomes `apply_sim_time + offset`. Call this once, at
    /// `apply_plan()` time — the index, not the plan, is what the engine's
    /// tick loop consults on every step.
    pub fn to_index(&self, apply_sim_time: SimTime) -> HoldIndex {
        let merged = self.merged();
        let mut index = HoldIndex::new();
        for h in &merged.holds {
            let deadline = apply_sim_time.offset(h.not_before_offset_sec as f64);
            index.insert(h.train_id.clone(), h.block_id.clone(), deadline);
        }
        index
    }
}
