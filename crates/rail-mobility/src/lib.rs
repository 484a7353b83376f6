//! `rail-mobility` — per-tick train movement, block gating, and headway
//! enforcement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|--------------------------------------------------------|
//! | [`occupancy`]| `BlockOccupancy`, `BlockIssue`, `IssueKind`            |
//! | [`event`]    | `Event`, `EventKind`, `EventIdGen`                     |
//! | [`movement`] | `step_train`, `MobilityParams` — the per-train gate    |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                   |
//!
//! # Movement model
//!
//! A train occupying a block is either dwelling (station stop countdown),
//! travelling (waiting for `will_exit_at`), or blocked at its block boundary
//! by one of three gates checked in order: an active [`rail_plan::Plan`]
//! hold, destination-block occupancy or issue, and finally the headway
//! timer since the destination block's last exit. Wait time spent behind
//! any gate accrues to `waiting_sec` and is surfaced as `delay_minutes`.

pub mod error;
pub mod event;
pub mod movement;
pub mod occupancy;

#[cfg(test)]
mod tests;

pub use error::{MobilityError, MobilityResult};
pub use event::{Event, EventIdGen, EventKind};
pub use movement::{block_travel_seconds, step_train, MobilityParams, StepOutcome};
pub use occupancy::{BlockIssue, BlockOccupancy, IssueKind};
