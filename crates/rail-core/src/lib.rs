//! `rail-core` — foundational types for the railway dispatch simulator.
//!
//! This crate is a dependency of every other `rail-*` crate.  It
//! intentionally has no `rail-*` dependencies and minimal external ones
//! (`rand`, `chrono`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `BlockIdx`, `TrainIdx` — dense SoA indices        |
//! | [`time`]   | `SimTime`, `SimClock` — the simulation clock      |
//! | [`rng`]    | `SimRng` — per-instance deterministic RNG         |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{BlockIdx, TrainIdx};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
