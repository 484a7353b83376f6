//! `rail-engine` — the discrete-time simulation engine: lifecycle, tick
//! loop, plan application, and injection/parameter controls.
//!
//! # Tick loop
//!
//! ```text
//! step():
//!   ① advance sim_time by base_tick_sec × simulation_speed
//!   ② for each train, in roster order: gate on hold / occupancy+issue /
//!      headway, else depart current block and enter the next
//!   ③ if no train moved this tick, increment the idle fuse; else reset it
//!   ④ mark COMPLETED on natural completion or idle-fuse trip, emitting
//!      exactly one SIMULATION_COMPLETED event on the tick that does so
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|--------------------------------------------------------|
//! | [`lifecycle`] | `Lifecycle` — IDLE / RUNNING / COMPLETED             |
//! | [`params`]    | `EngineParams`, `ParamUpdate` — runtime-tunable knobs |
//! | [`snapshot`]  | `StateMessage` and friends — the wire-shaped view    |
//! | [`engine`]    | `Engine` — the tick loop and public contract         |
//! | [`builder`]   | `EngineBuilder`                                      |
//! | [`observer`]  | `EngineObserver`, `NoopObserver`                     |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                     |

pub mod builder;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod observer;
pub mod params;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use lifecycle::Lifecycle;
pub use observer::{EngineObserver, NoopObserver};
pub use params::{EngineParams, ParamUpdate};
pub use snapshot::{
    BlockOccupancyMetric, BlockSummary, IssueSummary, Metrics, StateMessage, TrainDelay,
    TrainSummary,
};
