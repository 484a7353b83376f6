//! `rail-topology` — block/station network and topology-file loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|------------------------------------------------------|
//! | [`topology`] | `Topology`, `TopologyBuilder`, `BlockStatic`, `Station` |
//! | [`loader`]   | `load_topology` (JSON topology files)               |
//! | [`error`]    | `TopologyError`, `TopologyResult<T>`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod loader;
pub mod topology;


pub use error::{TopologyError, TopologyResult};
pub use loader::{load_topology, load_topology_reader, load_topology_str};
pub use topology::{BlockStatic, Platform, Station, Topology, TopologyBuilder};
