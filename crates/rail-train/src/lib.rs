//! `rail-train` — Structure-of-Arrays train roster storage.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|---------------------------------------------------|
//! | [`store`]    | `TrainStore` (SoA train state)                   |
//! | [`roster`]   | `build_default_roster` — the fixed eight trains   |
//! | [`priority`] | `Priority` (EXPRESS/REGIONAL/FREIGHT)            |
//! | [`error`]    | `TrainError`, `TrainResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Priority`.    |

pub mod error;
pub mod priority;
pub mod roster;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{TrainError, TrainResult};
pub use priority::Priority;
pub use roster::build_default_roster;
pub use store::TrainStore;
