//! MILP-based dispatch optimizer.
//!
//! Given each train's remaining route as a sequence of block occupations,
//! [`DispatchOptimizer::optimize`] finds start/end times for every
//! occupation that respect per-train ordering and per-block headway, and
//! minimizes the time the last train finishes. It has no notion of the
//! live simulation — callers translate a running engine's state into
//! [`TrainRouteBlock`] records and translate the resulting [`Schedule`]
//! back into holds; both of those live in `rail-adapter`.

mod model;
mod solve;

#[cfg(test)]
mod tests;

pub use model::{OptimizerParams, TrainRouteBlock};
pub use solve::{DispatchOptimizer, Schedule};
