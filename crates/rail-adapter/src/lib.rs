//! Bridges a running [`rail_engine::Engine`] and the MILP dispatch
//! optimizer: [`build_optimizer_input`] captures a serializable snapshot of
//! engine state, and [`optimize_from_sim`] turns that snapshot into a
//! [`rail_plan::Plan`] ready for `Engine::apply_plan`.

mod error;
mod optimize;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{AdapterError, AdapterResult};
pub use optimize::optimize_from_sim;
pub use snapshot::{
    build_optimizer_input, OptimizerBlockView, OptimizerParamsView, OptimizerSnapshot,
    OptimizerTrainView,
};
