//! Fluent construction of an [`Engine`].

use rail_topology::Topology;

use crate::engine::Engine;
use crate::error::EngineResult;

/// Builds an [`Engine`] over a fixed topology and RNG seed.
///
/// `build()` runs the engine's internal `reset()` once, so the returned
/// engine is always a freshly initialized, valid IDLE instance.
pub struct EngineBuilder {
    topology: Topology,
    seed: u64,
}

impl EngineBuilder {
    pub fn new(topology: Topology) -> Self {
        Self { topology, seed: 0 }
    }

    /// Seed the engine's deterministic RNG (start placement stagger,
    /// initial delay draws). Defaults to `0`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> EngineResult<Engine> {
        Engine::new(self.topology, self.seed)
    }
}
