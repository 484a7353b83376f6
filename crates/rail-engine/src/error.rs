//! Errors the engine's public contract can return.

use thiserror::Error;

use rail_topology::TopologyError;
use rail_train::TrainError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown train id {0:?}")]
    UnknownTrain(String),

    #[error("unknown block id {0:?}")]
    UnknownBlock(String),

    #[error("start() rejected: engine is COMPLETED, call reset() first")]
    StartAfterCompletion,

    #[error("operation requires a COMPLETED engine")]
    NotCompleted,

    #[error("invalid topology: {0}")]
    Topology(#[from] TopologyError),

    #[error("invalid train roster: {0}")]
    Train(#[from] TrainError),
}

pub type EngineResult<T> = Result<T, EngineError>;
