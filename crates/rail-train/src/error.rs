//! Train-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("train {0:?} has an empty route")]
    EmptyRoute(String),

    #[error("train {train:?} route references unknown block {block:?}")]
    UnknownBlockInRoute { train: String, block: String },

    #[error("unknown train id {0:?}")]
    UnknownTrain(String),
}

pub type TrainResult<T> = Result<T, TrainError>;
