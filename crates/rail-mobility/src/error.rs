//! Mobility-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("unknown block id {0:?}")]
    UnknownBlock(String),

    #[error("unknown train id {0:?}")]
    UnknownTrain(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
