//! Topology-subsystem error type.

use thiserror::Error;

/// Errors produced while building or loading a [`crate::Topology`].
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("unknown block id {0:?}")]
    UnknownBlock(String),

    #[error("duplicate block id {0:?}")]
    DuplicateBlock(String),

    #[error("block references unknown station id {0:?}")]
    UnknownStation(String),
    #[error("invalid block attribute: {0}")]
    InvalidBlockAttribute(String),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
