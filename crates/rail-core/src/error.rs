//! Framework error type.
//!
//! Sub-crates define their own error enums and convert into/wrap `CoreError`
//! as fits; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{BlockIdx, TrainIdx};

/// The top-level error type for `rail-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("block {0} not found")]
    BlockNotFound(BlockIdx),

    #[error("train {0} not found")]
    TrainNotFound(TrainIdx),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rail-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
