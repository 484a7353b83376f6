//! Plan-subsystem error type.

use thiserror::Error;

/// Errors produced while constructing or applying a [`crate::Plan`].
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("malformed hold directive: {0}")]
    Malformed(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
