use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Plan(#[from] rail_plan::PlanError),
}

pub type AdapterResult<T> = Result<T, AdapterError>;
