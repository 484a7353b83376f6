use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("engine error: {0}")]
    Engine(#[from] rail_engine::EngineError),
    #[error("plan adapter failed: {0}")]
    Adapter(#[from] rail_adapter::AdapterError),
}

pub type EvaluatorResult<T> = Result<T, EvaluatorError>;
