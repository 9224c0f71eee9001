use thiserror::Error;

pub type EaselResult<T> = Result<T, EaselError>;

#[derive(Debug, Error)]
pub enum EaselError {
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("compute backend failure: {0}")]
    ComputeBackend(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}
