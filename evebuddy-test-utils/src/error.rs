use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    AppError(#[from] evebuddy::app::Error),
    #[error(transparent)]
    IdError(#[from] evebuddy::model::IdError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Timed out waiting for {0}")]
    Timeout(&'static str),
}
