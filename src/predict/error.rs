use thiserror::Error;

use crate::api::ApiError;

/// Ways a single prediction flow can fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Required inputs were left empty; nothing was sent
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),
    /// The backend answered with an explicit `error` field
    #[error("{0}")]
    Backend(String),
    /// The backend answered with neither `prediction` nor `error`
    #[error("No prediction returned")]
    MalformedResponse,
    #[error("{0}")]
    Transport(String),
}

impl From<ApiError> for PredictError {
    fn from(err: ApiError) -> Self {
        PredictError::Transport(err.to_string())
    }
}
