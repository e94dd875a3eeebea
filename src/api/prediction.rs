use async_trait::async_trait;

use super::client::{ApiClient, ApiError};
use crate::models::{PredictRequest, PredictResponse};

/// Prediction endpoints exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Electricity,
    Solar,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Electricity => "/predict_electricity",
            Self::Solar => "/predict_solar",
        }
    }
}

/// Anything that can turn a feature vector into a backend response
#[async_trait(?Send)]
pub trait PredictionBackend {
    async fn predict(
        &self,
        endpoint: Endpoint,
        request: &PredictRequest,
    ) -> Result<PredictResponse, ApiError>;
}

#[async_trait(?Send)]
impl PredictionBackend for ApiClient {
    async fn predict(
        &self,
        endpoint: Endpoint,
        request: &PredictRequest,
    ) -> Result<PredictResponse, ApiError> {
        self.post(endpoint.path(), request).await
    }
}
