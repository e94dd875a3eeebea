use super::client::{ApiClient, ApiError};
use crate::models::ModelDiagnostics;

impl ApiClient {
    /// Get the backend banner from the root route
    pub async fn get_status(&self) -> Result<String, ApiError> {
        self.get_text("/").await
    }

    /// Get loaded-model details and smoke-test predictions
    pub async fn get_model_diagnostics(&self) -> Result<ModelDiagnostics, ApiError> {
        self.get("/debug_models").await
    }
}
