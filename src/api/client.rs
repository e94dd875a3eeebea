use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for the prediction backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the base URL from window.ENV
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and return the body as plain text
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = Request::get(&self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !response.ok() {
            return Err(ApiError::Http {
                status,
                message: body,
            });
        }

        Ok(body)
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path)).send().await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Decode the JSON body whatever the status code; the backend reports
    /// its own failures as `{"error": ...}` with a 5xx status
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        decode_body(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON body; non-JSON bodies on an error status keep the status
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            ApiError::Deserialization(e.to_string())
        } else {
            ApiError::Http {
                status,
                message: body.to_string(),
            }
        }
    })
}
