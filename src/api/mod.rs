pub mod client;
pub mod prediction;
pub mod status;

pub use client::{ApiClient, ApiError};
pub use prediction::{Endpoint, PredictionBackend};
