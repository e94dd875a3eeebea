use crate::api::{Endpoint, PredictionBackend};
use crate::models::PredictRequest;

use super::error::PredictError;

/// Display value before any prediction has been made
pub const PLACEHOLDER: &str = "--";
/// Display value after a backend or transport failure
pub const ERROR_MARKER: &str = "Error";

/// The two independent prediction flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionKind {
    Electricity,
    Solar,
}

impl PredictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Solar => "solar",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Electricity => Endpoint::Electricity,
            Self::Solar => Endpoint::Solar,
        }
    }

    pub fn validation_message(&self) -> &'static str {
        match self {
            Self::Electricity => "Please fill out all electricity consumption fields",
            Self::Solar => "Please fill out all solar generation fields",
        }
    }

    fn transport_message(&self, detail: &str) -> String {
        match self {
            Self::Electricity => format!("Error predicting electricity consumption: {}", detail),
            Self::Solar => format!("Error predicting solar generation: {}", detail),
        }
    }
}

/// A form that can be validated, encoded and formatted for one endpoint
pub trait PredictionForm {
    const KIND: PredictionKind;

    /// Labels of required fields that are empty, in form order
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Fixed-order feature vector sent to the backend
    fn encode(&self) -> Vec<f64>;

    /// Display value for a successful prediction
    fn format(&self, prediction: f64) -> String;
}

/// A successful prediction, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub display: String,
    pub irradiance: Option<f64>,
}

/// Validate, encode, call the backend and format the answer.
///
/// Validation happens before anything is sent, so an incomplete form never
/// reaches the network.
pub async fn run_prediction<F, B>(form: &F, backend: &B) -> Result<Prediction, PredictError>
where
    F: PredictionForm,
    B: PredictionBackend + ?Sized,
{
    let missing = form.missing_fields();
    if !missing.is_empty() {
        log::warn!("{} prediction aborted, missing: {:?}", F::KIND.as_str(), missing);
        return Err(PredictError::Validation(missing));
    }

    let request = PredictRequest {
        features: form.encode(),
    };
    log::debug!("Sending {} features: {:?}", F::KIND.as_str(), request.features);

    let response = backend.predict(F::KIND.endpoint(), &request).await?;
    log::debug!("{} prediction response: {:?}", F::KIND.as_str(), response);

    if let Some(message) = response.error.filter(|m| !m.is_empty()) {
        return Err(PredictError::Backend(message));
    }

    match response.prediction {
        Some(value) => Ok(Prediction {
            display: form.format(value),
            irradiance: response.irradiance,
        }),
        None => Err(PredictError::MalformedResponse),
    }
}

/// What the UI shows after a flow finishes
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub display: String,
    /// Blocking message for the user, if any
    pub alert: Option<String>,
    pub irradiance: Option<f64>,
}

impl Outcome {
    pub fn from_result(kind: PredictionKind, result: Result<Prediction, PredictError>) -> Self {
        match result {
            Ok(prediction) => Self {
                display: prediction.display,
                alert: None,
                irradiance: prediction.irradiance,
            },
            Err(PredictError::Validation(_)) => Self {
                display: PLACEHOLDER.to_string(),
                alert: Some(kind.validation_message().to_string()),
                irradiance: None,
            },
            Err(PredictError::Backend(message)) => Self {
                display: ERROR_MARKER.to_string(),
                alert: Some(format!("Error: {}", message)),
                irradiance: None,
            },
            Err(err @ PredictError::MalformedResponse) => Self {
                display: err.to_string(),
                alert: None,
                irradiance: None,
            },
            Err(PredictError::Transport(message)) => {
                log::error!("{} prediction failed: {}", kind.as_str(), message);
                Self {
                    display: ERROR_MARKER.to_string(),
                    alert: Some(kind.transport_message(&message)),
                    irradiance: None,
                }
            }
        }
    }
}

/// Run one flow end to end and map every result onto a display value
pub async fn predict<F, B>(form: &F, backend: &B) -> Outcome
where
    F: PredictionForm,
    B: PredictionBackend + ?Sized,
{
    Outcome::from_result(F::KIND, run_prediction(form, backend).await)
}
