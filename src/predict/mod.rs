//! Form validation, feature encoding and response formatting for the
//! electricity and solar predictors

pub mod electricity;
pub mod error;
pub mod fixed;
pub mod flow;
pub mod parse;
pub mod solar;

pub use electricity::predict_electricity;
pub use error::PredictError;
pub use fixed::to_fixed;
pub use flow::{
    predict, run_prediction, Outcome, Prediction, PredictionForm, PredictionKind, ERROR_MARKER,
    PLACEHOLDER,
};
pub use parse::parse_float;
pub use solar::predict_solar;
