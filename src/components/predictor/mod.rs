mod electricity_card;
mod predictor;
mod results;
mod solar_card;

pub use predictor::Predictor;
