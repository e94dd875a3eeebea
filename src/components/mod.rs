pub mod diagnostics;
pub mod layout;
pub mod predictor;

pub use diagnostics::Diagnostics;
pub use predictor::Predictor;
