pub mod diagnostics;
pub mod electricity;
pub mod prediction;
pub mod solar;

pub use diagnostics::{ModelDiagnostics, ModelInfo};
pub use electricity::{ElectricityField, ElectricityForm};
pub use prediction::{PredictRequest, PredictResponse};
pub use solar::{SolarField, SolarForm, Zone};
