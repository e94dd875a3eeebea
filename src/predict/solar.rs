use crate::api::PredictionBackend;
use crate::models::{SolarField, SolarForm};

use super::fixed::to_fixed;
use super::flow::{predict, Outcome, PredictionForm, PredictionKind};
use super::parse::parse_float;

impl PredictionForm for SolarForm {
    const KIND: PredictionKind = PredictionKind::Solar;

    fn missing_fields(&self) -> Vec<&'static str> {
        SolarField::ALL
            .iter()
            .filter(|field| self.get(**field).is_empty())
            .map(|field| field.label())
            .collect()
    }

    /// [latitude, longitude, cloud_amount, central, east, north, south, west]
    fn encode(&self) -> Vec<f64> {
        let mut features = vec![
            parse_float(self.get(SolarField::Latitude)),
            parse_float(self.get(SolarField::Longitude)),
            parse_float(self.get(SolarField::CloudAmount)),
        ];
        features.extend(self.zone().one_hot());
        features
    }

    fn format(&self, generation: f64) -> String {
        format!("{} kWh / year", to_fixed(generation, 2))
    }
}

/// Predict annual generation of a 1 kW installation at the given location
pub async fn predict_solar<B>(form: &SolarForm, backend: &B) -> Outcome
where
    B: PredictionBackend + ?Sized,
{
    predict(form, backend).await
}
