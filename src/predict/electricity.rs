use crate::api::PredictionBackend;
use crate::models::{ElectricityField, ElectricityForm};

use super::fixed::to_fixed;
use super::flow::{predict, Outcome, PredictionForm, PredictionKind};
use super::parse::parse_float;

impl ElectricityForm {
    pub fn tariff_rate(&self) -> f64 {
        parse_float(self.get(ElectricityField::TariffRate))
    }
}

impl PredictionForm for ElectricityForm {
    const KIND: PredictionKind = PredictionKind::Electricity;

    fn missing_fields(&self) -> Vec<&'static str> {
        ElectricityField::ALL
            .iter()
            .filter(|field| self.get(**field).is_empty())
            .map(|field| field.label())
            .collect()
    }

    fn encode(&self) -> Vec<f64> {
        ElectricityField::ALL
            .iter()
            .map(|field| parse_float(self.get(*field)))
            .collect()
    }

    /// The backend predicts the bill; consumption is derived from the tariff
    fn format(&self, bill: f64) -> String {
        let consumption = bill / self.tariff_rate();
        format!(
            "{} kWh/month (₹{})",
            to_fixed(consumption, 2),
            to_fixed(bill, 2)
        )
    }
}

/// Predict monthly household consumption from appliance counts and usage
pub async fn predict_electricity<B>(form: &ElectricityForm, backend: &B) -> Outcome
where
    B: PredictionBackend + ?Sized,
{
    predict(form, backend).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Endpoint};
    use crate::models::PredictResponse;
    use crate::predict::testing::MockBackend;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ElectricityForm {
        ElectricityForm::default()
            .with(ElectricityField::Fan, "3")
            .with(ElectricityField::Refrigerator, "1")
            .with(ElectricityField::AirConditioner, "0")
            .with(ElectricityField::Television, "2")
            .with(ElectricityField::Monitor, "1")
            .with(ElectricityField::MotorPump, "1")
            .with(ElectricityField::Month, "11")
            .with(ElectricityField::MonthlyHours, "200")
            .with(ElectricityField::TariffRate, "9")
    }

    #[test]
    fn test_encode_keeps_field_order() {
        assert_eq!(
            filled_form().encode(),
            vec![3.0, 1.0, 0.0, 2.0, 1.0, 1.0, 11.0, 200.0, 9.0]
        );
    }

    #[test]
    fn test_encode_non_numeric_as_nan() {
        let form = filled_form().with(ElectricityField::Month, "November");
        let features = form.encode();
        assert_eq!(features.len(), 9);
        assert!(features[6].is_nan());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let form = filled_form()
            .with(ElectricityField::Monitor, "")
            .with(ElectricityField::TariffRate, "");
        assert_eq!(
            form.missing_fields(),
            vec!["Monitor (count)", "Tariff Rate (₹/kWh)"]
        );
    }

    #[test]
    fn test_success_derives_consumption() {
        let backend = MockBackend::with_response(PredictResponse {
            prediction: Some(450.0),
            unit: Some("INR".to_string()),
            ..Default::default()
        });

        let outcome = block_on(predict_electricity(&filled_form(), &backend));

        assert_eq!(outcome.display, "50.00 kWh/month (₹450.00)");
        assert!(outcome.alert.is_none());

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Endpoint::Electricity);
        assert_eq!(
            requests[0].1.features,
            vec![3.0, 1.0, 0.0, 2.0, 1.0, 1.0, 11.0, 200.0, 9.0]
        );
    }

    #[test]
    fn test_any_empty_field_sends_nothing() {
        for field in ElectricityField::ALL {
            let backend = MockBackend::with_response(PredictResponse {
                prediction: Some(450.0),
                ..Default::default()
            });
            let form = filled_form().with(field, "");

            let outcome = block_on(predict_electricity(&form, &backend));

            assert_eq!(outcome.display, "--", "field {:?}", field);
            assert_eq!(
                outcome.alert.as_deref(),
                Some("Please fill out all electricity consumption fields"),
                "field {:?}",
                field
            );
            assert!(backend.requests().is_empty(), "field {:?}", field);
        }
    }

    #[test]
    fn test_halfway_consumption_rounds_up() {
        let backend = MockBackend::with_response(PredictResponse {
            prediction: Some(1.25),
            ..Default::default()
        });
        let form = filled_form().with(ElectricityField::TariffRate, "10");

        let outcome = block_on(predict_electricity(&form, &backend));

        assert_eq!(outcome.display, "0.13 kWh/month (₹1.25)");
    }

    #[test]
    fn test_zero_tariff_shows_infinity() {
        let backend = MockBackend::with_response(PredictResponse {
            prediction: Some(450.0),
            ..Default::default()
        });
        let form = filled_form().with(ElectricityField::TariffRate, "0");

        let outcome = block_on(predict_electricity(&form, &backend));

        assert_eq!(outcome.display, "Infinity kWh/month (₹450.00)");
        assert!(outcome.alert.is_none());
    }

    #[test]
    fn test_backend_error_surfaced_verbatim() {
        let backend = MockBackend::with_response(PredictResponse {
            error: Some("model unavailable".to_string()),
            ..Default::default()
        });

        let outcome = block_on(predict_electricity(&filled_form(), &backend));

        assert_eq!(outcome.display, "Error");
        assert_eq!(outcome.alert.as_deref(), Some("Error: model unavailable"));
    }

    #[test]
    fn test_empty_error_string_falls_through_to_prediction() {
        let backend = MockBackend::with_response(PredictResponse {
            prediction: Some(90.0),
            error: Some(String::new()),
            ..Default::default()
        });

        let outcome = block_on(predict_electricity(&filled_form(), &backend));
        assert_eq!(outcome.display, "10.00 kWh/month (₹90.00)");
    }

    #[test]
    fn test_malformed_response() {
        let backend = MockBackend::with_response(PredictResponse::default());

        let outcome = block_on(predict_electricity(&filled_form(), &backend));

        assert_eq!(outcome.display, "No prediction returned");
        assert!(outcome.alert.is_none());
    }

    #[test]
    fn test_transport_failure() {
        let backend =
            MockBackend::with_result(Err(ApiError::Network("Failed to fetch".to_string())));

        let outcome = block_on(predict_electricity(&filled_form(), &backend));

        assert_eq!(outcome.display, "Error");
        assert_eq!(
            outcome.alert.as_deref(),
            Some("Error predicting electricity consumption: Network error: Failed to fetch")
        );
    }
}
