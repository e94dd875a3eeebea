use serde::{Deserialize, Serialize};

/// Response of the backend's model debug endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDiagnostics {
    #[serde(default)]
    pub solar_model: ModelInfo,
    #[serde(default)]
    pub electricity_model: ModelInfo,
}

/// Loaded-model summary; every field is optional since the backend
/// reports only what it could compute
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub n_features: Option<u32>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub test_irradiance: Option<f64>,
    pub test_annual_kwh: Option<f64>,
    pub expected_range: Option<String>,
    pub test_bill: Option<f64>,
    pub test_consumption: Option<f64>,
}

impl ModelInfo {
    pub fn is_loaded(&self) -> bool {
        self.model_type.is_some()
    }

    /// Short status line for the diagnostics panel
    pub fn summary(&self) -> String {
        if let Some(err) = &self.error {
            return format!("Error: {}", err);
        }
        match (&self.model_type, self.n_features) {
            (Some(t), Some(n)) => format!("{} ({} features)", t, n),
            (Some(t), None) => t.clone(),
            _ => self
                .status
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_deserialization() {
        let json = r#"{
            "solar_model": {
                "type": "<class 'RandomForestRegressor'>",
                "n_features": 8,
                "test_irradiance": 4.91,
                "test_annual_kwh": 1344.0,
                "expected_range": "1200-1500 kWh/year"
            },
            "electricity_model": {"status": "Model not loaded"}
        }"#;
        let diag: ModelDiagnostics = serde_json::from_str(json).unwrap();

        assert!(diag.solar_model.is_loaded());
        assert_eq!(diag.solar_model.n_features, Some(8));
        assert_eq!(
            diag.solar_model.summary(),
            "<class 'RandomForestRegressor'> (8 features)"
        );
        assert!(!diag.electricity_model.is_loaded());
        assert_eq!(diag.electricity_model.summary(), "Model not loaded");
    }

    #[test]
    fn test_summary_prefers_error() {
        let info = ModelInfo {
            model_type: Some("LinearRegression".to_string()),
            error: Some("shape mismatch".to_string()),
            ..Default::default()
        };
        assert_eq!(info.summary(), "Error: shape mismatch");
    }

    #[test]
    fn test_missing_sections_default() {
        let diag: ModelDiagnostics = serde_json::from_str("{}").unwrap();
        assert_eq!(diag.solar_model.summary(), "Unknown");
    }
}
