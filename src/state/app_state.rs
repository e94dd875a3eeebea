use crate::models::{ElectricityField, ElectricityForm, SolarField, SolarForm};
use crate::predict::{Outcome, PredictionKind, PLACEHOLDER};

use super::progress::Progress;

/// Snapshot of everything the page renders
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub electricity: ElectricityForm,
    pub solar: SolarForm,
    pub energy_consumption: String,
    pub solar_generation: String,
    pub solar_irradiance: Option<f64>,
    pub progress: Progress,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            electricity: ElectricityForm::default(),
            solar: SolarForm::default(),
            energy_consumption: PLACEHOLDER.to_string(),
            solar_generation: PLACEHOLDER.to_string(),
            solar_irradiance: None,
            progress: Progress::default(),
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetElectricityField(ElectricityField, String),
    SetSolarField(SolarField, String),
    PredictionStarted(PredictionKind),
    ProgressTick(u64),
    ProgressCleared(u64),
    /// Written as responses arrive; the last one to resolve wins
    PredictionResolved(PredictionKind, Outcome),
}

impl AppState {
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetElectricityField(field, value) => self.electricity.set(field, value),
            Action::SetSolarField(field, value) => self.solar.set(field, value),
            Action::PredictionStarted(kind) => {
                self.progress = self.progress.start();
                match kind {
                    PredictionKind::Electricity => {
                        self.energy_consumption = PLACEHOLDER.to_string();
                    }
                    PredictionKind::Solar => {
                        self.solar_generation = PLACEHOLDER.to_string();
                        self.solar_irradiance = None;
                    }
                }
            }
            Action::ProgressTick(run) => self.progress = self.progress.tick(run),
            Action::ProgressCleared(run) => self.progress = self.progress.clear(run),
            Action::PredictionResolved(kind, outcome) => match kind {
                PredictionKind::Electricity => self.energy_consumption = outcome.display,
                PredictionKind::Solar => {
                    self.solar_generation = outcome.display;
                    self.solar_irradiance = outcome.irradiance;
                }
            },
        }
        self
    }

    pub fn display(&self, kind: PredictionKind) -> &str {
        match kind {
            PredictionKind::Electricity => &self.energy_consumption,
            PredictionKind::Solar => &self.solar_generation,
        }
    }
}
