use leptos::*;

use super::electricity_card::ElectricityCard;
use super::results::{ProgressBar, ResultCards};
use super::solar_card::SolarCard;

/// Prediction page: both forms, the shared progress meter and results
#[component]
pub fn Predictor() -> impl IntoView {
    view! {
        <div class="predictor">
            <div class="form-grid">
                <ElectricityCard />
                <SolarCard />
            </div>
            <ProgressBar />
            <ResultCards />
        </div>
    }
}
