use leptos::*;

use crate::predict::PredictionKind;
use crate::state::use_store;

/// Progress meter driven by the cosmetic ticker
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_store();
    let width = move || format!("width: {}%", store.with(|s| s.progress.value));

    view! {
        <div class="progress-meter-bg">
            <div class="progress-meter" style=width></div>
        </div>
    }
}

#[component]
pub fn ResultCards() -> impl IntoView {
    view! {
        <div class="result-grid">
            <ResultCard
                title="Predicted Household Energy Consumption"
                kind=PredictionKind::Electricity
            />
            <ResultCard title="Predicted Solar Generation" kind=PredictionKind::Solar />
        </div>
    }
}

#[component]
fn ResultCard(title: &'static str, kind: PredictionKind) -> impl IntoView {
    let store = use_store();

    let value = move || store.with(|s| s.display(kind).to_string());
    let subtitle = move || {
        store
            .with(|s| s.solar_irradiance)
            .filter(|_| kind == PredictionKind::Solar)
            .map(|irradiance| {
                view! {
                    <div class="subtitle">
                        {format!("Irradiance: {:.2} kWh/m²/day", irradiance)}
                    </div>
                }
            })
    };

    view! {
        <div class="card result-card">
            <h2 class="result-title">{title}</h2>
            <div class="result-value">{value}</div>
            {subtitle}
        </div>
    }
}
