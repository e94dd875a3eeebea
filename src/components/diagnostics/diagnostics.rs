use leptos::*;

use crate::api::ApiClient;
use crate::models::ModelInfo;

/// Model diagnostics page backed by the backend's debug endpoint
#[component]
pub fn Diagnostics() -> impl IntoView {
    let client = ApiClient::new();
    let base_url = client.base_url().to_string();

    // Trigger for refetching diagnostics
    let (trigger, set_trigger) = create_signal(0);

    let diagnostics = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client.clone();
            async move { client.get_model_diagnostics().await }
        },
    );

    let refresh = move |_| {
        set_trigger.update(|n| *n += 1);
    };

    view! {
        <div class="diagnostics-page">
            <div class="diagnostics-header">
                <h2>"Model Diagnostics"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>
            <p class="diagnostics-backend">"Backend: " {base_url}</p>

            <Suspense fallback=move || view! {
                <div class="loading">"Loading diagnostics..."</div>
            }>
                {move || {
                    diagnostics.get().map(|result| match result {
                        Ok(diag) => view! {
                            <div class="diagnostics-grid">
                                <ModelCard title="Solar Model" info=diag.solar_model />
                                <ModelCard title="Electricity Model" info=diag.electricity_model />
                            </div>
                        }.into_view(),
                        Err(e) => view! {
                            <div class="error-banner">
                                <strong>"Error loading diagnostics:"</strong>
                                <div>{format!("{}", e)}</div>
                            </div>
                        }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ModelCard(title: &'static str, info: ModelInfo) -> impl IntoView {
    let card_class = if info.is_loaded() && info.error.is_none() {
        "card"
    } else {
        "card card-error"
    };

    let rows = [
        ("Irradiance (test)", info.test_irradiance.map(|v| format!("{:.2} kWh/m²/day", v))),
        ("Annual (test)", info.test_annual_kwh.map(|v| format!("{:.0} kWh/year", v))),
        ("Expected", info.expected_range.clone()),
        ("Bill (test)", info.test_bill.map(|v| format!("₹{:.2}", v))),
        ("Consumption (test)", info.test_consumption.map(|v| format!("{:.2} kWh", v))),
    ];

    view! {
        <div class=card_class>
            <h3>{title}</h3>
            <div class="model-summary">{info.summary()}</div>
            <div class="model-details">
                {rows
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v)))
                    .map(|(label, value)| view! {
                        <div class="setting-item">
                            <span class="setting-label">{label}</span>
                            <span class="setting-value">{value}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
