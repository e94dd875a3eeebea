use leptos::*;

use crate::api::ApiClient;
use crate::models::ElectricityField;
use crate::state::{use_store, Action};

/// Household appliance and usage form
#[component]
pub fn ElectricityCard() -> impl IntoView {
    let store = use_store();
    let client = ApiClient::new();

    let (appliances, usage): (Vec<_>, Vec<_>) = ElectricityField::ALL
        .into_iter()
        .partition(|field| field.is_appliance());

    let on_predict = move |_| store.submit_electricity(client.clone());

    view! {
        <div class="card form-card">
            <h2 class="form-header">"Predict Electricity Consumption"</h2>
            <div class="form-columns">
                <FieldSection title="Household Appliances" fields=appliances />
                <FieldSection title="Usage Details" fields=usage />
            </div>
            <button class="predict-button" on:click=on_predict>
                "Predict Consumption"
            </button>
        </div>
    }
}

#[component]
fn FieldSection(title: &'static str, fields: Vec<ElectricityField>) -> impl IntoView {
    view! {
        <div class="form-section">
            <h3 class="section-title">{title}</h3>
            <div class="input-list">
                {fields
                    .into_iter()
                    .map(|field| view! { <ElectricityInput field=field /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ElectricityInput(field: ElectricityField) -> impl IntoView {
    let store = use_store();

    view! {
        <div class="input-group">
            <label>{field.label()}</label>
            <input
                class="form-input"
                type="number"
                placeholder=field.placeholder()
                prop:value=move || store.with(|s| s.electricity.get(field).to_string())
                on:input=move |ev| {
                    store.dispatch(Action::SetElectricityField(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}
