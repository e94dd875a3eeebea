use leptos::*;

use crate::api::ApiClient;
use crate::models::{SolarField, Zone};
use crate::state::{use_store, Action};

/// Location and weather form
#[component]
pub fn SolarCard() -> impl IntoView {
    let store = use_store();
    let client = ApiClient::new();

    let on_predict = move |_| store.submit_solar(client.clone());

    view! {
        <div class="card form-card">
            <h2 class="form-header">"Predict Potential Solar Generation"</h2>
            <div class="form-section">
                <h3 class="section-title">"Location Details"</h3>
                <div class="input-list">
                    <SolarInput field=SolarField::Latitude />
                    <SolarInput field=SolarField::Longitude />
                    <SolarInput field=SolarField::CloudAmount />
                    <ZoneSelect />
                </div>
            </div>
            <button class="predict-button" on:click=on_predict>
                "Predict Generation"
            </button>
        </div>
    }
}

#[component]
fn SolarInput(field: SolarField) -> impl IntoView {
    let store = use_store();

    view! {
        <div class="input-group">
            <label>{field.label()}</label>
            <input
                class="form-input"
                type="number"
                placeholder=field.placeholder()
                prop:value=move || store.with(|s| s.solar.get(field).to_string())
                on:input=move |ev| {
                    store.dispatch(Action::SetSolarField(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}

#[component]
fn ZoneSelect() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="input-group">
            <label>{SolarField::Zone.label()}</label>
            <select
                class="form-input"
                prop:value=move || store.with(|s| s.solar.get(SolarField::Zone).to_string())
                on:change=move |ev| {
                    store.dispatch(Action::SetSolarField(SolarField::Zone, event_target_value(&ev)));
                }
            >
                {Zone::ALL
                    .into_iter()
                    .map(|zone| view! { <option value=zone.as_str()>{zone.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
