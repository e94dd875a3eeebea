use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with tabs and backend status
#[component]
fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    let is_active = move |path: &str| pathname.get() == path;

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <div class="navbar-brand">
                    <h1 class="navbar-title">"SuryaVeda"</h1>
                    <span class="navbar-tagline">
                        "Empowering Sustainable Energy Decisions through AI"
                    </span>
                </div>
                <div class="navbar-tabs">
                    <A
                        href="/"
                        class=move || if is_active("/") { "tab active" } else { "tab" }
                    >
                        "Predict"
                    </A>
                    <A
                        href="/diagnostics"
                        class=move || if is_active("/diagnostics") { "tab active" } else { "tab" }
                    >
                        "Diagnostics"
                    </A>
                </div>
                <div class="navbar-actions">
                    <BackendStatus />
                </div>
            </div>
        </nav>
    }
}

/// Online/offline badge from the backend root route, checked once
#[component]
fn BackendStatus() -> impl IntoView {
    let client = ApiClient::new();
    let status = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.get_status().await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <span class="status-badge">"Checking..."</span> }>
            {move || {
                status.get().map(|result| match result {
                    Ok(banner) => view! {
                        <span class="status-badge online" title=banner>
                            <span class="status-dot on" aria-hidden="true"></span>
                            "Backend online"
                        </span>
                    }.into_view(),
                    Err(e) => {
                        log::warn!("Backend status check failed: {}", e);
                        view! {
                            <span class="status-badge offline" title=e.to_string()>
                                <span class="status-dot off" aria-hidden="true"></span>
                                "Backend offline"
                            </span>
                        }.into_view()
                    }
                })
            }}
        </Suspense>
    }
}
