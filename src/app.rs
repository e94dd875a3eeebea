use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::Diagnostics;
use crate::components::Predictor;
use crate::state::provide_store_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Form and result state lives at the root so it survives tab switches
    provide_store_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=Predictor />
                    <Route path="diagnostics" view=Diagnostics />
                </Route>
            </Routes>
        </Router>
    }
}
