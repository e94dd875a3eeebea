use leptos::*;

use crate::api::ApiClient;
use crate::predict::{run_prediction, Outcome, PredictError, PredictionForm};

use super::app_state::{Action, AppState};

/// Reactive wrapper around [`AppState`]; every change goes through `dispatch`
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.state
            .update(|state| *state = std::mem::take(state).apply(action));
    }

    /// Read the state, subscribing the caller to changes
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn submit_electricity(&self, client: ApiClient) {
        let form = self.with_untracked(|s| s.electricity.clone());
        self.submit(form, client);
    }

    pub fn submit_solar(&self, client: ApiClient) {
        let form = self.with_untracked(|s| s.solar.clone());
        self.submit(form, client);
    }

    /// Start the progress ticker and the request as two unrelated tasks
    fn submit<F>(&self, form: F, client: ApiClient)
    where
        F: PredictionForm + 'static,
    {
        self.dispatch(Action::PredictionStarted(F::KIND));
        let run = self.with_untracked(|s| s.progress.run);
        spawn_ticker(*self, run);

        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = run_prediction(&form, &client).await;
            if matches!(result, Err(PredictError::Validation(_))) {
                store.dispatch(Action::ProgressCleared(run));
            }

            let outcome = Outcome::from_result(F::KIND, result);
            if let Some(message) = &outcome.alert {
                show_alert(message);
            }
            store.dispatch(Action::PredictionResolved(F::KIND, outcome));
        });
    }
}

fn spawn_ticker(store: Store, run: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        use super::progress::PROGRESS_TICK_MS;
        use gloo_timers::future::TimeoutFuture;

        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(PROGRESS_TICK_MS).await;
                if !store.with_untracked(|s| s.progress.is_running(run)) {
                    break;
                }
                store.dispatch(Action::ProgressTick(run));
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (store, run);
    }
}

fn show_alert(message: &str) {
    log::warn!("{}", message);

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Provide the store to the application
pub fn provide_store_context() {
    provide_context(Store::new(AppState::default()));
}

/// Hook to access the store
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store must be provided by a parent component")
}
