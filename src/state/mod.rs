pub mod app_state;
pub mod progress;
pub mod store;

pub use app_state::{Action, AppState};
pub use progress::Progress;
pub use store::{provide_store_context, use_store, Store};
