// ============================================================================
// STATE MODULE - reducer-driven store, explicitly threaded (no singleton)
// ============================================================================

pub mod app_state;
pub mod store;

pub use app_state::{reducer, Action, AppState, AppStore, Location};
pub use store::Store;
