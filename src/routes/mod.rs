// ============================================================================
// ROUTES MODULE - route table + composable data-loading thunks
// ============================================================================

pub mod routes_map;
pub mod thunks;

pub use routes_map::{Route, RouteEntry, RoutesMap};
pub use thunks::{compose_thunks, load_placeholder, AppThunk, Thunk};
