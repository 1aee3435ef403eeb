use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Placeholder;
use crate::routes::Route;
use crate::state::Store;

pub type AppStore = Store<AppState, Action>;

/// Current route plus the parameters captured from the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub route: Route,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            route: Route::Home,
            params: HashMap::new(),
        }
    }
}

/// Global app state. Fully serializable so a hosting page can preload it
/// (see `utils::preloaded_state`).
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub placeholder: Option<Placeholder>,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    RouteChanged(Location),
    PlaceholderLoading,
    PlaceholderLoaded(Placeholder),
    PlaceholderFailed(String),
}

pub fn reducer(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::RouteChanged(location) => AppState {
            location: location.clone(),
            ..state.clone()
        },
        Action::PlaceholderLoading => AppState {
            loading: true,
            error: None,
            ..state.clone()
        },
        Action::PlaceholderLoaded(placeholder) => AppState {
            placeholder: Some(placeholder.clone()),
            loading: false,
            error: None,
            ..state.clone()
        },
        Action::PlaceholderFailed(message) => AppState {
            loading: false,
            error: Some(message.clone()),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_changed_replaces_location() {
        let state = AppState::default();
        let mut params = HashMap::new();
        params.insert("slug".to_string(), "intro".to_string());
        let location = Location {
            route: Route::NotFound,
            params,
        };
        let next = reducer(&state, &Action::RouteChanged(location.clone()));
        assert_eq!(next.location, location);
        // Everything else untouched
        assert_eq!(next.placeholder, state.placeholder);
        assert_eq!(next.loading, state.loading);
    }

    #[test]
    fn test_placeholder_lifecycle() {
        let state = AppState::default();

        let loading = reducer(&state, &Action::PlaceholderLoading);
        assert!(loading.loading);
        assert_eq!(loading.error, None);

        let placeholder = Placeholder {
            user_id: 1,
            id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        };
        let loaded = reducer(&loading, &Action::PlaceholderLoaded(placeholder.clone()));
        assert!(!loaded.loading);
        assert_eq!(loaded.placeholder, Some(placeholder));

        let failed = reducer(&loaded, &Action::PlaceholderFailed("boom".to_string()));
        assert!(!failed.loading);
        assert_eq!(failed.error, Some("boom".to_string()));
        // A failure keeps the last good payload around
        assert!(failed.placeholder.is_some());
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::default();
        let action = Action::PlaceholderLoading;
        assert_eq!(reducer(&state, &action), reducer(&state, &action));
        assert_eq!(state, AppState::default());
    }
}
