use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routes::thunks::{compose_thunks, load_placeholder, AppThunk};
use crate::state::Location;

/// Closed set of navigable routes. `NotFound` is the reserved sentinel for
/// unmatched navigation; it never carries a path pattern of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    /// CSS-friendly slug, used as the app container class.
    pub fn slug(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::NotFound => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "HOME"),
            Route::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// One row of the route table. Entries without a thunk are pure-render
/// routes.
pub struct RouteEntry {
    pub route: Route,
    pub path: &'static str,
    pub thunk: Option<AppThunk>,
}

/// Static route table, built once at startup and read-only afterwards.
pub struct RoutesMap {
    entries: Vec<RouteEntry>,
}

impl RoutesMap {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Match a path against the table, first entry wins. Unmatched paths
    /// resolve to the `NotFound` sentinel with an empty payload.
    pub fn resolve(&self, path: &str) -> Location {
        for entry in &self.entries {
            if let Some(params) = match_pattern(entry.path, path) {
                return Location {
                    route: entry.route.clone(),
                    params,
                };
            }
        }
        Location {
            route: Route::NotFound,
            params: HashMap::new(),
        }
    }

    pub fn entry(&self, route: &Route) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| &entry.route == route)
    }

    /// Reverse lookup, used for programmatic navigation.
    pub fn path_for(&self, route: &Route) -> Option<&'static str> {
        self.entry(route).map(|entry| entry.path)
    }
}

impl Default for RoutesMap {
    fn default() -> Self {
        Self::new(vec![RouteEntry {
            route: Route::Home,
            path: "/",
            // Multiple data loads can be chained here; they run in sequence.
            thunk: Some(compose_thunks(vec![load_placeholder()])),
        }])
    }
}

/// Segment-wise pattern match. `:name` segments capture into the params
/// map, every other segment must match literally.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            params.insert(name.to_string(), path_segment.to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_resolves_to_home() {
        let routes = RoutesMap::default();
        let location = routes.resolve("/");
        assert_eq!(location.route, Route::Home);
        assert!(location.params.is_empty());
    }

    #[test]
    fn test_home_entry_carries_a_thunk() {
        let routes = RoutesMap::default();
        let entry = routes.entry(&Route::Home).unwrap();
        assert_eq!(entry.path, "/");
        assert!(entry.thunk.is_some());
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let routes = RoutesMap::default();
        let location = routes.resolve("/does/not/exist");
        assert_eq!(location.route, Route::NotFound);
        assert!(location.params.is_empty());
        // The sentinel has no entry of its own
        assert!(routes.entry(&Route::NotFound).is_none());
    }

    #[test]
    fn test_param_segments_capture_payload() {
        let routes = RoutesMap::new(vec![RouteEntry {
            route: Route::Home,
            path: "/video/:slug/play",
            thunk: None,
        }]);

        let location = routes.resolve("/video/intro-to-rust/play");
        assert_eq!(location.route, Route::Home);
        assert_eq!(
            location.params.get("slug"),
            Some(&"intro-to-rust".to_string())
        );

        assert_eq!(routes.resolve("/video//play").route, Route::NotFound);
        assert_eq!(routes.resolve("/video/intro").route, Route::NotFound);
    }

    #[test]
    fn test_path_for_reverse_lookup() {
        let routes = RoutesMap::default();
        assert_eq!(routes.path_for(&Route::Home), Some("/"));
        assert_eq!(routes.path_for(&Route::NotFound), None);
    }

    #[test]
    fn test_route_identifiers_serialize_screaming_snake() {
        assert_eq!(serde_json::to_string(&Route::Home).unwrap(), "\"HOME\"");
        assert_eq!(
            serde_json::to_string(&Route::NotFound).unwrap(),
            "\"NOT_FOUND\""
        );
        let parsed: Route = serde_json::from_str("\"NOT_FOUND\"").unwrap();
        assert_eq!(parsed, Route::NotFound);
    }
}
