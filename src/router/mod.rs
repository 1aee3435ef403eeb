// ============================================================================
// ROUTER - history API glue between the route table and the store
// ============================================================================
// Resolves paths against the RoutesMap, dispatches the resulting Location
// into the store and runs the entry's thunk. One thunk invocation per
// navigation event; an in-flight thunk is never cancelled by a newer
// navigation.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use crate::routes::{Route, RoutesMap};
use crate::state::{Action, AppStore};

pub struct Router {
    routes: Rc<RoutesMap>,
    store: AppStore,
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            store: self.store.clone(),
        }
    }
}

impl PartialEq for Router {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.routes, &other.routes) && self.store == other.store
    }
}

impl Router {
    pub fn new(routes: RoutesMap, store: AppStore) -> Self {
        Self {
            routes: Rc::new(routes),
            store,
        }
    }

    /// Resolve the current browser location and start listening for
    /// back/forward navigation.
    pub fn start(&self) {
        self.handle_path(&current_path());

        let router = self.clone();
        let on_popstate = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            router.handle_path(&current_path());
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        // Registered once at startup, keep the closure alive for the
        // lifetime of the page.
        on_popstate.forget();
    }

    /// Push a history entry and resolve the new path.
    pub fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
            }
        }
        self.handle_path(path);
    }

    pub fn navigate_to(&self, route: &Route) {
        match self.routes.path_for(route) {
            Some(path) => self.navigate(path),
            None => log::warn!("⚠️ No path registered for route {}", route),
        }
    }

    fn handle_path(&self, path: &str) {
        let path = path.split('?').next().unwrap_or("/");
        let location = self.routes.resolve(path);
        log::debug!("🧭 {} resolved to {}", path, location.route);

        self.store.dispatch(Action::RouteChanged(location.clone()));

        if let Some(thunk) = self
            .routes
            .entry(&location.route)
            .and_then(|entry| entry.thunk.clone())
        {
            let store = self.store.clone();
            spawn_local(async move {
                if let Err(err) = thunk(store).await {
                    log::error!("❌ Thunk for route failed: {}", err);
                }
            });
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
