mod components;
mod error;
mod models;
mod router;
mod routes;
mod services;
mod state;
mod utils;

use components::{App, AppProps};
use router::Router;
use routes::RoutesMap;
use state::{reducer, AppStore, Store};

fn main() {
    console_error_panic_hook::set_once();

    // Debug logging in development, errors only in production builds
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Error
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 SPA starter booting...");

    // The store is built here, once, and threaded explicitly through the
    // router and the component tree.
    let initial = utils::preloaded_state().unwrap_or_default();
    let store: AppStore = Store::new(initial, reducer);

    let router = Router::new(RoutesMap::default(), store.clone());
    router.start();

    yew::Renderer::<App>::with_props(AppProps { store, router }).render();
}
