/// Backend base URL, fixed at compile time:
/// - default: the public placeholder API
/// - override: BACKEND_URL env var (or .env, see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://jsonplaceholder.typicode.com",
};

/// Window property a hosting page can set to preload the store.
pub const PRELOADED_STATE_KEY: &str = "__PRELOADED_STATE__";

/// localStorage key for the cached placeholder payload.
pub const STORAGE_KEY_PLACEHOLDER: &str = "spaStarter_placeholder";

/// How long a cached payload stays fresh.
pub const CACHE_DURATION_MINUTES: i64 = 30;
