use wasm_bindgen::JsValue;

use crate::state::AppState;
use crate::utils::PRELOADED_STATE_KEY;

/// Read the state blob a hosting page may have left on `window`.
/// Absent or malformed values mean a cold start with defaults.
pub fn preloaded_state() -> Option<AppState> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(PRELOADED_STATE_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(state) => {
            log::info!("💾 Preloaded state found on window, hydrating store");
            Some(state)
        }
        Err(err) => {
            log::warn!("⚠️ Ignoring malformed preloaded state: {}", err);
            None
        }
    }
}
