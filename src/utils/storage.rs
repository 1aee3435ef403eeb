use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &json);
    }
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}
