use serde::{Deserialize, Serialize};

/// Demo payload loaded by the HOME route thunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Cached copy kept in localStorage together with its fetch time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderCache {
    pub placeholder: Placeholder,
    pub timestamp: String, // rfc3339
}
