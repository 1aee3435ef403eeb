use gloo_net::http::Request;

use crate::error::AppError;
use crate::models::{Placeholder, PlaceholderCache};
use crate::utils::{
    load_from_storage, save_to_storage, BACKEND_URL, CACHE_DURATION_MINUTES,
    STORAGE_KEY_PLACEHOLDER,
};

/// Fetch the placeholder payload, with a localStorage cache in front of the
/// network and as a fallback behind it.
pub async fn fetch_placeholder() -> Result<Placeholder, AppError> {
    // Fresh cached copy short-circuits the network
    if let Some(cache) = load_from_storage::<PlaceholderCache>(STORAGE_KEY_PLACEHOLDER) {
        if cache_is_fresh(&cache.timestamp, chrono::Utc::now()) {
            log::info!("📦 Using cached placeholder");
            return Ok(cache.placeholder);
        }
        log::info!("📦 Cache expired, fetching fresh data...");
    }

    let url = format!("{}/todos/1", BACKEND_URL);
    log::info!("📡 GET {}", url);

    match request_placeholder(&url).await {
        Ok(placeholder) => {
            save_to_storage(
                STORAGE_KEY_PLACEHOLDER,
                &PlaceholderCache {
                    placeholder: placeholder.clone(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                },
            );
            Ok(placeholder)
        }
        Err(err) => {
            // Stale cache beats no data
            if let Some(cache) = load_from_storage::<PlaceholderCache>(STORAGE_KEY_PLACEHOLDER) {
                log::warn!("⚠️ Fetch failed ({}), using cached placeholder", err);
                return Ok(cache.placeholder);
            }
            Err(err)
        }
    }
}

async fn request_placeholder(url: &str) -> Result<Placeholder, AppError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Http {
            status: response.status(),
        });
    }

    response
        .json::<Placeholder>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

fn cache_is_fresh(timestamp: &str, now: chrono::DateTime<chrono::Utc>) -> bool {
    let Ok(cached_at) = chrono::DateTime::parse_from_rfc3339(timestamp) else {
        return false;
    };
    let age = now.signed_duration_since(cached_at.with_timezone(&chrono::Utc));
    age.num_minutes() < CACHE_DURATION_MINUTES && age.num_seconds() >= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_recent_cache_is_fresh() {
        let now = Utc::now();
        let five_minutes_ago = (now - Duration::minutes(5)).to_rfc3339();
        assert!(cache_is_fresh(&five_minutes_ago, now));
    }

    #[test]
    fn test_old_cache_is_stale() {
        let now = Utc::now();
        let an_hour_ago = (now - Duration::minutes(60)).to_rfc3339();
        assert!(!cache_is_fresh(&an_hour_ago, now));
    }

    #[test]
    fn test_garbage_timestamp_is_stale() {
        assert!(!cache_is_fresh("not-a-timestamp", Utc::now()));
    }

    #[test]
    fn test_future_timestamp_is_stale() {
        let now = Utc::now();
        let in_the_future = (now + Duration::minutes(10)).to_rfc3339();
        assert!(!cache_is_fresh(&in_the_future, now));
    }
}
