use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Published backend used when no runtime override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://refine-dashboard-sample.onrender.com/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub google_client_id: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static GOOGLE_CLIENT_ID: OnceLock<Option<String>> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn cache_google_client_id(value: Option<String>) {
    if value.is_some() {
        let _ = GOOGLE_CLIENT_ID.set(value);
    }
}

pub fn google_client_id() -> Option<String> {
    GOOGLE_CLIENT_ID.get().cloned().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_global_config(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let get = |key: &str| {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: get("api_base_url").or_else(|| get("API_BASE_URL")),
        google_client_id: get("google_client_id").or_else(|| get("GOOGLE_CLIENT_ID")),
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__YARIGA_ENV (env.js) takes precedence over window.__YARIGA_CONFIG.
    read_global_config("__YARIGA_ENV").or_else(|| read_global_config("__YARIGA_CONFIG"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(cfg) = snapshot_from_globals() {
        cache_google_client_id(cfg.google_client_id);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    if let Some(cfg) = fetch_runtime_config().await {
        cache_google_client_id(cfg.google_client_id);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_published_api_base_url() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
        // Cached after the first resolution.
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }
}
