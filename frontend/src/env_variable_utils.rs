use crate::config::{GatewayConfig, DEFAULT_GATEWAY_URL};
use lazy_static::lazy_static;
use std::str::FromStr;
use web_sys::window;

lazy_static! {
    pub static ref GATEWAY_URL: String = get_gateway_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::debug!("Environment variable '{}' is undefined", key);
        return None;
    }

    // Numbers and booleans are accepted as well as strings.
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
        .or_else(|| value.as_bool().map(|flag| flag.to_string()))
}

fn get_parsed_env_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = get_env_var(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring environment variable '{}': cannot parse '{}'", key, raw);
            None
        }
    }
}

pub fn get_gateway_url() -> String {
    get_env_var("GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube Channel Scout".to_string())
}

pub fn is_debug_mode() -> bool {
    get_parsed_env_var("DEBUG_MODE").unwrap_or(false)
}

/// Gateway configuration for the running page. Falls back to the default
/// gateway when `GATEWAY_URL` cannot be parsed; individual limits may be
/// overridden through `ENV_CONFIG`.
pub fn load_gateway_config() -> GatewayConfig {
    let mut config = GatewayConfig::new(&GATEWAY_URL).unwrap_or_else(|e| {
        log::error!("{e}; falling back to {DEFAULT_GATEWAY_URL}");
        GatewayConfig::default()
    });

    if let Some(region) = get_env_var("FALLBACK_REGION").filter(|code| !code.trim().is_empty()) {
        config.fallback_region = region.trim().to_uppercase();
    }
    if let Some(count) = get_parsed_env_var("SEARCH_MAX_RESULTS") {
        config.search_max_results = count;
    }
    if let Some(count) = get_parsed_env_var("TRENDING_MAX_RESULTS") {
        config.trending_max_results = count;
    }
    if let Some(count) = get_parsed_env_var("COMMENT_PAGE_SIZE") {
        config.comment_page_size = count;
    }

    config
}
