#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Runtime configuration injected by the hosting page through `window.ENV`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults
    pub fn from_env() -> Self {
        Self::with_api_url(get_env_value("API_URL").as_deref())
    }

    fn with_api_url(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        Self {
            api_url: api_url.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_url(None)
    }
}

/// Read a string property from window.ENV
fn get_env_value(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&env, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        assert_eq!(AppConfig::default().api_url, "http://localhost:5000");
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = AppConfig::with_api_url(Some("https://predict.example.com/"));
        assert_eq!(config.api_url, "https://predict.example.com");
    }

    #[test]
    fn test_blank_api_url_falls_back() {
        let config = AppConfig::with_api_url(Some("   "));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_env_outside_browser_uses_default() {
        assert_eq!(AppConfig::from_env(), AppConfig::default());
    }
}
