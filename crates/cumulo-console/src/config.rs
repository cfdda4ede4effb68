//! Console configuration
//!
//! Read once at startup from the host page. The server (or static host)
//! injects values via `<meta>` tags; `window.__CUMULO_CONFIG__` is the
//! JavaScript fallback. The AI credential is the only secret; its absence
//! disables the assistant instead of failing.

use cumulo_assist::{Assistant, OpenAiClient};
use wasm_bindgen::JsCast;

/// Console configuration
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    /// Console version string (injected by the host)
    pub version: Option<String>,
    /// AI credential; `None` disables the assistant
    pub ai_api_key: Option<String>,
    /// AI endpoint override (OpenAI-compatible)
    pub ai_base_url: Option<String>,
    /// AI model override
    pub ai_model: Option<String>,
}

impl ConsoleConfig {
    /// Load configuration (priority order):
    /// 1. `<meta name="cumulo:...">` tags (host-injected)
    /// 2. `window.__CUMULO_CONFIG__` object (JavaScript injection)
    pub fn load() -> Self {
        Self {
            version: config_value("cumulo:version", "version"),
            ai_api_key: config_value("cumulo:ai-api-key", "ai_api_key"),
            ai_base_url: config_value("cumulo:ai-base-url", "ai_base_url"),
            ai_model: config_value("cumulo:ai-model", "ai_model"),
        }
    }

    /// Build the assistant from this configuration. Missing or rejected
    /// credentials yield a disabled assistant, never an error.
    pub fn assistant(&self) -> Assistant {
        let Some(key) = self.ai_api_key.as_deref() else {
            return Assistant::disabled();
        };

        let mut builder = OpenAiClient::builder().api_key(key);
        if let Some(url) = &self.ai_base_url {
            builder = builder.base_url(url);
        }
        if let Some(model) = &self.ai_model {
            builder = builder.model(model);
        }
        match builder.build() {
            Ok(client) => Assistant::new(client),
            Err(_) => Assistant::disabled(),
        }
    }
}

/// First non-empty value from the meta tag, then the JS config object
fn config_value(meta_name: &str, js_key: &str) -> Option<String> {
    get_meta_content(meta_name)
        .or_else(|| get_js_config(js_key))
        .filter(|v| !v.is_empty())
}

/// Get content from a `<meta name="...">` tag
fn get_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from `window.__CUMULO_CONFIG__`
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__CUMULO_CONFIG__".into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    value.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_disables_assistant() {
        let config = ConsoleConfig::default();
        assert!(config.ai_api_key.is_none());
        assert!(!config.assistant().is_enabled());
    }

    #[test]
    fn configured_key_enables_assistant() {
        let config = ConsoleConfig {
            ai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert!(config.assistant().is_enabled());
    }

    #[test]
    fn invalid_endpoint_degrades_to_disabled() {
        let config = ConsoleConfig {
            ai_api_key: Some("sk-test".to_string()),
            ai_base_url: Some("ftp://nope".to_string()),
            ..Default::default()
        };
        assert!(!config.assistant().is_enabled());
    }
}
