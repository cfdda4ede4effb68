//! OpenAI-compatible client over the browser `fetch` API
//!
//! Works against OpenAI or any compatible endpoint (Ollama, vLLM, LocalAI)
//! by configuring `base_url`. The request is issued with `gloo-net`, so this
//! client is only functional on the wasm target; everything up to `generate`
//! (builder, validation, wire types) is target-independent and tested
//! natively.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AssistError, AssistResult};
use crate::provider::TextGenerator;
use crate::types::ChatRequest;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Maximum error body bytes carried into an error message
const MAX_ERROR_BODY_BYTES: usize = 2048;

/// Builder for [`OpenAiClient`]
#[derive(Debug, Default)]
pub struct OpenAiClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    model: Option<String>,
}

impl OpenAiClientBuilder {
    /// Set the API key (required)
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Override the base URL (for self-hosted compatible endpoints)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the completion model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the client
    pub fn build(self) -> AssistResult<OpenAiClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| AssistError::Config("api_key is required".to_string()))?;
        if api_key.expose_secret().is_empty() {
            return Err(AssistError::Config("api_key must not be empty".to_string()));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(AssistError::Config(format!(
                "base_url must start with http:// or https://, got: {base_url}"
            )));
        }

        let client = OpenAiClient {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        };
        debug!(base_url = %client.base_url, model = %client.model, "assist client initialized");
        Ok(client)
    }
}

/// OpenAI-compatible completion client
pub struct OpenAiClient {
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiClient {
    /// Create a builder
    pub fn builder() -> OpenAiClientBuilder {
        OpenAiClientBuilder::default()
    }

    fn wire_request(&self, request: &ChatRequest) -> WireChatRequest {
        WireChatRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait(?Send)]
impl TextGenerator for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &ChatRequest) -> AssistResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let wire = self.wire_request(request);
        debug!(url = %url, model = %wire.model, messages = wire.messages.len(), "completion request");

        let resp = gloo_net::http::Request::post(&url)
            .header(
                "Authorization",
                &format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&wire)?
            .send()
            .await?;

        if !resp.ok() {
            let status = resp.status();
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY_BYTES {
                let mut cut = MAX_ERROR_BODY_BYTES;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            // Prefer the structured error message when the body parses.
            let message = serde_json::from_str::<WireErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(status, "completion request rejected");
            return Err(AssistError::from_status(status, message));
        }

        let parsed: WireChatResponse = resp
            .json()
            .await
            .map_err(|e| AssistError::Serialization(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AssistError::Serialization("response contained no choices".to_string()))
    }
}

// ============================================================================
// Wire types (private)
// ============================================================================

#[derive(Serialize)]
struct WireChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct WireChatResponse {
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireErrorResponse {
    error: WireErrorDetail,
}

#[derive(Deserialize)]
struct WireErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_api_key() {
        let err = OpenAiClient::builder().build().unwrap_err();
        assert!(err.to_string().contains("api_key is required"));

        let err = OpenAiClient::builder().api_key("").build().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn builder_rejects_bad_base_url() {
        let err = OpenAiClient::builder()
            .api_key("sk-test")
            .base_url("ftp://nope")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn builder_defaults_and_trailing_slash() {
        let client = OpenAiClient::builder()
            .api_key("sk-test")
            .base_url("https://llm.internal/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://llm.internal/v1");
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = OpenAiClient::builder()
            .api_key("sk-secretkey123")
            .build()
            .unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secretkey123"));
    }

    #[test]
    fn wire_request_applies_default_model() {
        let client = OpenAiClient::builder()
            .api_key("sk-test")
            .model("qwen2.5")
            .build()
            .unwrap();
        let wire = client.wire_request(&ChatRequest::prompt("hi"));
        assert_eq!(wire.model, "qwen2.5");

        let mut req = ChatRequest::prompt("hi");
        req.model = Some("gpt-4o".to_string());
        assert_eq!(client.wire_request(&req).model, "gpt-4o");
    }

    #[test]
    fn wire_request_serialization_skips_absent_fields() {
        let client = OpenAiClient::builder().api_key("sk-test").build().unwrap();
        let wire = client.wire_request(&ChatRequest::prompt("hello").temperature(0.3));
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("max_tokens").is_none());
        let temp = json["temperature"].as_f64().unwrap();
        assert!((temp - 0.3).abs() < 1e-6);
    }

    #[test]
    fn wire_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-test",
            "model": "gpt-4o-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}
            ]
        }"#;
        let resp: WireChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices[0].message.content, "hello");
    }

    #[test]
    fn wire_error_deserialization() {
        let json = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        let err: WireErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message, "Invalid API key");
    }
}
