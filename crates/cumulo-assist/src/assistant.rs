//! The assistant facade: prompt templates in, plain strings out
//!
//! Callers get a `String` back from every operation, success or not. When a
//! call fails (or no credential was configured at startup), the operation's
//! fixed fallback string is returned and the failure is logged; nothing
//! propagates.

use tracing::warn;

use crate::prompt;
use crate::provider::TextGenerator;
use crate::types::ChatRequest;

/// Fallback shown when log analysis is unavailable
pub const LOG_ANALYSIS_FALLBACK: &str = "AI analysis is unavailable. Check the assistant \
credential under Settings, then try again.";

/// Fallback shown when manifest generation is unavailable
pub const MANIFEST_FALLBACK: &str = "# AI generation is unavailable.\n# Check the assistant \
credential under Settings, then try again.";

/// Fallback shown when optimization suggestions are unavailable
pub const OPTIMIZATION_FALLBACK: &str = "AI suggestions are unavailable. Check the assistant \
credential under Settings, then try again.";

/// AI operations exposed to the console views
pub struct Assistant {
    provider: Option<Box<dyn TextGenerator>>,
}

impl Assistant {
    /// Assistant backed by a provider
    pub fn new(provider: impl TextGenerator + 'static) -> Self {
        Self {
            provider: Some(Box::new(provider)),
        }
    }

    /// Assistant without a credential: every operation returns its fallback.
    /// A missing credential must never crash the console.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Root-cause analysis for a captured log excerpt
    pub async fn analyze_logs(&self, log_excerpt: &str) -> String {
        self.run("log analysis", prompt::log_analysis(log_excerpt), LOG_ANALYSIS_FALLBACK)
            .await
    }

    /// YAML manifest from a natural-language deployment description,
    /// code-fence markers stripped
    pub async fn generate_manifest(&self, description: &str) -> String {
        let text = self
            .run(
                "manifest generation",
                prompt::manifest_generation(description),
                MANIFEST_FALLBACK,
            )
            .await;
        prompt::strip_code_fences(&text)
    }

    /// Tuning suggestions from a serialized metrics snapshot
    pub async fn suggest_optimizations(&self, metrics_json: &str) -> String {
        self.run(
            "optimization suggestions",
            prompt::optimization(metrics_json),
            OPTIMIZATION_FALLBACK,
        )
        .await
    }

    async fn run(&self, operation: &str, request: ChatRequest, fallback: &str) -> String {
        let Some(provider) = self.provider.as_deref() else {
            warn!(operation, "assistant disabled: no credential configured");
            return fallback.to_string();
        };
        match provider.generate(&request).await {
            Ok(text) => text,
            Err(err) => {
                warn!(operation, provider = provider.name(), error = %err, "assistant call failed");
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssistError, AssistResult};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Mock provider: scripted reply (`None` = connection failure), records
    /// the last request for inspection
    struct Scripted {
        reply: Option<String>,
        last_request: RefCell<Option<ChatRequest>>,
    }

    impl Scripted {
        fn ok(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                last_request: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                last_request: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl TextGenerator for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, request: &ChatRequest) -> AssistResult<String> {
            *self.last_request.borrow_mut() = Some(request.clone());
            self.reply
                .clone()
                .ok_or_else(|| AssistError::Connection("socket closed".to_string()))
        }
    }

    #[test]
    fn failures_degrade_to_fallbacks_for_all_operations() {
        block_on(async {
            let assistant = Assistant::new(Scripted::failing());
            assert_eq!(assistant.analyze_logs("boom").await, LOG_ANALYSIS_FALLBACK);
            assert_eq!(assistant.generate_manifest("x").await, MANIFEST_FALLBACK);
            assert_eq!(
                assistant.suggest_optimizations("{}").await,
                OPTIMIZATION_FALLBACK
            );
        });
    }

    #[test]
    fn disabled_assistant_returns_fallbacks() {
        block_on(async {
            let assistant = Assistant::disabled();
            assert!(!assistant.is_enabled());
            assert_eq!(assistant.analyze_logs("boom").await, LOG_ANALYSIS_FALLBACK);
            assert_eq!(assistant.generate_manifest("x").await, MANIFEST_FALLBACK);
            assert_eq!(
                assistant.suggest_optimizations("{}").await,
                OPTIMIZATION_FALLBACK
            );
        });
    }

    #[test]
    fn manifest_generation_strips_fences() {
        block_on(async {
            let assistant = Assistant::new(Scripted::ok("```yaml\nkind: Pod\n```"));
            assert_eq!(assistant.generate_manifest("a pod").await, "kind: Pod");
        });
    }

    #[async_trait(?Send)]
    impl TextGenerator for std::rc::Rc<Scripted> {
        fn name(&self) -> &str {
            self.as_ref().name()
        }

        async fn generate(&self, request: &ChatRequest) -> AssistResult<String> {
            self.as_ref().generate(request).await
        }
    }

    #[test]
    fn log_analysis_passes_excerpt_through_prompt() {
        block_on(async {
            let provider = std::rc::Rc::new(Scripted::ok("looks like a dns failure"));
            let assistant = Assistant::new(provider.clone());
            let out = assistant.analyze_logs("no such host").await;
            assert_eq!(out, "looks like a dns failure");

            let request = provider.last_request.borrow().clone().expect("recorded");
            assert_eq!(request.messages[0].role, crate::types::Role::System);
            assert!(request.messages[1].content.contains("no such host"));
        });
    }
}
