//! # cumulo-assist: AI Text Generation Client
//!
//! A thin client for an OpenAI-compatible text endpoint, used by the console
//! to turn prompts into YAML manifests, log explanations, and tuning
//! suggestions.
//!
//! The boundary contract is deliberately forgiving: the [`Assistant`] facade
//! never surfaces an error to its callers. Every failure (missing
//! credential, network error, rejected request, malformed response) degrades
//! to a fixed, operation-specific fallback string, and callers render
//! whatever string comes back. One request, one response; no streaming, no
//! retries.
//!
//! ```rust,no_run
//! use cumulo_assist::{Assistant, OpenAiClient};
//!
//! # async fn example() {
//! let client = OpenAiClient::builder()
//!     .api_key("sk-...")
//!     .build()
//!     .expect("valid config");
//! let assistant = Assistant::new(client);
//!
//! let yaml = assistant
//!     .generate_manifest("a redis cache with 2 replicas")
//!     .await;
//! # let _ = yaml;
//! # }
//! ```

pub mod assistant;
pub mod error;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod types;

pub use assistant::{
    Assistant, LOG_ANALYSIS_FALLBACK, MANIFEST_FALLBACK, OPTIMIZATION_FALLBACK,
};
pub use error::{AssistError, AssistResult};
pub use openai::{OpenAiClient, OpenAiClientBuilder};
pub use provider::TextGenerator;
pub use types::{ChatMessage, ChatRequest, Role};
