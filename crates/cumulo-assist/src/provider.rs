//! Text generation provider trait, the transport seam
//!
//! The console runs in a browser, so provider futures are not `Send`; the
//! trait is `?Send` and boxed providers are held behind `Rc`, never shared
//! across threads.

use async_trait::async_trait;

use crate::error::AssistResult;
use crate::types::ChatRequest;

/// One blocking round-trip: prompt in, plain text out.
///
/// Implementations handle authentication, transport, and error mapping for a
/// specific endpoint. Mocks implement this directly in tests.
#[async_trait(?Send)]
pub trait TextGenerator {
    /// Provider name (for logs)
    fn name(&self) -> &str;

    /// Perform a completion and return the raw response text
    async fn generate(&self, request: &ChatRequest) -> AssistResult<String>;
}
