use async_trait::async_trait;

use crate::error::AppResult;

/// Seam between the classifier and the network. Implementations send one
/// user-role prompt and return the assistant message content verbatim.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
