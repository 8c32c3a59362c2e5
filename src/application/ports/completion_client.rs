use async_trait::async_trait;

use crate::domain::ChatMessage;

/// Turn-based text completion: role-tagged messages in, one reply out.
///
/// The reply may be cut short by the provider's output limit; callers that
/// need long output drive the conversation themselves.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
