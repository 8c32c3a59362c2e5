use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::{ChatMessage, MessageRole};

/// Offline stand-in used in scaffold mode. Translation conversations get a
/// single finished, tagged reply echoing the source text; anything else
/// gets a canned interviewer line.
pub struct MockCompletionClient {
    delay: Duration,
}

impl MockCompletionClient {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let expects_tags = messages
            .iter()
            .any(|m| m.role == MessageRole::System && m.content.contains("<is_done>"));
        if !expects_tags {
            return Ok("Thanks. Can you explain how a hash map handles collisions?".to_string());
        }

        let source = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .and_then(|m| m.content.rsplit("\n\n").next())
            .unwrap_or_default();

        Ok(format!(
            "<thinking>Scaffold mode: echoing source text.</thinking>\n\
<translation>{source}</translation>\n\
<is_done>Yes</is_done>"
        ))
    }
}
