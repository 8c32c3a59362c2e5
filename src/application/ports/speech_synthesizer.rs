use async_trait::async_trait;

/// Text-to-speech. Returns encoded audio (`audio/mpeg`).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty input")]
    EmptyInput,
}
