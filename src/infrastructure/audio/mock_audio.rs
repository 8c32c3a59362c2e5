use async_trait::async_trait;

use crate::application::ports::{
    SpeechError, SpeechSynthesizer, TranscriptionEngine, TranscriptionError,
};

/// Scaffold-mode transcriber: every recording "says" the same sentence.
pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        Ok("I would use a hash map keyed by the element.".to_string())
    }
}

/// Scaffold-mode synthesizer returning a single silent MPEG frame header.
pub struct MockSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyInput);
        }
        Ok(vec![0xFF, 0xFB, 0x90, 0x64])
    }
}
