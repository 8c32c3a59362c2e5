use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

/// File name and MIME type for the upload, sniffed from the container
/// header. Browsers record WebM or Ogg; uploads may also be WAV or MP3.
pub fn sniff_audio_format(data: &[u8]) -> Option<(&'static str, &'static str)> {
    match data {
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => {
            Some(("audio.wav", "audio/wav"))
        }
        [0x1A, 0x45, 0xDF, 0xA3, ..] => Some(("audio.webm", "audio/webm")),
        [b'O', b'g', b'g', b'S', ..] => Some(("audio.ogg", "audio/ogg")),
        [b'I', b'D', b'3', ..] => Some(("audio.mp3", "audio/mpeg")),
        [0xFF, second, ..] if second & 0xE0 == 0xE0 => Some(("audio.mp3", "audio/mpeg")),
        [_, _, _, _, b'f', b't', b'y', b'p', ..] => Some(("audio.m4a", "audio/mp4")),
        _ => None,
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        let (file_name, mime) = sniff_audio_format(audio_data).ok_or_else(|| {
            TranscriptionError::UnsupportedFormat("unrecognised audio container".to_string())
        })?;

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, mime, bytes = audio_data.len(), "Sending audio for transcription");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(chars = transcript.len(), "Transcription completed");

        Ok(transcript.trim().to_string())
    }
}
