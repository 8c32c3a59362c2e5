use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;

use konnect::application::ports::{
    SpeechError, SpeechSynthesizer, TranscriptionEngine, TranscriptionError,
};
use konnect::infrastructure::audio::{
    OpenAiSpeechSynthesizer, OpenAiWhisperEngine, sniff_audio_format,
};

const WAV_HEADER: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";
const MP3_FRAME: &[u8] = &[0xFF, 0xFB, 0x90, 0x64];

async fn spawn_mock_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

#[test]
fn given_known_containers_when_sniffing_then_detects_format() {
    assert_eq!(sniff_audio_format(WAV_HEADER), Some(("audio.wav", "audio/wav")));
    assert_eq!(
        sniff_audio_format(&[0x1A, 0x45, 0xDF, 0xA3, 0x01]),
        Some(("audio.webm", "audio/webm"))
    );
    assert_eq!(sniff_audio_format(b"OggS\x00\x02"), Some(("audio.ogg", "audio/ogg")));
    assert_eq!(sniff_audio_format(b"ID3\x04\x00"), Some(("audio.mp3", "audio/mpeg")));
    assert_eq!(sniff_audio_format(MP3_FRAME), Some(("audio.mp3", "audio/mpeg")));
    assert_eq!(
        sniff_audio_format(b"\x00\x00\x00\x20ftypM4A "),
        Some(("audio.m4a", "audio/mp4"))
    );
}

#[test]
fn given_unknown_bytes_when_sniffing_then_none() {
    assert_eq!(sniff_audio_format(b"hello world"), None);
    assert_eq!(sniff_audio_format(&[]), None);
}

#[tokio::test]
async fn given_wav_upload_when_transcribing_then_returns_trimmed_text() {
    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(|headers: HeaderMap, body: Bytes| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = String::from_utf8_lossy(&body).to_string();
            if content_type.starts_with("multipart/form-data")
                && body.contains("whisper-1")
                && body.contains("audio.wav")
            {
                (StatusCode::OK, "  I would use a queue.\n").into_response()
            } else {
                (StatusCode::BAD_REQUEST, "bad upload").into_response()
            }
        }),
    );
    let base_url = spawn_mock_server(app).await;
    let engine = OpenAiWhisperEngine::new("sk-test", &base_url, "whisper-1");

    let transcript = engine.transcribe(WAV_HEADER).await.unwrap();

    assert_eq!(transcript, "I would use a queue.");
}

#[tokio::test]
async fn given_unrecognised_audio_when_transcribing_then_unsupported_format() {
    let engine = OpenAiWhisperEngine::new("sk-test", "http://127.0.0.1:9", "whisper-1");

    let result = engine.transcribe(b"not audio").await;

    assert!(matches!(result, Err(TranscriptionError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn given_api_error_when_transcribing_then_api_request_failed() {
    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid key") }),
    );
    let base_url = spawn_mock_server(app).await;
    let engine = OpenAiWhisperEngine::new("sk-bad", &base_url, "whisper-1");

    let result = engine.transcribe(MP3_FRAME).await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_text_when_synthesizing_then_returns_audio_bytes() {
    let app = Router::new().route(
        "/v1/audio/speech",
        post(|axum::Json(request): axum::Json<Value>| async move {
            if request["model"] == "tts-1"
                && request["voice"] == "alloy"
                && request["input"] == "Next question."
                && request["response_format"] == "mp3"
            {
                ([(header::CONTENT_TYPE, "audio/mpeg")], MP3_FRAME.to_vec()).into_response()
            } else {
                StatusCode::BAD_REQUEST.into_response()
            }
        }),
    );
    let base_url = spawn_mock_server(app).await;
    let synthesizer = OpenAiSpeechSynthesizer::new("sk-test", &base_url, "tts-1", "alloy");

    let audio = synthesizer.synthesize("Next question.").await.unwrap();

    assert_eq!(audio, MP3_FRAME.to_vec());
}

#[tokio::test]
async fn given_blank_text_when_synthesizing_then_empty_input_without_request() {
    let synthesizer =
        OpenAiSpeechSynthesizer::new("sk-test", "http://127.0.0.1:9", "tts-1", "alloy");

    let result = synthesizer.synthesize("   ").await;

    assert!(matches!(result, Err(SpeechError::EmptyInput)));
}
