mod mock_audio;
mod openai_speech_synthesizer;
mod openai_whisper_engine;

pub use mock_audio::{MockSpeechSynthesizer, MockTranscriptionEngine};
pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use openai_whisper_engine::{OpenAiWhisperEngine, sniff_audio_format};
