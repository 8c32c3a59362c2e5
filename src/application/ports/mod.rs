mod completion_client;
mod interview_repository;
mod repository_error;
mod speech_synthesizer;
mod transcription_engine;
mod translation_repository;

pub use completion_client::{CompletionClient, CompletionError};
pub use interview_repository::InterviewRepository;
pub use repository_error::RepositoryError;
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_repository::TranslationRepository;
