use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    CompletionClient, CompletionError, InterviewRepository, RepositoryError, SpeechError,
    SpeechSynthesizer, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{
    ChatMessage, Interview, InterviewId, InterviewMessage, InterviewStatus, MessageRole, UserId,
};

pub const DEFAULT_INTERVIEWER_PROMPT: &str = "You are an interviewer at a large technology \
company. Introduce yourself and run the interview the way a real interviewer would: ask the \
candidate logical questions about data structures, one at a time, and follow up on their answers.";

/// One spoken exchange: what the candidate said and how the interviewer
/// answered.
#[derive(Debug, Clone)]
pub struct InterviewReply {
    pub transcript: String,
    pub reply: String,
    pub audio: Vec<u8>,
}

pub struct InterviewService<C>
where
    C: CompletionClient + ?Sized,
{
    completion_client: Arc<C>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    repository: Arc<dyn InterviewRepository>,
    interviewer_prompt: String,
}

impl<C> InterviewService<C>
where
    C: CompletionClient + ?Sized,
{
    pub fn new(
        completion_client: Arc<C>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
        repository: Arc<dyn InterviewRepository>,
        interviewer_prompt: String,
    ) -> Self {
        Self {
            completion_client,
            transcription_engine,
            speech_synthesizer,
            repository,
            interviewer_prompt,
        }
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn start(&self, owner_id: UserId) -> Result<Interview, InterviewError> {
        let interview = Interview::new(owner_id);
        self.repository.create_interview(&interview).await?;
        tracing::info!(interview_id = %interview.id, "Interview started");
        Ok(interview)
    }

    pub async fn list(&self, owner_id: &UserId) -> Result<Vec<Interview>, InterviewError> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Interviews owned by someone else are reported as missing.
    pub async fn get(
        &self,
        owner_id: &UserId,
        id: InterviewId,
    ) -> Result<Interview, InterviewError> {
        self.repository
            .get_interview(id)
            .await?
            .filter(|interview| &interview.owner_id == owner_id)
            .ok_or(InterviewError::NotFound(id))
    }

    pub async fn messages(
        &self,
        owner_id: &UserId,
        id: InterviewId,
    ) -> Result<Vec<InterviewMessage>, InterviewError> {
        self.get(owner_id, id).await?;
        Ok(self.repository.get_messages(id).await?)
    }

    /// Transcribes the candidate's answer, asks the model for the next
    /// interviewer turn and voices it.
    #[instrument(skip(self, audio), fields(interview_id = %id, audio_bytes = audio.len()))]
    pub async fn respond(
        &self,
        owner_id: &UserId,
        id: InterviewId,
        audio: &[u8],
    ) -> Result<InterviewReply, InterviewError> {
        let interview = self.get(owner_id, id).await?;
        if interview.status == InterviewStatus::Completed {
            return Err(InterviewError::AlreadyCompleted(id));
        }
        if audio.is_empty() {
            return Err(InterviewError::EmptyAudio);
        }

        let transcript = self.transcription_engine.transcribe(audio).await?;
        let transcript = transcript.trim().to_string();
        if transcript.is_empty() {
            return Err(InterviewError::EmptyTranscript);
        }
        tracing::debug!(chars = transcript.len(), "Candidate answer transcribed");

        let history = self.repository.get_messages(id).await?;
        self.repository
            .append_message(&InterviewMessage::new(
                id,
                MessageRole::User,
                transcript.clone(),
            ))
            .await?;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(self.interviewer_prompt.as_str()));
        messages.extend(history.into_iter().map(|m| ChatMessage {
            role: m.role,
            content: m.content,
        }));
        messages.push(ChatMessage::user(transcript.as_str()));

        let reply = self.completion_client.complete(&messages).await?;
        if reply.trim().is_empty() {
            return Err(InterviewError::EmptyReply);
        }

        self.repository
            .append_message(&InterviewMessage::new(
                id,
                MessageRole::Assistant,
                reply.clone(),
            ))
            .await?;

        let audio = self.speech_synthesizer.synthesize(&reply).await?;
        tracing::info!(
            turns = messages.len() - 1,
            audio_bytes = audio.len(),
            "Interviewer replied"
        );

        Ok(InterviewReply {
            transcript,
            reply,
            audio,
        })
    }

    /// Idempotent.
    #[instrument(skip(self), fields(interview_id = %id))]
    pub async fn end(&self, owner_id: &UserId, id: InterviewId) -> Result<(), InterviewError> {
        let interview = self.get(owner_id, id).await?;
        if interview.status == InterviewStatus::Completed {
            return Ok(());
        }
        self.repository
            .update_status(id, InterviewStatus::Completed)
            .await?;
        tracing::info!("Interview ended");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("interview not found: {0}")]
    NotFound(InterviewId),
    #[error("interview already completed: {0}")]
    AlreadyCompleted(InterviewId),
    #[error("no audio provided")]
    EmptyAudio,
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("model returned an empty reply")]
    EmptyReply,
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
    #[error("speech: {0}")]
    Speech(#[from] SpeechError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
