use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthenticatedUser, error_response};
use crate::application::ports::{CompletionClient, TranscriptionError};
use crate::application::services::InterviewError;
use crate::domain::{Interview, InterviewId, InterviewMessage, InterviewStatus, MessageRole};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: String,
    pub title: Option<String>,
    pub status: InterviewStatus,
    pub created_at: String,
}

impl From<Interview> for InterviewResponse {
    fn from(i: Interview) -> Self {
        Self {
            id: i.id.to_string(),
            title: i.title,
            status: i.status,
            created_at: i.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewMessageResponse {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: String,
}

impl From<InterviewMessage> for InterviewMessageResponse {
    fn from(m: InterviewMessage) -> Self {
        Self {
            id: m.id.to_string(),
            role: m.role,
            content: m.content,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    /// Base64-encoded recording of the candidate's answer.
    pub audio: String,
}

fn parse_interview_id(raw: &str) -> Result<InterviewId, Response> {
    Uuid::parse_str(raw).map(InterviewId::from_uuid).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid interview ID: {}", raw),
        )
    })
}

fn interview_error_response(e: InterviewError) -> Response {
    let status = match &e {
        InterviewError::NotFound(_) => StatusCode::NOT_FOUND,
        InterviewError::AlreadyCompleted(_) => StatusCode::CONFLICT,
        InterviewError::EmptyAudio | InterviewError::EmptyTranscript => StatusCode::BAD_REQUEST,
        InterviewError::Transcription(TranscriptionError::UnsupportedFormat(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        InterviewError::Transcription(_)
        | InterviewError::Completion(_)
        | InterviewError::Speech(_)
        | InterviewError::EmptyReply => StatusCode::BAD_GATEWAY,
        InterviewError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %e, "Interview request failed");
    } else {
        tracing::debug!(error = %e, "Interview request rejected");
    }
    error_response(status, e.to_string())
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn create_interview_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    match state.interview_service.start(user.0).await {
        Ok(interview) => {
            (StatusCode::CREATED, Json(InterviewResponse::from(interview))).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn list_interviews_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    match state.interview_service.list(&user.0).await {
        Ok(interviews) => {
            let body: Vec<InterviewResponse> =
                interviews.into_iter().map(InterviewResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn get_interview_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    let id = match parse_interview_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.interview_service.get(&user.0, id).await {
        Ok(interview) => (StatusCode::OK, Json(InterviewResponse::from(interview))).into_response(),
        Err(e) => interview_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn list_messages_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    let id = match parse_interview_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.interview_service.messages(&user.0, id).await {
        Ok(messages) => {
            let body: Vec<InterviewMessageResponse> = messages
                .into_iter()
                .map(InterviewMessageResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// Takes the candidate's recorded answer and returns the interviewer's
/// spoken reply as `audio/mpeg`.
#[tracing::instrument(skip(state, request), fields(owner_id = %user.0))]
pub async fn respond_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<RespondRequest>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    let id = match parse_interview_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let audio = match BASE64.decode(request.audio.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Audio is not valid base64: {}", e),
            );
        }
    };

    match state.interview_service.respond(&user.0, id, &audio).await {
        Ok(reply) => {
            tracing::debug!(
                transcript = %sanitize_for_log(&reply.transcript),
                reply = %sanitize_for_log(&reply.reply),
                "Interview turn completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "audio/mpeg")],
                reply.audio,
            )
                .into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn end_interview_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    let id = match parse_interview_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.interview_service.end(&user.0, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => interview_error_response(e),
    }
}
