use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthenticatedUser, error_response};
use crate::application::ports::CompletionClient;
use crate::application::services::{TranslationError, TranslationMessage};
use crate::domain::{
    DocumentType, NewTranslation, Translation, TranslationId, TranslationStatus,
};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTranslationRequest {
    #[serde(default)]
    pub input_document: Option<String>,
    #[serde(default)]
    pub chapters: Option<Vec<String>>,
    pub document_type: DocumentType,
    pub target_language: String,
    #[serde(default)]
    pub document_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTranslationResponse {
    pub id: String,
    pub status: TranslationStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub id: String,
    pub name: String,
    pub status: TranslationStatus,
    pub document_type: DocumentType,
    pub target_language: String,
    pub translated_doc: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Translation> for TranslationResponse {
    fn from(t: Translation) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            status: t.status,
            document_type: t.document_type,
            target_language: t.target_language,
            translated_doc: t.translated_doc,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, request), fields(owner_id = %user.0))]
pub async fn submit_translation_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Json(request): Json<SubmitTranslationRequest>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    if request.target_language.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "targetLanguage is required");
    }

    let id = request
        .document_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::debug!(
        translation_id = %id,
        document = %sanitize_for_log(request.input_document.as_deref().unwrap_or_default()),
        "Processing translation submission"
    );

    let new_translation = NewTranslation {
        id: TranslationId::new(id),
        input_document: request.input_document,
        chapters: request.chapters,
        document_type: request.document_type,
        target_language: request.target_language,
    };

    let translation = match state
        .translation_service
        .submit(user.0, new_translation)
        .await
    {
        Ok(t) => t,
        Err(TranslationError::NoContent) => {
            return error_response(StatusCode::BAD_REQUEST, "No content provided for translation");
        }
        Err(e @ TranslationError::DuplicateId(_)) => {
            return error_response(StatusCode::CONFLICT, e.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store translation");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store translation: {}", e),
            );
        }
    };

    let id = translation.id.clone();
    if let Err(e) = state
        .translation_sender
        .send(TranslationMessage { translation })
        .await
    {
        tracing::error!(error = %e, "Failed to enqueue translation job");
        if let Err(e) = state.translation_service.mark_failed(&id).await {
            tracing::error!(error = %e, "Failed to record enqueue failure");
        }
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Translation queue closed or worker unavailable",
        );
    }

    tracing::info!(translation_id = %id, "Translation job enqueued");

    (
        StatusCode::ACCEPTED,
        Json(SubmitTranslationResponse {
            id: id.to_string(),
            status: TranslationStatus::Loading,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn list_translations_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    match state.translation_service.list(&user.0).await {
        Ok(translations) => {
            let body: Vec<TranslationResponse> =
                translations.into_iter().map(TranslationResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list translations");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list translations: {}", e),
            )
        }
    }
}

#[tracing::instrument(skip(state), fields(owner_id = %user.0))]
pub async fn get_translation_handler<C>(
    State(state): State<AppState<C>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Response
where
    C: CompletionClient + ?Sized + 'static,
{
    match state
        .translation_service
        .get(&user.0, &TranslationId::new(id.as_str()))
        .await
    {
        Ok(Some(translation)) => {
            (StatusCode::OK, Json(TranslationResponse::from(translation))).into_response()
        }
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("Translation not found: {}", id),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch translation");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch translation: {}", e),
            )
        }
    }
}
