use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    CompletionClient, CompletionError, RepositoryError, TranslationRepository,
};
use crate::domain::{
    NewTranslation, Translation, TranslationId, TranslationSource, TranslationUpdate, UserId,
};

use super::translation_output::{TranslatedUnit, combine_units, preview_title};
use super::translation_prompt::{chapter_prompt, initial_prompt};
use super::{ContinuationLoop, ContinuationState, TagParser};

/// The chunked translation driver.
///
/// Each unit (the whole document, or one chapter) is pushed through a
/// [`ContinuationLoop`]; chapters are translated strictly in order because
/// every chapter prompt recaps the ones before it. The stored record ends
/// either `completed` with the combined document or `failed`; nothing in
/// between is persisted.
pub struct TranslationService<C>
where
    C: CompletionClient + ?Sized,
{
    completion_client: Arc<C>,
    repository: Arc<dyn TranslationRepository>,
    max_iterations: usize,
}

impl<C> TranslationService<C>
where
    C: CompletionClient + ?Sized,
{
    pub fn new(
        completion_client: Arc<C>,
        repository: Arc<dyn TranslationRepository>,
        max_iterations: usize,
    ) -> Self {
        Self {
            completion_client,
            repository,
            max_iterations,
        }
    }

    /// Stores the `loading` record. A submission with nothing to translate is
    /// failed on the spot.
    #[instrument(skip(self, request), fields(translation_id = %request.id, owner_id = %owner_id))]
    pub async fn submit(
        &self,
        owner_id: UserId,
        request: NewTranslation,
    ) -> Result<Translation, TranslationError> {
        let translation = Translation::new(owner_id, request);

        self.repository
            .insert(&translation)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolation(_) => {
                    TranslationError::DuplicateId(translation.id.clone())
                }
                other => TranslationError::Repository(other),
            })?;

        if translation.source().is_none() {
            tracing::warn!("Translation submitted without content");
            self.mark_failed(&translation.id).await?;
            return Err(TranslationError::NoContent);
        }

        tracing::info!(
            document_type = %translation.document_type,
            target_language = %translation.target_language,
            chapters = translation.chapters.as_ref().map_or(0, Vec::len),
            "Translation accepted"
        );

        Ok(translation)
    }

    /// Drives the record to a terminal state. Any failure after the record
    /// is known to be `loading`, including a failed final write, is recorded
    /// as `failed`.
    #[instrument(skip(self, translation), fields(translation_id = %translation.id))]
    pub async fn translate(&self, translation: &Translation) -> Result<(), TranslationError> {
        match self.run(translation).await {
            Ok(units) => {
                tracing::info!(units, "Translation completed");
                Ok(())
            }
            Err(e @ (TranslationError::NotFound(_) | TranslationError::AlreadyFinalized(_))) => {
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "Translation failed");
                if let Err(store_err) = self.mark_failed(&translation.id).await {
                    tracing::error!(error = %store_err, "Failed to record translation failure");
                }
                Err(e)
            }
        }
    }

    async fn run(&self, translation: &Translation) -> Result<usize, TranslationError> {
        let stored = self
            .repository
            .find_by_id(&translation.id)
            .await?
            .ok_or_else(|| TranslationError::NotFound(translation.id.clone()))?;

        if stored.status.is_terminal() {
            tracing::warn!(status = %stored.status, "Translation already finalized");
            return Err(TranslationError::AlreadyFinalized(translation.id.clone()));
        }

        let units = self.translate_units(translation).await?;
        self.finalize(&translation.id, &units).await?;
        Ok(units.len())
    }

    async fn finalize(
        &self,
        id: &TranslationId,
        units: &[TranslatedUnit],
    ) -> Result<(), TranslationError> {
        let name = units
            .first()
            .map(|unit| preview_title(&unit.text))
            .unwrap_or_default();
        let update = TranslationUpdate::completed(combine_units(units), name);

        if !self.repository.update(id, &update).await? {
            tracing::warn!("Translation finalized concurrently; result discarded");
            return Err(TranslationError::AlreadyFinalized(id.clone()));
        }
        Ok(())
    }

    /// Runs one chunk to completion and returns every raw response joined
    /// with newlines.
    pub async fn translate_chunk(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        sentinel: &TagParser,
    ) -> Result<String, TranslationError> {
        let state = ContinuationLoop::new(
            self.completion_client.as_ref(),
            sentinel,
            system_prompt,
            user_prompt,
            self.max_iterations,
        )
        .run()
        .await?;

        match state {
            ContinuationState::Complete(raw) => Ok(raw),
            ContinuationState::Exhausted(_) | ContinuationState::Continuing(_) => {
                Err(TranslationError::IterationLimit {
                    max_iterations: self.max_iterations,
                })
            }
        }
    }

    pub async fn list(&self, owner_id: &UserId) -> Result<Vec<Translation>, TranslationError> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Records owned by someone else are reported as missing.
    pub async fn get(
        &self,
        owner_id: &UserId,
        id: &TranslationId,
    ) -> Result<Option<Translation>, TranslationError> {
        let translation = self.repository.find_by_id(id).await?;
        Ok(translation.filter(|t| &t.owner_id == owner_id))
    }

    async fn translate_units(
        &self,
        translation: &Translation,
    ) -> Result<Vec<TranslatedUnit>, TranslationError> {
        let template = translation.document_type.template();
        let payload = TagParser::new(template.payload_tag)?;
        let sentinel = TagParser::new(template.sentinel_tag)?;
        let mut units = Vec::new();

        match translation.source() {
            Some(TranslationSource::Chapters(chapters)) => {
                for (index, chapter) in chapters.iter().enumerate() {
                    let position = index + 1;
                    if chapter.trim().is_empty() {
                        tracing::debug!(chapter = position, "Skipping blank chapter");
                        continue;
                    }

                    let user_prompt = chapter_prompt(
                        translation.document_type,
                        &translation.target_language,
                        index,
                        &units,
                        chapter,
                    );
                    let raw = self
                        .translate_chunk(template.system_prompt, &user_prompt, &sentinel)
                        .await?;
                    let text = extract_payload(&payload, &raw, position);
                    units.push(TranslatedUnit::chapter(position, text));
                }
            }
            Some(TranslationSource::Document(document)) => {
                let user_prompt = initial_prompt(
                    translation.document_type,
                    &translation.target_language,
                    document,
                );
                let raw = self
                    .translate_chunk(template.system_prompt, &user_prompt, &sentinel)
                    .await?;
                units.push(TranslatedUnit::document(extract_payload(&payload, &raw, 1)));
            }
            None => return Err(TranslationError::NoContent),
        }

        if units.is_empty() {
            return Err(TranslationError::NoContent);
        }

        Ok(units)
    }

    /// Moves a `loading` record to `failed`; a no-op on terminal records.
    pub async fn mark_failed(&self, id: &TranslationId) -> Result<(), TranslationError> {
        let applied = self
            .repository
            .update(id, &TranslationUpdate::failed())
            .await?;
        if !applied {
            tracing::warn!(translation_id = %id, "Failure not recorded; record already terminal");
        }
        Ok(())
    }
}

fn extract_payload(payload: &TagParser, raw: &str, position: usize) -> String {
    match payload.first(raw) {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(
                unit = position,
                tag = payload.tag(),
                "Payload tag missing from model output"
            );
            String::new()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("no content provided for translation")]
    NoContent,
    #[error("translation id already exists: {0}")]
    DuplicateId(TranslationId),
    #[error("translation not found: {0}")]
    NotFound(TranslationId),
    #[error("translation already finalized: {0}")]
    AlreadyFinalized(TranslationId),
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
    #[error("no completion sentinel after {max_iterations} calls")]
    IterationLimit { max_iterations: usize },
    #[error("tag pattern: {0}")]
    TagPattern(#[from] regex::Error),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
