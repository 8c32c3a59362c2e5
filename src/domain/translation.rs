use chrono::{DateTime, Utc};

use super::{DocumentType, TranslationId, TranslationStatus, UserId};

pub const PLACEHOLDER_NAME: &str = "Translating new Document";

/// A submitted translation job and, once finished, its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub id: TranslationId,
    pub owner_id: UserId,
    pub input_document: Option<String>,
    pub chapters: Option<Vec<String>>,
    pub document_type: DocumentType,
    pub target_language: String,
    pub status: TranslationStatus,
    pub translated_doc: Option<String>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission payload before it becomes a stored record.
#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub id: TranslationId,
    pub input_document: Option<String>,
    pub chapters: Option<Vec<String>>,
    pub document_type: DocumentType,
    pub target_language: String,
}

/// What drives the translation of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource<'a> {
    Document(&'a str),
    Chapters(&'a [String]),
}

impl Translation {
    pub fn new(owner_id: UserId, request: NewTranslation) -> Self {
        let now = Utc::now();
        Self {
            id: request.id,
            owner_id,
            input_document: request.input_document,
            chapters: request.chapters,
            document_type: request.document_type,
            target_language: request.target_language,
            status: TranslationStatus::Loading,
            translated_doc: None,
            name: PLACEHOLDER_NAME.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Non-empty chapters win over the single input document.
    pub fn source(&self) -> Option<TranslationSource<'_>> {
        match (&self.chapters, &self.input_document) {
            (Some(chapters), _) if !chapters.is_empty() => {
                Some(TranslationSource::Chapters(chapters))
            }
            // A whitespace-only document counts as no content.
            (_, Some(document)) if !document.trim().is_empty() => {
                Some(TranslationSource::Document(document))
            }
            _ => None,
        }
    }

    pub fn apply(&mut self, update: &TranslationUpdate) {
        self.status = update.status;
        self.translated_doc = update.translated_doc.clone();
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update that moves a record to a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUpdate {
    pub status: TranslationStatus,
    pub translated_doc: Option<String>,
    pub name: Option<String>,
}

impl TranslationUpdate {
    pub fn completed(translated_doc: String, name: String) -> Self {
        Self {
            status: TranslationStatus::Completed,
            translated_doc: Some(translated_doc),
            name: Some(name),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: TranslationStatus::Failed,
            translated_doc: None,
            name: None,
        }
    }
}
