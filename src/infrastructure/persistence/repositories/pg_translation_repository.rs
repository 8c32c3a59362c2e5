use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, TranslationRepository};
use crate::domain::{Translation, TranslationId, TranslationStatus, TranslationUpdate, UserId};

const SELECT_COLUMNS: &str = "id, owner_id, input_document, chapters, document_type, \
target_language, status, translated_doc, name, created_at, updated_at";

pub struct PgTranslationRepository {
    pool: PgPool,
}

impl PgTranslationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TranslationRow {
    id: String,
    owner_id: String,
    input_document: Option<String>,
    chapters: Option<Vec<String>>,
    document_type: String,
    target_language: String,
    status: String,
    translated_doc: Option<String>,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TranslationRow> for Translation {
    type Error = RepositoryError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            id: row.id.clone(),
            reason,
        };
        let status = row.status.parse::<TranslationStatus>().map_err(corrupt)?;
        let document_type = row.document_type.parse().map_err(corrupt)?;

        Ok(Translation {
            id: TranslationId::new(row.id),
            owner_id: UserId::new(row.owner_id),
            input_document: row.input_document,
            chapters: row.chapters,
            document_type,
            target_language: row.target_language,
            status,
            translated_doc: row.translated_doc,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::ConstraintViolation(db.to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}

#[async_trait]
impl TranslationRepository for PgTranslationRepository {
    #[instrument(skip(self, translation), fields(translation_id = %translation.id))]
    async fn insert(&self, translation: &Translation) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO translations (id, owner_id, input_document, chapters, document_type,
                target_language, status, translated_doc, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(translation.id.as_str())
        .bind(translation.owner_id.as_str())
        .bind(translation.input_document.as_deref())
        .bind(translation.chapters.as_deref())
        .bind(translation.document_type.as_str())
        .bind(&translation.target_language)
        .bind(translation.status.as_str())
        .bind(translation.translated_doc.as_deref())
        .bind(&translation.name)
        .bind(translation.created_at)
        .bind(translation.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self, update), fields(translation_id = %id, status = %update.status))]
    async fn update(
        &self,
        id: &TranslationId,
        update: &TranslationUpdate,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE translations
            SET status = $1, translated_doc = $2, name = COALESCE($3, name), updated_at = $4
            WHERE id = $5 AND status = 'loading'
            "#,
        )
        .bind(update.status.as_str())
        .bind(update.translated_doc.as_deref())
        .bind(update.name.as_deref())
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(translation_id = %id))]
    async fn find_by_id(&self, id: &TranslationId) -> Result<Option<Translation>, RepositoryError> {
        let row = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM translations WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.map(Translation::try_from).transpose()
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Translation>, RepositoryError> {
        let rows = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM translations WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.into_iter().map(Translation::try_from).collect()
    }
}
