use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{InterviewRepository, RepositoryError};
use crate::domain::{
    Interview, InterviewId, InterviewMessage, InterviewStatus, MessageRole, UserId,
};

pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InterviewRow {
    id: Uuid,
    owner_id: String,
    title: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = RepositoryError;

    fn try_from(row: InterviewRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<InterviewStatus>()
            .map_err(|reason| RepositoryError::CorruptRecord {
                id: row.id.to_string(),
                reason,
            })?;

        Ok(Interview {
            id: InterviewId::from_uuid(row.id),
            owner_id: UserId::new(row.owner_id),
            title: row.title,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    interview_id: Uuid,
    role: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for InterviewMessage {
    type Error = RepositoryError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<MessageRole>()
            .map_err(|reason| RepositoryError::CorruptRecord {
                id: row.id.to_string(),
                reason,
            })?;

        Ok(InterviewMessage {
            id: row.id,
            interview_id: InterviewId::from_uuid(row.interview_id),
            role,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl InterviewRepository for PgInterviewRepository {
    #[instrument(skip(self, interview), fields(interview_id = %interview.id))]
    async fn create_interview(&self, interview: &Interview) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO interviews (id, owner_id, title, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(interview.id.as_uuid())
        .bind(interview.owner_id.as_str())
        .bind(interview.title.as_deref())
        .bind(interview.status.as_str())
        .bind(interview.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(interview_id = %id))]
    async fn get_interview(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        let row = sqlx::query_as::<_, InterviewRow>(
            r#"
            SELECT id, owner_id, title, status, created_at
            FROM interviews
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(Interview::try_from).transpose()
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Interview>, RepositoryError> {
        let rows = sqlx::query_as::<_, InterviewRow>(
            r#"
            SELECT id, owner_id, title, status, created_at
            FROM interviews
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(Interview::try_from).collect()
    }

    #[instrument(skip(self), fields(interview_id = %id, status = %status))]
    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE interviews SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, message), fields(interview_id = %message.interview_id, role = %message.role))]
    async fn append_message(&self, message: &InterviewMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO interview_messages (id, interview_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id)
        .bind(message.interview_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(interview_id = %interview_id))]
    async fn get_messages(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<InterviewMessage>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, interview_id, role, content, created_at
            FROM interview_messages
            WHERE interview_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(interview_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(InterviewMessage::try_from).collect()
    }
}
