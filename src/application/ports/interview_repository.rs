use async_trait::async_trait;

use crate::domain::{Interview, InterviewId, InterviewMessage, InterviewStatus, UserId};

use super::RepositoryError;

#[async_trait]
pub trait InterviewRepository: Send + Sync {
    async fn create_interview(&self, interview: &Interview) -> Result<(), RepositoryError>;

    async fn get_interview(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError>;

    /// Newest first.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Interview>, RepositoryError>;

    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
    ) -> Result<(), RepositoryError>;

    async fn append_message(&self, message: &InterviewMessage) -> Result<(), RepositoryError>;

    /// Oldest first.
    async fn get_messages(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<InterviewMessage>, RepositoryError>;
}
