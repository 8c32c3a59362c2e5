use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{InterviewRepository, RepositoryError, TranslationRepository};
use crate::domain::{
    Interview, InterviewId, InterviewMessage, InterviewStatus, Translation, TranslationId,
    TranslationUpdate, UserId,
};

/// Process-local translation store for scaffold mode and tests. Enforces the
/// same terminal-status rule as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryTranslationRepository {
    records: RwLock<HashMap<TranslationId, Translation>>,
}

impl InMemoryTranslationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranslationRepository for InMemoryTranslationRepository {
    async fn insert(&self, translation: &Translation) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&translation.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate translation id {}",
                translation.id
            )));
        }
        records.insert(translation.id.clone(), translation.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &TranslationId,
        update: &TranslationUpdate,
    ) -> Result<bool, RepositoryError> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(record) if record.status.can_transition_to(update.status) => {
                record.apply(update);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_id(&self, id: &TranslationId) -> Result<Option<Translation>, RepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Translation>, RepositoryError> {
        let mut owned: Vec<Translation> = self
            .records
            .read()
            .await
            .values()
            .filter(|t| &t.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[derive(Default)]
pub struct InMemoryInterviewRepository {
    interviews: RwLock<HashMap<InterviewId, Interview>>,
    messages: RwLock<Vec<InterviewMessage>>,
}

impl InMemoryInterviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn create_interview(&self, interview: &Interview) -> Result<(), RepositoryError> {
        self.interviews
            .write()
            .await
            .insert(interview.id, interview.clone());
        Ok(())
    }

    async fn get_interview(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        Ok(self.interviews.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Interview>, RepositoryError> {
        let mut owned: Vec<Interview> = self
            .interviews
            .read()
            .await
            .values()
            .filter(|i| &i.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
    ) -> Result<(), RepositoryError> {
        match self.interviews.write().await.get_mut(&id) {
            Some(interview) => {
                interview.status = status;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    async fn append_message(&self, message: &InterviewMessage) -> Result<(), RepositoryError> {
        if !self
            .interviews
            .read()
            .await
            .contains_key(&message.interview_id)
        {
            return Err(RepositoryError::NotFound(message.interview_id.to_string()));
        }
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn get_messages(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<InterviewMessage>, RepositoryError> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| m.interview_id == interview_id)
            .cloned()
            .collect())
    }
}
