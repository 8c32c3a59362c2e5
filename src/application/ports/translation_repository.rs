use async_trait::async_trait;

use crate::domain::{Translation, TranslationId, TranslationUpdate, UserId};

use super::RepositoryError;

#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Fails with `ConstraintViolation` when the id is already taken.
    async fn insert(&self, translation: &Translation) -> Result<(), RepositoryError>;

    /// Applies the update only while the stored record is still `loading`.
    /// Returns whether a record was changed.
    async fn update(
        &self,
        id: &TranslationId,
        update: &TranslationUpdate,
    ) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: &TranslationId) -> Result<Option<Translation>, RepositoryError>;

    /// Newest first.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Translation>, RepositoryError>;
}
