use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use super::domain::{Entry, EntryFields};
use super::repository::WordRepository;

/// Application service encapsulating dictionary business rules.
/// Validates the headword before touching storage; duplicate detection is
/// enforced by the repository.
pub struct WordService<R: WordRepository> {
    repo: Arc<R>,
}

impl<R: WordRepository> WordService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Entry>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Entry, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Word"))
    }

    /// Create a new entry.
    ///
    /// # Examples
    /// ```
    /// use service::word::{domain::EntryFields, repository::mock::MockWordRepository, service::WordService};
    /// use std::sync::Arc;
    /// let svc = WordService::new(Arc::new(MockWordRepository::default()));
    /// let entry = tokio_test::block_on(svc.create(EntryFields::new("kurd"))).unwrap();
    /// assert_eq!(entry.id, 1);
    /// assert!(tokio_test::block_on(svc.create(EntryFields::new("kurd"))).is_err());
    /// ```
    #[instrument(skip(self, fields), fields(word = %fields.word))]
    pub async fn create(&self, fields: EntryFields) -> Result<Entry, ServiceError> {
        fields.validate()?;
        let created = self.repo.create(fields).await?;
        info!(id = created.id, word = %created.fields.word, "word_created");
        Ok(created)
    }

    #[instrument(skip(self, fields), fields(word = %fields.word))]
    pub async fn update(&self, id: i32, fields: EntryFields) -> Result<Entry, ServiceError> {
        fields.validate()?;
        let updated = self.repo.update(id, fields).await?;
        info!(id = updated.id, word = %updated.fields.word, "word_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "word_deleted");
        Ok(())
    }
}
