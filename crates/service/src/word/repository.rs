use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use super::domain::{Entry, EntryFields};

/// Repository abstraction for dictionary persistence.
#[async_trait]
pub trait WordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Entry>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Entry>, ServiceError>;
    /// Fails with `Duplicate` when the headword already exists.
    async fn create(&self, fields: EntryFields) -> Result<Entry, ServiceError>;
    /// Wholesale replacement; fails with `NotFound` for an unknown id.
    async fn update(&self, id: i32, fields: EntryFields) -> Result<Entry, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmWordRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl WordRepository for SeaOrmWordRepository {
    async fn list(&self) -> Result<Vec<Entry>, ServiceError> {
        crate::db::word_service::list_words(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<Entry>, ServiceError> {
        crate::db::word_service::get_word(&self.db, id).await
    }

    async fn create(&self, fields: EntryFields) -> Result<Entry, ServiceError> {
        crate::db::word_service::create_word(&self.db, fields).await
    }

    async fn update(&self, id: i32, fields: EntryFields) -> Result<Entry, ServiceError> {
        crate::db::word_service::update_word(&self.db, id, fields).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        crate::db::word_service::delete_word(&self.db, id).await
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, Entry>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockWordRepository {
        table: Mutex<Table>,
    }

    impl MockWordRepository {
        fn table(&self) -> MutexGuard<'_, Table> {
            self.table.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    impl Table {
        fn headword_taken(&self, word: &str, except: Option<i32>) -> bool {
            self.rows.values().any(|e| e.fields.word == word && Some(e.id) != except)
        }
    }

    #[async_trait]
    impl WordRepository for MockWordRepository {
        async fn list(&self) -> Result<Vec<Entry>, ServiceError> {
            Ok(self.table().rows.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<Entry>, ServiceError> {
            Ok(self.table().rows.get(&id).cloned())
        }

        async fn create(&self, fields: EntryFields) -> Result<Entry, ServiceError> {
            let mut table = self.table();
            if table.headword_taken(&fields.word, None) {
                return Err(ServiceError::duplicate_word());
            }
            table.last_id += 1;
            let entry = Entry { id: table.last_id, fields };
            table.rows.insert(entry.id, entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: i32, fields: EntryFields) -> Result<Entry, ServiceError> {
            let mut table = self.table();
            if !table.rows.contains_key(&id) {
                return Err(ServiceError::not_found("Word"));
            }
            if table.headword_taken(&fields.word, Some(id)) {
                return Err(ServiceError::duplicate_word());
            }
            let entry = Entry { id, fields };
            table.rows.insert(id, entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            match self.table().rows.remove(&id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found("Word")),
            }
        }
    }
}
