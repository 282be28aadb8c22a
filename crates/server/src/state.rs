use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::word::{repository::SeaOrmWordRepository, service::WordService};

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub words: Arc<WordService<SeaOrmWordRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmWordRepository { db };
        Self { words: Arc::new(WordService::new(Arc::new(repo))) }
    }
}
