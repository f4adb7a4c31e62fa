use std::sync::Arc;

use storage::QuizStore;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::question_repository::{QuestionRepository, QuestionSource};
use crate::quiz_engine::QuizEngine;

/// Assembles the quiz engine over a storage backend and a question source.
#[derive(Clone)]
pub struct AppServices {
    engine: Arc<QuizEngine>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: QuestionSource,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(&storage, source.into_repository()))
    }

    /// Build services over volatile in-memory storage.
    #[must_use]
    pub fn in_memory(repository: Box<dyn QuestionRepository>) -> Self {
        Self::from_parts(&Storage::in_memory(), repository)
    }

    #[must_use]
    pub fn from_parts(storage: &Storage, repository: Box<dyn QuestionRepository>) -> Self {
        let store = QuizStore::new(Arc::clone(&storage.kv));
        Self {
            engine: Arc::new(QuizEngine::new(store, repository)),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Arc<QuizEngine> {
        Arc::clone(&self.engine)
    }
}
