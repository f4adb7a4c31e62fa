//! Persisted quiz state: the answer map and the navigation index.
//!
//! Unreadable values are treated as absent. Only backend failures surface as
//! errors.

use std::sync::Arc;

use quiz_core::model::{AnswerMap, ChoiceId, QuestionId};

use crate::repository::{KeyValueStore, StorageError};

/// Key holding the answer map as a JSON object.
pub const ANSWERS_KEY: &str = "gf_answers";
/// Key holding the navigation index as a decimal integer.
pub const INDEX_KEY: &str = "gf_q_index";

#[derive(Clone)]
pub struct QuizStore {
    kv: Arc<dyn KeyValueStore>,
}

impl QuizStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the stored answers, or an empty map when absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn answers(&self) -> Result<AnswerMap, StorageError> {
        let raw = self.kv.get(ANSWERS_KEY).await?;
        Ok(raw
            .and_then(|raw| AnswerMap::from_json(&raw).ok())
            .unwrap_or_default())
    }

    /// Record `choice` for `question`, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be read, encoded or written.
    pub async fn set_answer(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<(), StorageError> {
        let mut answers = self.answers().await?;
        answers.insert(question, choice);
        let encoded = answers
            .to_json()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(ANSWERS_KEY, &encoded).await
    }

    /// Drop every stored answer. The navigation index is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear_answers(&self) -> Result<(), StorageError> {
        self.kv.remove(ANSWERS_KEY).await
    }

    /// Stored navigation index; `None` when missing or not an integer.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn index(&self) -> Result<Option<i64>, StorageError> {
        let raw = self.kv.get(INDEX_KEY).await?;
        Ok(raw.and_then(|raw| parse_index(&raw)))
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn set_index(&self, index: usize) -> Result<(), StorageError> {
        self.kv.set(INDEX_KEY, &index.to_string()).await
    }
}

// Leading integer prefix, the way a lenient integer parse reads "3abc" as 3.
fn parse_index(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |pos| pos + sign_len);
    if digits_end == sign_len {
        return None;
    }
    trimmed[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryKeyValueStore;

    fn store() -> (QuizStore, InMemoryKeyValueStore) {
        let kv = InMemoryKeyValueStore::new();
        (QuizStore::new(Arc::new(kv.clone())), kv)
    }

    #[tokio::test]
    async fn set_answer_overwrites_previous_choice() {
        let (store, _) = store();
        store
            .set_answer(QuestionId::new("q1"), ChoiceId::new("q1-a"))
            .await
            .unwrap();
        store
            .set_answer(QuestionId::new("q1"), ChoiceId::new("q1-c"))
            .await
            .unwrap();

        let answers = store.answers().await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get(&QuestionId::new("q1")),
            Some(&ChoiceId::new("q1-c"))
        );
    }

    #[tokio::test]
    async fn corrupt_answers_read_as_empty() {
        let (store, kv) = store();
        kv.set(ANSWERS_KEY, "{not json").await.unwrap();
        assert!(store.answers().await.unwrap().is_empty());

        store
            .set_answer(QuestionId::new("q2"), ChoiceId::new("b"))
            .await
            .unwrap();
        assert_eq!(store.answers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clear_answers_keeps_index() {
        let (store, _) = store();
        store
            .set_answer(QuestionId::new("q1"), ChoiceId::new("a"))
            .await
            .unwrap();
        store.set_index(3).await.unwrap();

        store.clear_answers().await.unwrap();

        assert!(store.answers().await.unwrap().is_empty());
        assert_eq!(store.index().await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn index_is_stored_as_decimal_text() {
        let (store, kv) = store();
        store.set_index(12).await.unwrap();
        assert_eq!(kv.get(INDEX_KEY).await.unwrap().as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn unparsable_index_reads_as_none() {
        let (store, kv) = store();
        assert_eq!(store.index().await.unwrap(), None);

        kv.set(INDEX_KEY, "abc").await.unwrap();
        assert_eq!(store.index().await.unwrap(), None);

        kv.set(INDEX_KEY, "-").await.unwrap();
        assert_eq!(store.index().await.unwrap(), None);
    }

    #[test]
    fn parse_index_reads_leading_integer() {
        assert_eq!(parse_index("4"), Some(4));
        assert_eq!(parse_index(" -2"), Some(-2));
        assert_eq!(parse_index("7px"), Some(7));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("x1"), None);
    }
}
