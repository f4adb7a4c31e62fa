use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::Client;
use serde_json::Value;

use crate::error::LoadError;

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Question>),
    /// The document is not an array, or the array is empty.
    Empty,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the question set once.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the document cannot be fetched or is not JSON.
    async fn load(&self) -> Result<LoadOutcome, LoadError>;
}

/// Decode the raw question document.
///
/// # Errors
///
/// Returns `LoadError::Decode` when the bytes are not JSON.
pub fn decode_document(bytes: &[u8]) -> Result<LoadOutcome, LoadError> {
    let document: Value = serde_json::from_slice(bytes)?;
    Ok(outcome_from_value(document))
}

fn outcome_from_value(document: Value) -> LoadOutcome {
    match document {
        Value::Array(items) if !items.is_empty() => {
            LoadOutcome::Loaded(items.into_iter().map(Question::from_value).collect())
        }
        _ => LoadOutcome::Empty,
    }
}

/// Where the question document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    Http(String),
    File(PathBuf),
}

impl QuestionSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_owned())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    #[must_use]
    pub fn into_repository(self) -> Box<dyn QuestionRepository> {
        match self {
            Self::Http(url) => Box::new(HttpQuestionRepository::new(url)),
            Self::File(path) => Box::new(FileQuestionRepository::new(path)),
        }
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the document with a plain GET request. No timeout is applied.
#[derive(Clone)]
pub struct HttpQuestionRepository {
    client: Client,
    url: String,
}

impl HttpQuestionRepository {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionRepository for HttpQuestionRepository {
    async fn load(&self) -> Result<LoadOutcome, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        decode_document(&body)
    }
}

/// Reads the document from a local file.
#[derive(Clone, Debug)]
pub struct FileQuestionRepository {
    path: PathBuf,
}

impl FileQuestionRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionRepository for FileQuestionRepository {
    async fn load(&self) -> Result<LoadOutcome, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        decode_document(&bytes)
    }
}

/// Serves an in-memory document, for tests and demos.
#[derive(Clone, Debug)]
pub struct StaticQuestionRepository {
    document: Value,
}

impl StaticQuestionRepository {
    #[must_use]
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

#[async_trait]
impl QuestionRepository for StaticQuestionRepository {
    async fn load(&self) -> Result<LoadOutcome, LoadError> {
        Ok(outcome_from_value(self.document.clone()))
    }
}
