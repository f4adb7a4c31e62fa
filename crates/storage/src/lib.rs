#![forbid(unsafe_code)]

pub mod quiz_store;
pub mod repository;
pub mod sqlite;

pub use quiz_store::{ANSWERS_KEY, INDEX_KEY, QuizStore};
pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};
