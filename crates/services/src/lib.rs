#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_repository;
pub mod quiz_engine;

pub use app_services::AppServices;
pub use error::{AppServicesError, EngineError, LoadError};
pub use question_repository::{
    FileQuestionRepository, HttpQuestionRepository, LoadOutcome, QuestionRepository,
    QuestionSource, StaticQuestionRepository, decode_document,
};
pub use quiz_engine::{QuizEngine, Screen};
