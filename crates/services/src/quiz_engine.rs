use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use quiz_core::model::{AnswerMap, ChoiceId, Question, QuestionId};
use quiz_core::navigation::{clamp_index, restore_index};
use quiz_core::profile::{ProfileResult, compute_profile};
use storage::QuizStore;

use crate::error::EngineError;
use crate::question_repository::{LoadOutcome, QuestionRepository};

/// What the view should display.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Loading,
    /// Loading failed; terminal for the session.
    Error { detail: String },
    /// The question set is empty; terminal for the session.
    Empty,
    Question {
        index: usize,
        total: usize,
        question: Question,
        answers: AnswerMap,
    },
    Summary { profile: ProfileResult },
}

#[derive(Default)]
struct EngineState {
    questions: Arc<[Question]>,
    current_index: usize,
}

/// Owns the loaded questions and drives the persisted quiz state.
///
/// Every operation returns the full `Screen` to render next.
pub struct QuizEngine {
    store: QuizStore,
    repository: Box<dyn QuestionRepository>,
    state: Mutex<EngineState>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(store: QuizStore, repository: Box<dyn QuestionRepository>) -> Self {
        Self {
            store,
            repository,
            state: Mutex::new(EngineState::default()),
        }
    }

    /// Restore the saved position and load the question set.
    ///
    /// Failures are logged and turned into `Screen::Error`.
    pub async fn initialize(&self) -> Screen {
        match self.try_initialize().await {
            Ok(screen) => screen,
            Err(detail) => {
                tracing::error!(%detail, "failed to initialize quiz");
                Screen::Error { detail }
            }
        }
    }

    async fn try_initialize(&self) -> Result<Screen, String> {
        let stored = self.store.index().await.map_err(|err| err.to_string())?;
        self.set_current(restore_index(stored, None))
            .map_err(|err| err.to_string())?;

        tracing::info!("loading questions");
        let outcome = self.repository.load().await.map_err(|err| err.to_string())?;
        let LoadOutcome::Loaded(questions) = outcome else {
            tracing::info!("question set is empty");
            return Ok(Screen::Empty);
        };

        let total = questions.len();
        let index = restore_index(stored, Some(total));
        {
            let mut state = self.lock().map_err(|err| err.to_string())?;
            state.questions = questions.into();
            state.current_index = index;
        }
        tracing::info!(total, index, "questions loaded");

        self.question_screen(index).await.map_err(|err| err.to_string())
    }

    /// Record `choice` for the question at `index` and show that question again.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownQuestion` if no question sits at `index`,
    /// or a storage error if the answer cannot be saved.
    pub async fn select_choice(&self, index: usize, choice: ChoiceId) -> Result<Screen, EngineError> {
        let question_id = self.question_at(index)?.id().clone();
        tracing::debug!(question = %question_id, %choice, "answer selected");
        self.store.set_answer(question_id, choice).await?;
        self.question_screen(index).await
    }

    /// Navigate to `requested`, clamped into the question range.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NotReady` before questions are loaded, or a
    /// storage error if the position cannot be saved.
    pub async fn go_to_question(&self, requested: i64) -> Result<Screen, EngineError> {
        let total = self.total()?;
        if total == 0 {
            return Err(EngineError::NotReady);
        }
        let index = clamp_index(requested, total);
        self.store.set_index(index).await?;
        self.set_current(index)?;
        tracing::debug!(index, "navigated");
        self.question_screen(index).await
    }

    /// Move past the question at `current`; the last question leads to the summary.
    ///
    /// # Errors
    ///
    /// Same as [`QuizEngine::go_to_question`].
    pub async fn advance(&self, current: usize) -> Result<Screen, EngineError> {
        let total = self.total()?;
        if total == 0 {
            return Err(EngineError::NotReady);
        }
        if current == total - 1 {
            let profile = self.compute_summary().await?;
            return Ok(Screen::Summary { profile });
        }
        let next = i64::try_from(current).map_or(i64::MAX, |value| value.saturating_add(1));
        self.go_to_question(next).await
    }

    /// Forget every answer and return to the first question.
    ///
    /// # Errors
    ///
    /// Same as [`QuizEngine::go_to_question`].
    pub async fn reset(&self) -> Result<Screen, EngineError> {
        if self.total()? == 0 {
            return Err(EngineError::NotReady);
        }
        self.store.clear_answers().await?;
        tracing::info!("answers cleared");
        self.go_to_question(0).await
    }

    /// Tally the stored answers of the loaded questions.
    ///
    /// Answers left over from a different question set are ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the answers cannot be read.
    pub async fn compute_summary(&self) -> Result<ProfileResult, EngineError> {
        let answers = self.store.answers().await?;
        let questions = self.questions()?;
        let known: HashSet<&QuestionId> = questions.iter().map(Question::id).collect();
        Ok(compute_profile(&answers.restricted_to(&known)))
    }

    /// Position of the question currently shown.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::State` if the state lock is poisoned.
    pub fn current_index(&self) -> Result<usize, EngineError> {
        Ok(self.lock()?.current_index)
    }

    /// # Errors
    ///
    /// Returns `EngineError::State` if the state lock is poisoned.
    pub fn questions(&self) -> Result<Arc<[Question]>, EngineError> {
        Ok(Arc::clone(&self.lock()?.questions))
    }

    async fn question_screen(&self, index: usize) -> Result<Screen, EngineError> {
        let (question, total) = {
            let state = self.lock()?;
            let question = state
                .questions
                .get(index)
                .cloned()
                .ok_or(EngineError::UnknownQuestion(index))?;
            (question, state.questions.len())
        };
        let answers = self.store.answers().await?;
        Ok(Screen::Question {
            index,
            total,
            question,
            answers,
        })
    }

    fn question_at(&self, index: usize) -> Result<Question, EngineError> {
        let state = self.lock()?;
        if state.questions.is_empty() {
            return Err(EngineError::NotReady);
        }
        state
            .questions
            .get(index)
            .cloned()
            .ok_or(EngineError::UnknownQuestion(index))
    }

    fn total(&self) -> Result<usize, EngineError> {
        Ok(self.lock()?.questions.len())
    }

    fn set_current(&self, index: usize) -> Result<(), EngineError> {
        self.lock()?.current_index = index;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, EngineState>, EngineError> {
        self.state
            .lock()
            .map_err(|err| EngineError::State(err.to_string()))
    }
}
