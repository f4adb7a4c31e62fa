use quiz_core::model::ChoiceId;
use services::{EngineError, QuizEngine, Screen};

/// User interactions on the quiz screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select { index: usize, choice: ChoiceId },
    /// "Prochain" / "Terminer" on the question at `index`.
    Next { index: usize },
    Restart,
}

/// Run `intent` against the engine and return the screen to show next.
///
/// # Errors
///
/// Returns the engine error unchanged; the caller decides how to surface it.
pub async fn apply_intent(engine: &QuizEngine, intent: QuizIntent) -> Result<Screen, EngineError> {
    match intent {
        QuizIntent::Select { index, choice } => engine.select_choice(index, choice).await,
        QuizIntent::Next { index } => engine.advance(index).await,
        QuizIntent::Restart => engine.reset().await,
    }
}
