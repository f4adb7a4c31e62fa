mod question_vm;
mod quiz_vm;
mod summary_vm;

pub use question_vm::{ChoiceVm, QuestionVm, map_question};
pub use quiz_vm::{QuizIntent, apply_intent};
pub use summary_vm::{SummaryVm, map_summary};
