use quiz_core::model::{AnswerMap, ChoiceId, Question};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub id: ChoiceId,
    pub text: String,
    /// The stored answer for this question.
    pub active: bool,
}

/// UI-ready representation of one question screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub progress: String,
    pub text: String,
    pub choices: Vec<ChoiceVm>,
    pub next_label: &'static str,
}

const NEXT_LABEL: &str = "Prochain";
const FINISH_LABEL: &str = "Terminer";

#[must_use]
pub fn map_question(question: &Question, index: usize, total: usize, answers: &AnswerMap) -> QuestionVm {
    let ordinal = index + 1;
    let selected = answers.get(question.id());
    let choices = question
        .choices()
        .iter()
        .map(|choice| ChoiceVm {
            id: choice.id().clone(),
            text: choice.text().to_owned(),
            active: selected == Some(choice.id()),
        })
        .collect();

    QuestionVm {
        index,
        heading: format!("Question {ordinal}"),
        progress: format!("{ordinal} / {total}"),
        text: question.text().to_owned(),
        choices,
        next_label: if ordinal == total {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        },
    }
}
