mod answers;
mod ids;
mod question;

pub use answers::AnswerMap;
pub use ids::{ChoiceId, QuestionId};
pub use question::{Choice, Question};
