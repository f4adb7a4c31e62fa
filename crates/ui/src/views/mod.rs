mod notices;
mod question;
mod quiz;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use notices::{EmptyNotice, ErrorNotice, LoadingNotice};
pub use question::QuestionCard;
pub use quiz::QuizView;
pub use summary::SummaryCard;
