#![forbid(unsafe_code)]

pub mod model;
pub mod navigation;
pub mod profile;

pub use model::{AnswerMap, Choice, ChoiceId, Question, QuestionId};
pub use navigation::{clamp_index, restore_index};
pub use profile::{NO_PROFILE_MESSAGE, ProfileLetter, ProfileResult, Tally, compute_profile};
