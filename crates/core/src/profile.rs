use std::fmt;

use crate::model::AnswerMap;

/// Shown in place of a letter when no answer carries a profile letter.
pub const NO_PROFILE_MESSAGE: &str = "N'êtes-vous pas supposé répondre aux questions..?";

/// Profile letter carried by the last character of a choice id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileLetter {
    A,
    B,
    C,
    D,
}

impl ProfileLetter {
    /// Recognizes lowercase `a`–`d` only.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_upper(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for ProfileLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_upper())
    }
}

/// Letter frequencies in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(ProfileLetter, u32)>,
}

impl Tally {
    /// Count the profile letters of every recorded answer.
    ///
    /// Skipped answers and ids without a recognized trailing letter are ignored.
    #[must_use]
    pub fn from_answers(answers: &AnswerMap) -> Self {
        let mut tally = Self::default();
        for choice in answers.choices() {
            if choice.is_skipped() {
                continue;
            }
            if let Some(letter) = choice.trailing_char().and_then(ProfileLetter::from_char) {
                tally.record(letter);
            }
        }
        tally
    }

    pub fn record(&mut self, letter: ProfileLetter) {
        match self.counts.iter_mut().find(|(seen, _)| *seen == letter) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((letter, 1)),
        }
    }

    #[must_use]
    pub fn count(&self, letter: ProfileLetter) -> u32 {
        self.counts
            .iter()
            .find(|(seen, _)| *seen == letter)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Letter with the strictly highest count; the earliest letter wins ties.
    #[must_use]
    pub fn winner(&self) -> Option<ProfileLetter> {
        let mut entries = self.counts.iter();
        let first = *entries.next()?;
        let (letter, _) = entries.fold(first, |best, &current| {
            if current.1 > best.1 { current } else { best }
        });
        Some(letter)
    }
}

/// Outcome of the final tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileResult {
    Letter(ProfileLetter),
    Unanswered,
}

impl ProfileResult {
    /// Text displayed as the profile.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Letter(letter) => letter.to_string(),
            Self::Unanswered => NO_PROFILE_MESSAGE.to_string(),
        }
    }
}

/// Pick the dominant profile letter of a set of answers.
#[must_use]
pub fn compute_profile(answers: &AnswerMap) -> ProfileResult {
    Tally::from_answers(answers)
        .winner()
        .map_or(ProfileResult::Unanswered, ProfileResult::Letter)
}
