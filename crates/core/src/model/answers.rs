use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ids::{ChoiceId, QuestionId};
use crate::model::question::value_to_text;

/// Selected choice per question, in first-answered order.
///
/// Overwriting an answer keeps the question's original position, so iteration
/// order is the order in which questions were first answered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(IndexMap<QuestionId, ChoiceId>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the persisted JSON object.
    ///
    /// Non-string values are kept in their textual form (`null` becomes an
    /// empty id, which the tally skips).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the text is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: IndexMap<QuestionId, Value> = serde_json::from_str(raw)?;
        Ok(Self(
            entries
                .into_iter()
                .map(|(question, value)| (question, ChoiceId::new(value_to_text(value))))
                .collect(),
        ))
    }

    /// Encode as a JSON object preserving entry order.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Record an answer, returning the one it replaced.
    pub fn insert(&mut self, question: QuestionId, choice: ChoiceId) -> Option<ChoiceId> {
        self.0.insert(question, choice)
    }

    #[must_use]
    pub fn get(&self, question: &QuestionId) -> Option<&ChoiceId> {
        self.0.get(question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &ChoiceId)> {
        self.0.iter()
    }

    pub fn choices(&self) -> impl Iterator<Item = &ChoiceId> {
        self.0.values()
    }

    /// Copy of the map without entries for questions outside `known`.
    #[must_use]
    pub fn restricted_to(&self, known: &HashSet<&QuestionId>) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(question, _)| known.contains(question))
                .map(|(question, choice)| (question.clone(), choice.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(QuestionId, ChoiceId)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (QuestionId, ChoiceId)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
