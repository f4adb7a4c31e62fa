use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::ids::{ChoiceId, QuestionId};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// A selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "lenient_choice_id")]
    id: ChoiceId,
    #[serde(default, deserialize_with = "lenient_string")]
    text: String,
}

impl Choice {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: ChoiceId::new(id),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A multiple-choice question as loaded from the question document.
///
/// Records are decoded leniently: a missing field decodes to its empty value
/// and scalars standing in for strings are kept in textual form. A malformed
/// record therefore shows up as a blank question instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, deserialize_with = "lenient_question_id")]
    id: QuestionId,
    #[serde(default, rename = "question", deserialize_with = "lenient_string")]
    text: String,
    #[serde(default, deserialize_with = "lenient_choices")]
    choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            choices,
        }
    }

    /// Decode one element of the question array.
    ///
    /// Never fails; anything that is not an object becomes an empty question.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id() == id)
    }
}

//
// ─── LENIENT FIELD DECODING ────────────────────────────────────────────────────
//

pub(crate) fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

fn lenient_question_id<'de, D>(deserializer: D) -> Result<QuestionId, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(QuestionId::new)
}

fn lenient_choice_id<'de, D>(deserializer: D) -> Result<ChoiceId, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(ChoiceId::new)
}

fn lenient_choices<'de, D>(deserializer: D) -> Result<Vec<Choice>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
