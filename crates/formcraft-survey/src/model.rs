//! Survey and question models

use chrono::{DateTime, Utc};
use formcraft_core::{ChoiceOptions, Status};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

formcraft_core::node_id!(
    /// Identifier of a [`Survey`]
    SurveyId
);
formcraft_core::node_id!(
    /// Identifier of a [`Question`]
    QuestionId
);

/// Title given to surveys created without one
pub const DEFAULT_SURVEY_TITLE: &str = "New survey";

/// Question types offered by the survey builder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionType {
    Text,
    MultipleChoice,
    Rating,
    Checkbox,
    Date,
    Number,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Text => "Text",
            QuestionType::MultipleChoice => "Multiple choice",
            QuestionType::Rating => "Rating",
            QuestionType::Checkbox => "Checkbox",
            QuestionType::Date => "Date",
            QuestionType::Number => "Number",
        }
    }

    /// Whether questions of this type carry an option list
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Checkbox)
    }

    pub fn palette() -> impl Iterator<Item = QuestionType> {
        QuestionType::iter()
    }
}

/// Question type with its type-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    MultipleChoice { options: ChoiceOptions },
    /// One to five stars
    Rating,
    Checkbox { options: ChoiceOptions },
    Date,
    Number,
}

impl QuestionKind {
    pub fn default_for(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Text => QuestionKind::Text,
            QuestionType::MultipleChoice => QuestionKind::MultipleChoice {
                options: ChoiceOptions::defaults(),
            },
            QuestionType::Rating => QuestionKind::Rating,
            QuestionType::Checkbox => QuestionKind::Checkbox {
                options: ChoiceOptions::defaults(),
            },
            QuestionType::Date => QuestionKind::Date,
            QuestionType::Number => QuestionKind::Number,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::Text => QuestionType::Text,
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::Rating => QuestionType::Rating,
            QuestionKind::Checkbox { .. } => QuestionType::Checkbox,
            QuestionKind::Date => QuestionType::Date,
            QuestionKind::Number => QuestionType::Number,
        }
    }

    pub fn options(&self) -> Option<&ChoiceOptions> {
        match self {
            QuestionKind::MultipleChoice { options } | QuestionKind::Checkbox { options } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Switch type, carrying options between the two choice types
    pub fn convert(self, target: QuestionType) -> Self {
        if self.question_type() == target {
            return self;
        }
        match (self, target) {
            (
                QuestionKind::MultipleChoice { options } | QuestionKind::Checkbox { options },
                QuestionType::MultipleChoice,
            ) => QuestionKind::MultipleChoice { options },
            (
                QuestionKind::MultipleChoice { options } | QuestionKind::Checkbox { options },
                QuestionType::Checkbox,
            ) => QuestionKind::Checkbox { options },
            (_, target) => QuestionKind::default_for(target),
        }
    }

    /// Replace the option list. Non-choice kinds are returned unchanged.
    pub fn with_options(self, options: ChoiceOptions) -> Self {
        match self {
            QuestionKind::MultipleChoice { .. } => QuestionKind::MultipleChoice { options },
            QuestionKind::Checkbox { .. } => QuestionKind::Checkbox { options },
            other => {
                tracing::debug!(
                    question_type = %other.question_type(),
                    "ignoring options for non-choice question"
                );
                other
            }
        }
    }
}

/// A single survey question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Create a question with the builder defaults for `question_type`
    pub fn new(question_type: QuestionType) -> Self {
        Self {
            id: QuestionId::new(),
            title: format!("New {} question", question_type.label().to_lowercase()),
            required: false,
            kind: QuestionKind::default_for(question_type),
        }
    }

    /// Builder: set title
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    pub fn options(&self) -> Option<&ChoiceOptions> {
        self.kind.options()
    }
}

/// A flat questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: SurveyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub response_count: u32,
}

impl Survey {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SurveyId::new(),
            title: title.into(),
            description: String::new(),
            questions: Vec::new(),
            created_at: Utc::now(),
            status: Status::Draft,
            response_count: 0,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: append a question
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn question(&self, question_id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn position_of(&self, question_id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::new(DEFAULT_SURVEY_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_question_defaults() {
        let question = Question::new(QuestionType::MultipleChoice);
        assert_eq!(question.title, "New multiple choice question");
        assert!(!question.required);
        assert_eq!(question.options(), Some(&ChoiceOptions::defaults()));

        assert!(Question::new(QuestionType::Rating).options().is_none());
    }

    #[test]
    fn test_convert_between_choice_types_keeps_options() {
        let options = ChoiceOptions::new(["Mornings", "Evenings"]).unwrap();
        let kind = QuestionKind::Checkbox {
            options: options.clone(),
        };

        let kind = kind.convert(QuestionType::MultipleChoice);
        assert_eq!(kind.options(), Some(&options));

        let kind = kind.convert(QuestionType::Date);
        assert_eq!(kind, QuestionKind::Date);
    }

    #[test]
    fn test_question_json_shape() {
        let question = Question::new(QuestionType::Checkbox).titled("Perks").required();
        let value = serde_json::to_value(&question).unwrap();

        assert_eq!(value["type"], "checkbox");
        assert_eq!(value["title"], "Perks");
        assert_eq!(value["required"], true);
        assert_eq!(value["options"][0], "Option 1");

        let back: Question = serde_json::from_value(value).unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn test_survey_json_keys() {
        let survey = Survey::new("Pulse").with_question(Question::new(QuestionType::Rating));
        let value = serde_json::to_value(&survey).unwrap();

        assert_eq!(value["status"], "draft");
        assert_eq!(value["responseCount"], 0);
        assert!(value["createdAt"].is_string());
        assert_eq!(value["questions"][0]["type"], "rating");
    }

    #[test]
    fn test_question_type_parses_snake_case() {
        let parsed: QuestionType = "multiple_choice".parse().unwrap();
        assert_eq!(parsed, QuestionType::MultipleChoice);
        assert_eq!(QuestionType::palette().count(), 6);
    }
}
