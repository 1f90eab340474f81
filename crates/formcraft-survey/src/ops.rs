//! Operations over a survey
//!
//! Like the form tree operations, each one borrows a survey and returns the
//! edited copy. Unknown question ids leave the survey unchanged.

use chrono::Utc;
use formcraft_core::{ChoiceOptions, Status};

use crate::error::{Result, SurveyError};
use crate::model::{Question, QuestionId, QuestionKind, QuestionType, Survey, SurveyId};
use crate::templates::SurveyTemplate;

/// Partial update of a [`Question`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub required: Option<bool>,
    pub question_type: Option<QuestionType>,
    /// Ignored unless the (possibly converted) question is a choice question
    pub options: Option<ChoiceOptions>,
}

impl QuestionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    pub fn options(mut self, options: ChoiceOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn apply(self, question: &mut Question) {
        if let Some(title) = self.title {
            question.title = title;
        }
        if let Some(required) = self.required {
            question.required = required;
        }
        if let Some(question_type) = self.question_type {
            let kind = std::mem::replace(&mut question.kind, QuestionKind::Text);
            question.kind = kind.convert(question_type);
        }
        if let Some(options) = self.options {
            let kind = std::mem::replace(&mut question.kind, QuestionKind::Text);
            question.kind = kind.with_options(options);
        }
    }
}

impl Survey {
    /// Append a question with the builder defaults for `question_type`
    pub fn add_question(&self, question_type: QuestionType) -> Survey {
        let mut next = self.clone();
        next.questions.push(Question::new(question_type));
        tracing::trace!(survey_id = %self.id, %question_type, "added question");
        next
    }

    /// Merge a partial update into the question with that id
    pub fn update_question(&self, question_id: QuestionId, patch: QuestionPatch) -> Survey {
        let Some(index) = self.position_of(question_id) else {
            tracing::debug!(question_id = %question_id, "update_question: question not found, ignoring");
            return self.clone();
        };

        let mut next = self.clone();
        patch.apply(&mut next.questions[index]);
        next
    }

    pub fn delete_question(&self, question_id: QuestionId) -> Survey {
        let Some(index) = self.position_of(question_id) else {
            tracing::debug!(question_id = %question_id, "delete_question: question not found, ignoring");
            return self.clone();
        };

        let mut next = self.clone();
        next.questions.remove(index);
        next
    }

    /// Move the question at `from` to `to`, list-move semantics
    pub fn reorder_questions(&self, from: usize, to: usize) -> Result<Survey> {
        let len = self.questions.len();
        for index in [from, to] {
            if index >= len {
                return Err(SurveyError::IndexOutOfRange { index, len });
            }
        }

        let mut next = self.clone();
        let question = next.questions.remove(from);
        next.questions.insert(to, question);
        Ok(next)
    }

    pub fn rename(&self, title: impl Into<String>) -> Survey {
        Survey {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn describe(&self, description: impl Into<String>) -> Survey {
        Survey {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn publish(&self) -> Survey {
        Survey {
            status: Status::Published,
            ..self.clone()
        }
    }

    pub fn close(&self) -> Survey {
        Survey {
            status: Status::Closed,
            ..self.clone()
        }
    }

    /// Copy as a new draft with no responses and fresh identifiers
    pub fn duplicate(&self) -> Survey {
        Survey {
            id: SurveyId::new(),
            title: format!("{} (Copy)", self.title),
            description: self.description.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| Question {
                    id: QuestionId::new(),
                    ..q.clone()
                })
                .collect(),
            created_at: Utc::now(),
            status: Status::Draft,
            response_count: 0,
        }
    }

    /// Replace title, description and questions with the template's
    pub fn apply_template(&self, template: &SurveyTemplate) -> Survey {
        tracing::debug!(survey_id = %self.id, template = template.id, "applying template");
        Survey {
            title: template.name.to_string(),
            description: template.description.to_string(),
            questions: template.questions(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::template_by_id;
    use pretty_assertions::assert_eq;

    fn titles(survey: &Survey) -> Vec<&str> {
        survey.questions.iter().map(|q| q.title.as_str()).collect()
    }

    fn abc() -> Survey {
        ["A", "B", "C"].iter().fold(Survey::default(), |survey, title| {
            survey.with_question(Question::new(QuestionType::Text).titled(*title))
        })
    }

    #[test]
    fn test_add_question() {
        let survey = Survey::default()
            .add_question(QuestionType::Rating)
            .add_question(QuestionType::Checkbox);

        assert_eq!(
            titles(&survey),
            vec!["New rating question", "New checkbox question"]
        );
        assert_eq!(survey.questions[1].options().map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_update_question() {
        let survey = abc();
        let id = survey.questions[1].id;
        let options = ChoiceOptions::new(["Yes", "No"]).unwrap();

        let survey = survey.update_question(
            id,
            QuestionPatch::new()
                .title("Would you return?")
                .required(true)
                .question_type(QuestionType::MultipleChoice)
                .options(options.clone()),
        );

        let question = survey.question(id).unwrap();
        assert_eq!(question.title, "Would you return?");
        assert!(question.required);
        assert_eq!(question.options(), Some(&options));
    }

    #[test]
    fn test_type_change_drops_options() {
        let survey = Survey::default().add_question(QuestionType::Checkbox);
        let id = survey.questions[0].id;

        let survey = survey.update_question(id, QuestionPatch::new().question_type(QuestionType::Number));

        assert_eq!(survey.questions[0].kind, QuestionKind::Number);
    }

    #[test]
    fn test_unknown_question_is_noop() {
        let survey = abc();
        let ghost = QuestionId::new();

        assert_eq!(survey.update_question(ghost, QuestionPatch::new().title("x")), survey);
        assert_eq!(survey.delete_question(ghost), survey);
    }

    #[test]
    fn test_delete_question() {
        let survey = abc();
        let id = survey.questions[0].id;
        assert_eq!(titles(&survey.delete_question(id)), vec!["B", "C"]);
        assert_eq!(titles(&survey), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_questions() {
        let survey = abc();
        let moved = survey.reorder_questions(0, 2).unwrap();
        assert_eq!(titles(&moved), vec!["B", "C", "A"]);
        assert_eq!(titles(&moved.reorder_questions(2, 0).unwrap()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let result = abc().reorder_questions(1, 3);
        assert!(matches!(
            result,
            Err(SurveyError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_duplicate() {
        let mut survey = abc().publish();
        survey.response_count = 42;

        let copy = survey.duplicate();

        assert_eq!(copy.title, "New survey (Copy)");
        assert_eq!(copy.status, Status::Draft);
        assert_eq!(copy.response_count, 0);
        assert_ne!(copy.id, survey.id);
        assert_eq!(titles(&copy), titles(&survey));
        assert!(
            copy.questions
                .iter()
                .zip(&survey.questions)
                .all(|(a, b)| a.id != b.id)
        );
    }

    #[test]
    fn test_apply_template() {
        let template = template_by_id("exit-interview").unwrap();
        let survey = abc().describe("old").apply_template(template);

        assert_eq!(survey.title, "Exit Interview Survey");
        assert_eq!(survey.description, "Understand reasons for employee departure");
        assert_eq!(survey.questions.len(), 4);
        assert_eq!(survey.questions[0].question_type(), QuestionType::MultipleChoice);
        assert_eq!(survey.questions[0].options().map(|o| o.len()), Some(6));
        assert_eq!(survey.status, Status::Draft);
    }
}
