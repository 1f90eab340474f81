//! Built-in survey templates

use formcraft_core::ChoiceOptions;
use serde::Serialize;
use strum::{Display, EnumIter};

use crate::model::QuestionType::{Rating, Text};
use crate::model::{Question, QuestionId, QuestionKind, QuestionType};

/// Grouping shown in the template picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum TemplateCategory {
    #[strum(to_string = "HR")]
    Hr,
    Training,
    Customer,
}

/// Question blueprint inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateQuestion {
    pub question_type: QuestionType,
    pub title: &'static str,
    pub required: bool,
    pub options: &'static [&'static str],
}

impl TemplateQuestion {
    const fn new(question_type: QuestionType, title: &'static str, required: bool) -> Self {
        Self {
            question_type,
            title,
            required,
            options: &[],
        }
    }

    const fn choice(title: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            question_type: QuestionType::MultipleChoice,
            title,
            required: true,
            options,
        }
    }

    const fn checkbox(title: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            question_type: QuestionType::Checkbox,
            title,
            required: true,
            options,
        }
    }

    /// Instantiate with a fresh identifier
    pub fn to_question(&self) -> Question {
        let kind = QuestionKind::default_for(self.question_type);
        let kind = match ChoiceOptions::new(self.options.iter().copied()) {
            Ok(options) => kind.with_options(options),
            Err(_) => kind,
        };
        Question {
            id: QuestionId::new(),
            title: self.title.to_string(),
            required: self.required,
            kind,
        }
    }
}

/// A predefined survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub blueprint: &'static [TemplateQuestion],
}

impl SurveyTemplate {
    /// Questions of the template, each with a fresh identifier
    pub fn questions(&self) -> Vec<Question> {
        self.blueprint.iter().map(TemplateQuestion::to_question).collect()
    }
}

static TEMPLATES: [SurveyTemplate; 6] = [
    SurveyTemplate {
        id: "employee-satisfaction",
        name: "Employee Satisfaction Survey",
        description: "Measure overall employee satisfaction and engagement",
        category: TemplateCategory::Hr,
        blueprint: &[
            TemplateQuestion::new(Rating, "How satisfied are you with your current role?", true),
            TemplateQuestion::new(Rating, "How would you rate your work-life balance?", true),
            TemplateQuestion::choice(
                "What motivates you most at work?",
                &[
                    "Career growth",
                    "Recognition",
                    "Compensation",
                    "Work environment",
                    "Team collaboration",
                ],
            ),
            TemplateQuestion::new(
                Text,
                "What improvements would you suggest for the workplace?",
                false,
            ),
        ],
    },
    SurveyTemplate {
        id: "performance-review",
        name: "Performance Review Survey",
        description: "Comprehensive performance evaluation template",
        category: TemplateCategory::Hr,
        blueprint: &[
            TemplateQuestion::new(Rating, "Rate your overall performance this quarter", true),
            TemplateQuestion::checkbox(
                "Which goals did you achieve this quarter?",
                &["Goal 1", "Goal 2", "Goal 3", "Goal 4"],
            ),
            TemplateQuestion::new(Text, "What were your main accomplishments?", true),
            TemplateQuestion::new(Text, "What areas would you like to improve?", true),
            TemplateQuestion::new(
                Rating,
                "How would you rate your collaboration with team members?",
                true,
            ),
        ],
    },
    SurveyTemplate {
        id: "onboarding-feedback",
        name: "New Employee Onboarding",
        description: "Gather feedback on the onboarding experience",
        category: TemplateCategory::Hr,
        blueprint: &[
            TemplateQuestion::new(
                Rating,
                "How would you rate your overall onboarding experience?",
                true,
            ),
            TemplateQuestion::choice(
                "Which part of onboarding was most helpful?",
                &[
                    "Orientation session",
                    "Training materials",
                    "Mentor assignment",
                    "Team introductions",
                    "System setup",
                ],
            ),
            TemplateQuestion::new(Text, "What information was missing during onboarding?", false),
            TemplateQuestion::new(Rating, "How prepared do you feel to start your role?", true),
        ],
    },
    SurveyTemplate {
        id: "exit-interview",
        name: "Exit Interview Survey",
        description: "Understand reasons for employee departure",
        category: TemplateCategory::Hr,
        blueprint: &[
            TemplateQuestion::choice(
                "What is your primary reason for leaving?",
                &[
                    "Better opportunity",
                    "Compensation",
                    "Work-life balance",
                    "Management issues",
                    "Career growth",
                    "Other",
                ],
            ),
            TemplateQuestion::new(
                Rating,
                "How likely are you to recommend this company as a place to work?",
                true,
            ),
            TemplateQuestion::new(Text, "What could the company have done to retain you?", false),
            TemplateQuestion::new(
                Rating,
                "How would you rate your relationship with your direct manager?",
                true,
            ),
        ],
    },
    SurveyTemplate {
        id: "training-feedback",
        name: "Training Program Feedback",
        description: "Evaluate training effectiveness and quality",
        category: TemplateCategory::Training,
        blueprint: &[
            TemplateQuestion::new(
                Rating,
                "How would you rate the overall quality of the training?",
                true,
            ),
            TemplateQuestion::new(Rating, "How relevant was the content to your job?", true),
            TemplateQuestion::choice(
                "What was the most valuable part of the training?",
                &[
                    "Content quality",
                    "Instructor expertise",
                    "Hands-on exercises",
                    "Group discussions",
                    "Materials provided",
                ],
            ),
            TemplateQuestion::new(
                Text,
                "What topics would you like to see covered in future training?",
                false,
            ),
        ],
    },
    SurveyTemplate {
        id: "customer-satisfaction",
        name: "Customer Satisfaction Survey",
        description: "Measure customer satisfaction and loyalty",
        category: TemplateCategory::Customer,
        blueprint: &[
            TemplateQuestion::new(Rating, "How satisfied are you with our service?", true),
            TemplateQuestion::new(Rating, "How likely are you to recommend us to others?", true),
            TemplateQuestion::choice(
                "What aspect of our service impressed you most?",
                &[
                    "Quality",
                    "Speed",
                    "Customer support",
                    "Value for money",
                    "User experience",
                ],
            ),
            TemplateQuestion::new(Text, "How can we improve our service?", false),
        ],
    },
];

/// The built-in template catalogue
pub fn templates() -> &'static [SurveyTemplate] {
    &TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static SurveyTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates of one category, in catalogue order
pub fn templates_in(category: TemplateCategory) -> impl Iterator<Item = &'static SurveyTemplate> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_catalogue() {
        let ids: HashSet<_> = templates().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 6);
        assert!(template_by_id("performance-review").is_some());
        assert!(template_by_id("unknown").is_none());
    }

    #[test]
    fn test_categories() {
        let counts: Vec<(String, usize)> = TemplateCategory::iter()
            .map(|c| (c.to_string(), templates_in(c).count()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("HR".to_string(), 4),
                ("Training".to_string(), 1),
                ("Customer".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_choice_questions_have_options() {
        for template in templates() {
            for question in template.questions() {
                assert_eq!(
                    question.options().is_some(),
                    question.question_type().is_choice(),
                    "{}: {}",
                    template.id,
                    question.title
                );
            }
        }
    }

    #[test]
    fn test_questions_get_fresh_ids() {
        let template = template_by_id("employee-satisfaction").unwrap();
        let first = template.questions();
        let second = template.questions();
        assert!(first.iter().zip(&second).all(|(a, b)| a.id != b.id));
    }
}
