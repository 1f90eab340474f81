//! Formcraft Survey - Flat questionnaires for the HR builder
//!
//! A survey is a single ordered list of questions, simpler than the form
//! tree in `formcraft-core`. This crate provides:
//!
//! - `Survey` and `Question` with typed `QuestionKind` payloads
//! - Copy-returning survey operations (`Survey::add_question`, ...)
//! - The built-in template catalogue (`templates()`)
//! - Summary counters over stored surveys (`SurveyStats`)

mod error;
mod model;
mod ops;
mod stats;
pub mod templates;

pub use error::{Result, SurveyError};
pub use model::{
    DEFAULT_SURVEY_TITLE, Question, QuestionId, QuestionKind, QuestionType, Survey, SurveyId,
};
pub use ops::QuestionPatch;
pub use stats::SurveyStats;
pub use templates::{SurveyTemplate, TemplateCategory, template_by_id, templates};
