//! Models for form design
//!
//! Core data structures for the form tree: forms own tabs, tabs own columns,
//! columns own groups and groups own fields. Children are held behind `Arc`
//! so snapshots share every subtree an edit did not touch.

mod field;
mod form;
mod group;
mod patch;
mod validation;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub use field::{
    ChoiceOptions, Configuration, Constraints, DEFAULT_OPTIONS, DEFAULT_TEXT_MAX_LENGTH,
    DataSource, DataSourceKind, Field, FieldKind, FieldType,
};
pub use form::{Column, DEFAULT_FORM_NAME, DEFAULT_TAB_TITLE, Form, Tab};
pub use group::{DEFAULT_GROUP_TITLE, Group, GroupWidth};
pub use patch::{ConfigurationPatch, ConstraintsPatch, DataSourcePatch, FieldPatch, GroupPatch};
pub use validation::ValidationError;

/// Publication status shared by forms and surveys
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Draft,
    Published,
    Closed,
}

impl Status {
    /// Get the display name
    pub fn label(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Published => "Published",
            Status::Closed => "Closed",
        }
    }
}
