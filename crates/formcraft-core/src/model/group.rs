//! Group model

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::Display;

use super::Field;
use crate::ids::{FieldId, GroupId};

/// Title given to groups created from the builder
pub const DEFAULT_GROUP_TITLE: &str = "New group";

/// Declared display width of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GroupWidth {
    #[default]
    Full,
    Half,
}

impl GroupWidth {
    /// Share of a row this width occupies, in percent
    pub fn percent(&self) -> u32 {
        match self {
            GroupWidth::Full => 100,
            GroupWidth::Half => 50,
        }
    }
}

/// A titled cluster of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    #[serde(default)]
    pub width: GroupWidth,
    #[serde(default)]
    pub fields: Vec<Arc<Field>>,
}

impl Group {
    /// Create an empty full-width group
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            title: title.into(),
            width: GroupWidth::Full,
            fields: Vec::new(),
        }
    }

    /// Builder: set width
    pub fn with_width(mut self, width: GroupWidth) -> Self {
        self.width = width;
        self
    }

    /// Builder: append a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(Arc::new(field));
        self
    }

    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id).collect()
    }

    pub fn position_of(&self, field_id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    /// Fields that the preview renders
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| f.is_visible())
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_TITLE)
    }
}
