//! Form, tab and column models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{Field, Group, Status};
use crate::ids::{ColumnId, FieldId, FormId, GroupId, TabId};

/// Name given to forms created without one
pub const DEFAULT_FORM_NAME: &str = "New form";

/// Title of the tab every new form starts with
pub const DEFAULT_TAB_TITLE: &str = "Main tab";

/// Sub-partition of a tab holding groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default)]
    pub groups: Vec<Arc<Group>>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: ColumnId::new(),
            groups: Vec::new(),
        }
    }

    /// Builder: append a group
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(Arc::new(group));
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level partition of a form, rendered as a tab strip entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Tab {
    /// Create a tab with a single empty column
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
            columns: vec![Arc::new(Column::new())],
        }
    }

    /// Groups of the first column, which is what the preview lays out
    pub fn primary_groups(&self) -> &[Arc<Group>] {
        self.columns
            .first()
            .map(|c| c.groups.as_slice())
            .unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.columns
            .iter()
            .flat_map(|c| c.groups.iter())
            .map(|g| g.as_ref())
    }
}

/// Root document being built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: FormId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub tabs: Vec<Arc<Tab>>,
}

impl Form {
    /// Create a draft form with one default tab holding one empty column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FormId::new(),
            name: name.into(),
            description: String::new(),
            status: Status::Draft,
            created_at: Utc::now(),
            tabs: vec![Arc::new(Tab::new(DEFAULT_TAB_TITLE))],
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: append a tab
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(Arc::new(tab));
        self
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index).map(|t| t.as_ref())
    }

    /// Every group of the form, in tab/column order
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.tabs.iter().flat_map(|t| t.groups())
    }

    /// Every field of the form, in tab/column/group order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.groups()
            .flat_map(|g| g.fields.iter())
            .map(|f| f.as_ref())
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    pub fn find_group(&self, group_id: GroupId) -> Option<&Group> {
        self.groups().find(|g| g.id == group_id)
    }

    pub fn find_field(&self, field_id: FieldId) -> Option<&Field> {
        self.fields().find(|f| f.id == field_id)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_NAME)
    }
}
