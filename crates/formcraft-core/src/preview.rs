//! Preview projection of a form
//!
//! [`FormPreview::build`] turns the tree into what an end user would see: the
//! tab strip, then the groups of the active tab packed into rows, each group
//! listing one control per visible field.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, check_index};
use crate::ids::{FieldId, GroupId, TabId};
use crate::layout::pack_rows;
use crate::model::{ChoiceOptions, Field, FieldKind, Form, Group, GroupWidth};

/// Width used by inputs without a configured one
pub const DEFAULT_INPUT_WIDTH: &str = "100%";

/// One entry of the tab strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabHeader {
    pub id: TabId,
    pub title: String,
    pub active: bool,
}

/// HTML-style input type of a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputType {
    Text,
    Number,
    Email,
    Tel,
}

/// Widget used to render a field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlKind {
    Input {
        input_type: InputType,
        placeholder: Option<String>,
        max_length: Option<u32>,
        width: String,
    },
    DatePicker,
    Checkbox,
    Select {
        options: ChoiceOptions,
    },
    RadioGroup {
        options: ChoiceOptions,
    },
}

impl ControlKind {
    fn for_field(field: &Field) -> Self {
        let input = |input_type| ControlKind::Input {
            input_type,
            placeholder: field.placeholder.clone(),
            max_length: field.effective_max_length(),
            width: field
                .configuration
                .as_ref()
                .and_then(|c| c.field_width.clone())
                .unwrap_or_else(|| DEFAULT_INPUT_WIDTH.to_string()),
        };

        match &field.kind {
            FieldKind::Text => input(InputType::Text),
            FieldKind::Number => input(InputType::Number),
            FieldKind::Email => input(InputType::Email),
            FieldKind::Phone => input(InputType::Tel),
            FieldKind::Date => ControlKind::DatePicker,
            FieldKind::Boolean => ControlKind::Checkbox,
            FieldKind::Select { options } => ControlKind::Select {
                options: options.clone(),
            },
            FieldKind::Radio { options } => ControlKind::RadioGroup {
                options: options.clone(),
            },
        }
    }
}

/// A rendered field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub field_id: FieldId,
    pub label: String,
    pub required: bool,
    pub tooltip: Option<String>,
    pub kind: ControlKind,
}

impl From<&Field> for Control {
    fn from(field: &Field) -> Self {
        Self {
            field_id: field.id,
            label: field.label.clone(),
            required: field.required,
            tooltip: field.configuration.as_ref().and_then(|c| c.tooltip.clone()),
            kind: ControlKind::for_field(field),
        }
    }
}

/// A rendered group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewGroup {
    pub group_id: GroupId,
    pub title: String,
    pub width: GroupWidth,
    pub controls: Vec<Control>,
}

impl From<&Group> for PreviewGroup {
    fn from(group: &Group) -> Self {
        Self {
            group_id: group.id,
            title: group.title.clone(),
            width: group.width,
            controls: group.visible_fields().map(Control::from).collect(),
        }
    }
}

/// Groups rendered side by side
pub type PreviewRow = Vec<PreviewGroup>;

/// Renderable structure of one tab of a form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormPreview {
    pub name: String,
    pub description: String,
    pub tabs: Vec<TabHeader>,
    pub rows: Vec<PreviewRow>,
}

impl FormPreview {
    /// Build the preview of `form` showing the tab at `active_tab`.
    ///
    /// Only the first column of the tab is laid out.
    pub fn build(form: &Form, active_tab: usize) -> Result<Self> {
        check_index("tab", active_tab, form.tabs.len())?;

        let tabs = form
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| TabHeader {
                id: tab.id,
                title: tab.title.clone(),
                active: i == active_tab,
            })
            .collect();

        let rows = pack_rows(form.tabs[active_tab].primary_groups())
            .into_iter()
            .map(|row| row.into_iter().map(|g| PreviewGroup::from(&**g)).collect())
            .collect();

        Ok(Self {
            name: form.name.clone(),
            description: form.description.clone(),
            tabs,
            rows,
        })
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.rows
            .iter()
            .flatten()
            .flat_map(|group| group.controls.iter())
    }
}

/// Answer typed into a preview control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Bool(bool),
}

impl Response {
    fn is_answered(&self) -> bool {
        match self {
            Response::Text(text) => !text.trim().is_empty(),
            Response::Bool(checked) => *checked,
        }
    }
}

/// Preview answers keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    values: HashMap<FieldId, Response>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field_id: FieldId, response: Response) {
        self.values.insert(field_id, response);
    }

    pub fn get(&self, field_id: FieldId) -> Option<&Response> {
        self.values.get(&field_id)
    }

    pub fn clear(&mut self, field_id: FieldId) {
        self.values.remove(&field_id);
    }

    /// Required controls of `preview` that have no answer yet
    pub fn missing_required<'a>(&self, preview: &'a FormPreview) -> Vec<&'a Control> {
        preview
            .controls()
            .filter(|c| c.required)
            .filter(|c| !self.get(c.field_id).is_some_and(Response::is_answered))
            .collect()
    }
}
