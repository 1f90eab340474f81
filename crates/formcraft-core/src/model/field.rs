//! Field model
//!
//! A field is a single typed input definition. Its type is a tagged union so
//! the option list only exists on the choice variants and can never be empty.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{FormError, Result};
use crate::ids::FieldId;

/// Maximum length assumed for text fields without an explicit limit
pub const DEFAULT_TEXT_MAX_LENGTH: u32 = 255;

/// Options seeded into a freshly created choice field
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Payload-free field type, as offered by the builder palette
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
    Email,
    Phone,
    Select,
    Radio,
}

impl FieldType {
    /// Get display name for the palette
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Boolean => "Boolean",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone",
            FieldType::Select => "Select",
            FieldType::Radio => "Radio",
        }
    }

    /// Short description shown under the palette entry
    pub fn description(&self) -> &'static str {
        match self {
            FieldType::Text => "Text input",
            FieldType::Number => "Numeric input",
            FieldType::Date => "Date picker",
            FieldType::Boolean => "Checkbox",
            FieldType::Email => "Email address",
            FieldType::Phone => "Phone number",
            FieldType::Select => "Dropdown list",
            FieldType::Radio => "Radio buttons",
        }
    }

    /// Whether fields of this type carry an option list
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }

    /// All field types in palette order
    pub fn palette() -> impl Iterator<Item = FieldType> {
        FieldType::iter()
    }
}

/// Non-empty, ordered list of choice labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ChoiceOptions(Vec<String>);

impl ChoiceOptions {
    /// Build an option list, rejecting an empty one
    pub fn new<I, S>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(FormError::EmptyOptions);
        }
        Ok(Self(options))
    }

    /// The two placeholder options a new choice field starts with
    pub fn defaults() -> Self {
        Self(DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an option
    pub fn push(&mut self, option: impl Into<String>) {
        self.0.push(option.into());
    }

    /// Remove the option at `index`. The last remaining option cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        crate::error::check_index("option", index, self.0.len())?;
        if self.0.len() == 1 {
            return Err(FormError::EmptyOptions);
        }
        Ok(self.0.remove(index))
    }
}

impl TryFrom<Vec<String>> for ChoiceOptions {
    type Error = FormError;

    fn try_from(options: Vec<String>) -> Result<Self> {
        Self::new(options)
    }
}

impl From<ChoiceOptions> for Vec<String> {
    fn from(options: ChoiceOptions) -> Self {
        options.0
    }
}

/// Field type together with its type-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Boolean,
    Email,
    Phone,
    Select { options: ChoiceOptions },
    Radio { options: ChoiceOptions },
}

impl FieldKind {
    /// Kind with default payload for a palette type
    pub fn default_for(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => FieldKind::Text,
            FieldType::Number => FieldKind::Number,
            FieldType::Date => FieldKind::Date,
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Email => FieldKind::Email,
            FieldType::Phone => FieldKind::Phone,
            FieldType::Select => FieldKind::Select {
                options: ChoiceOptions::defaults(),
            },
            FieldType::Radio => FieldKind::Radio {
                options: ChoiceOptions::defaults(),
            },
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text => FieldType::Text,
            FieldKind::Number => FieldType::Number,
            FieldKind::Date => FieldType::Date,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Email => FieldType::Email,
            FieldKind::Phone => FieldType::Phone,
            FieldKind::Select { .. } => FieldType::Select,
            FieldKind::Radio { .. } => FieldType::Radio,
        }
    }

    pub fn options(&self) -> Option<&ChoiceOptions> {
        match self {
            FieldKind::Select { options } | FieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }

    /// Switch to another type.
    ///
    /// Select and radio hand their options to each other; entering a choice
    /// type from a plain one seeds the default options, leaving one drops them.
    pub fn convert(self, target: FieldType) -> Self {
        if self.field_type() == target {
            return self;
        }
        match (self, target) {
            (FieldKind::Select { options } | FieldKind::Radio { options }, FieldType::Select) => {
                FieldKind::Select { options }
            }
            (FieldKind::Select { options } | FieldKind::Radio { options }, FieldType::Radio) => {
                FieldKind::Radio { options }
            }
            (_, target) => FieldKind::default_for(target),
        }
    }

    /// Replace the option list. Plain kinds are returned unchanged.
    pub fn with_options(self, options: ChoiceOptions) -> Self {
        match self {
            FieldKind::Select { .. } => FieldKind::Select { options },
            FieldKind::Radio { .. } => FieldKind::Radio { options },
            other => {
                tracing::debug!(
                    field_type = %other.field_type(),
                    "ignoring options for non-choice field"
                );
                other
            }
        }
    }
}

/// Per-field storage and display constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    pub primary_key: bool,
    pub foreign_key: bool,
    pub visible: bool,
    /// Only interpreted for text fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            primary_key: false,
            foreign_key: false,
            visible: true,
            max_length: None,
        }
    }
}

/// Free-form display and data-binding metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mask: Option<String>,
    /// CSS-like width, e.g. `100%` or `200px`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_table: Option<String>,
    /// `code, label` column pair of the reference table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_label: Option<String>,
    /// Ordering expression, e.g. `name ASC`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Configuration {
    /// Check if no configuration key is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Where a field's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataSourceKind {
    #[default]
    Constant,
    Function,
    Query,
    Api,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub kind: DataSourceKind,
    pub value: String,
}

/// A single typed input definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
}

impl Field {
    /// Create a field with the per-type defaults used by the builder
    pub fn new(field_type: FieldType) -> Self {
        let max_length = (field_type == FieldType::Text).then_some(DEFAULT_TEXT_MAX_LENGTH);
        Self {
            id: FieldId::new(),
            label: format!("New {} field", field_type.label().to_lowercase()),
            kind: FieldKind::default_for(field_type),
            required: false,
            placeholder: None,
            constraints: Constraints {
                max_length,
                ..Constraints::default()
            },
            configuration: None,
            data_source: None,
        }
    }

    /// Builder: set label
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder: hide from the preview
    pub fn hidden(mut self) -> Self {
        self.constraints.visible = false;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn options(&self) -> Option<&ChoiceOptions> {
        self.kind.options()
    }

    pub fn is_visible(&self) -> bool {
        self.constraints.visible
    }

    /// Length limit as interpreted for this field's type
    pub fn effective_max_length(&self) -> Option<u32> {
        match self.kind {
            FieldKind::Text => Some(
                self.constraints
                    .max_length
                    .unwrap_or(DEFAULT_TEXT_MAX_LENGTH),
            ),
            _ => None,
        }
    }
}
