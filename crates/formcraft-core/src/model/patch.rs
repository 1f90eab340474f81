//! Partial updates for fields and groups
//!
//! Each nested record has its own patch type so merge depth is explicit: a
//! patch touching one constraint leaves the sibling constraints alone.

use super::{
    ChoiceOptions, Configuration, Constraints, DataSource, DataSourceKind, Field, FieldKind,
    FieldType, Group, GroupWidth,
};

/// Key-by-key update of [`Constraints`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintsPatch {
    pub primary_key: Option<bool>,
    pub foreign_key: Option<bool>,
    pub visible: Option<bool>,
    /// `Some(None)` clears the limit
    pub max_length: Option<Option<u32>>,
}

impl ConstraintsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = Some(value);
        self
    }

    pub fn foreign_key(mut self, value: bool) -> Self {
        self.foreign_key = Some(value);
        self
    }

    pub fn visible(mut self, value: bool) -> Self {
        self.visible = Some(value);
        self
    }

    pub fn max_length(mut self, value: u32) -> Self {
        self.max_length = Some(Some(value));
        self
    }

    pub fn apply(self, constraints: &mut Constraints) {
        if let Some(v) = self.primary_key {
            constraints.primary_key = v;
        }
        if let Some(v) = self.foreign_key {
            constraints.foreign_key = v;
        }
        if let Some(v) = self.visible {
            constraints.visible = v;
        }
        if let Some(v) = self.max_length {
            constraints.max_length = v;
        }
    }
}

macro_rules! configuration_patch {
    ($($key:ident),* $(,)?) => {
        /// Key-by-key update of [`Configuration`]. `Some(None)` clears a key.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct ConfigurationPatch {
            $(pub $key: Option<Option<String>>,)*
        }

        impl ConfigurationPatch {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $key(mut self, value: impl Into<String>) -> Self {
                    self.$key = Some(Some(value.into()));
                    self
                }
            )*

            pub fn apply(self, configuration: &mut Configuration) {
                $(
                    if let Some(v) = self.$key {
                        configuration.$key = v;
                    }
                )*
            }
        }
    };
}

configuration_patch!(
    table_source,
    column,
    input_mask,
    field_width,
    reference_table,
    code_label,
    display_order,
    tooltip,
    full_label,
    language,
);

/// Key-by-key update of [`DataSource`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSourcePatch {
    pub kind: Option<DataSourceKind>,
    pub value: Option<String>,
}

impl DataSourcePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: DataSourceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn apply(self, data_source: &mut DataSource) {
        if let Some(kind) = self.kind {
            data_source.kind = kind;
        }
        if let Some(value) = self.value {
            data_source.value = value;
        }
    }
}

/// Partial update of a [`Field`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: Option<bool>,
    /// `Some(None)` clears the placeholder
    pub placeholder: Option<Option<String>>,
    /// Ignored unless the (possibly converted) field is a choice field
    pub options: Option<ChoiceOptions>,
    pub constraints: Option<ConstraintsPatch>,
    pub configuration: Option<ConfigurationPatch>,
    pub data_source: Option<DataSourcePatch>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Some(placeholder.into()));
        self
    }

    pub fn clear_placeholder(mut self) -> Self {
        self.placeholder = Some(None);
        self
    }

    pub fn options(mut self, options: ChoiceOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn constraints(mut self, patch: ConstraintsPatch) -> Self {
        self.constraints = Some(patch);
        self
    }

    pub fn configuration(mut self, patch: ConfigurationPatch) -> Self {
        self.configuration = Some(patch);
        self
    }

    pub fn data_source(mut self, patch: DataSourcePatch) -> Self {
        self.data_source = Some(patch);
        self
    }

    /// Merge into `field`. The type change runs before the options update so
    /// a patch can switch to a choice type and supply its options at once.
    pub fn apply(self, field: &mut Field) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(field_type) = self.field_type {
            let kind = std::mem::replace(&mut field.kind, FieldKind::Text);
            field.kind = kind.convert(field_type);
        }
        if let Some(options) = self.options {
            let kind = std::mem::replace(&mut field.kind, FieldKind::Text);
            field.kind = kind.with_options(options);
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(placeholder) = self.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(patch) = self.constraints {
            patch.apply(&mut field.constraints);
        }
        if let Some(patch) = self.configuration {
            let mut configuration = field.configuration.take().unwrap_or_default();
            patch.apply(&mut configuration);
            field.configuration = (!configuration.is_empty()).then_some(configuration);
        }
        if let Some(patch) = self.data_source {
            let mut data_source = field.data_source.take().unwrap_or_default();
            patch.apply(&mut data_source);
            field.data_source = Some(data_source);
        }
    }
}

/// Partial update of a [`Group`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPatch {
    pub title: Option<String>,
    pub width: Option<GroupWidth>,
}

impl GroupPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(mut self, width: GroupWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn apply(self, group: &mut Group) {
        if let Some(title) = self.title {
            group.title = title;
        }
        if let Some(width) = self.width {
            group.width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constraint_patch_keeps_siblings() {
        let mut field = Field::new(FieldType::Text);
        field.constraints.primary_key = true;

        FieldPatch::new()
            .constraints(ConstraintsPatch::new().visible(false))
            .apply(&mut field);

        assert_eq!(
            field.constraints,
            Constraints {
                primary_key: true,
                foreign_key: false,
                visible: false,
                max_length: Some(255),
            }
        );
    }

    #[test]
    fn test_configuration_patch_merges_and_clears() {
        let mut field = Field::new(FieldType::Email);

        FieldPatch::new()
            .configuration(ConfigurationPatch::new().tooltip("Work address").language("fr"))
            .apply(&mut field);
        FieldPatch::new()
            .configuration(ConfigurationPatch::new().field_width("50%"))
            .apply(&mut field);

        let configuration = field.configuration.clone().unwrap();
        assert_eq!(configuration.tooltip.as_deref(), Some("Work address"));
        assert_eq!(configuration.language.as_deref(), Some("fr"));
        assert_eq!(configuration.field_width.as_deref(), Some("50%"));

        let clear_all = ConfigurationPatch {
            tooltip: Some(None),
            language: Some(None),
            field_width: Some(None),
            ..ConfigurationPatch::default()
        };
        FieldPatch::new().configuration(clear_all).apply(&mut field);
        assert_eq!(field.configuration, None);
    }

    #[test]
    fn test_data_source_patch_creates_record() {
        let mut field = Field::new(FieldType::Select);
        FieldPatch::new()
            .data_source(DataSourcePatch::new().kind(DataSourceKind::Query))
            .apply(&mut field);
        FieldPatch::new()
            .data_source(DataSourcePatch::new().value("SELECT name FROM departments"))
            .apply(&mut field);

        assert_eq!(
            field.data_source,
            Some(DataSource {
                kind: DataSourceKind::Query,
                value: "SELECT name FROM departments".to_string(),
            })
        );
    }

    #[test]
    fn test_type_change_then_options() {
        let mut field = Field::new(FieldType::Text);
        let options = ChoiceOptions::new(["Paris", "Lyon"]).unwrap();
        FieldPatch::new()
            .field_type(FieldType::Radio)
            .options(options.clone())
            .apply(&mut field);

        assert_eq!(field.field_type(), FieldType::Radio);
        assert_eq!(field.options(), Some(&options));
    }

    #[test]
    fn test_placeholder_set_and_clear() {
        let mut field = Field::new(FieldType::Phone);
        FieldPatch::new().placeholder("+33").apply(&mut field);
        assert_eq!(field.placeholder.as_deref(), Some("+33"));
        FieldPatch::new().clear_placeholder().apply(&mut field);
        assert_eq!(field.placeholder, None);
    }

    #[test]
    fn test_group_patch() {
        let mut group = Group::new("Identity");
        GroupPatch::new().width(GroupWidth::Half).apply(&mut group);
        assert_eq!(group.title, "Identity");
        assert_eq!(group.width, GroupWidth::Half);
    }
}
