//! Export format for forms
//!
//! A [`FormDocument`] is the canonical external projection of a form tree:
//! every node and every field record, wrapped with the export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Form;

/// Current export format version
pub const FORMAT_VERSION: u32 = 1;

/// Export document for one form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    /// Format version for future compatibility
    pub format_version: u32,
    /// When the export was created
    pub exported_at: DateTime<Utc>,
    pub form: Form,
}

impl FormDocument {
    pub fn new(form: Form) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            exported_at: Utc::now(),
            form,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document, rejecting choice fields without options
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_form(self) -> Form {
        self.form
    }
}

impl Form {
    /// Project the tree into its export document.
    ///
    /// Nodes are shared with `self`, so this is cheap regardless of form size.
    pub fn serialize(&self) -> FormDocument {
        FormDocument::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormError;
    use crate::model::{FieldType, GroupPatch, GroupWidth};
    use pretty_assertions::assert_eq;

    fn sample_form() -> Form {
        let form = Form::new("Onboarding")
            .describe("New hire details")
            .add_group(0, 0)
            .unwrap();
        let group_id = form.tabs[0].columns[0].groups[0].id;
        form.add_field(FieldType::Text, group_id)
            .add_field(FieldType::Radio, group_id)
            .update_group(group_id, GroupPatch::new().width(GroupWidth::Half))
    }

    #[test]
    fn test_document_round_trip() {
        let form = sample_form();
        let json = form.serialize().to_json_pretty().unwrap();

        let document = FormDocument::from_json(&json).unwrap();

        assert_eq!(document.format_version, FORMAT_VERSION);
        assert_eq!(document.into_form(), form);
    }

    #[test]
    fn test_document_keys_are_camel_case() {
        let value = serde_json::to_value(sample_form().serialize()).unwrap();

        assert_eq!(value["formatVersion"], 1);
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["form"]["name"], "Onboarding");
        assert!(value["form"]["createdAt"].is_string());

        let group = &value["form"]["tabs"][0]["columns"][0]["groups"][0];
        assert_eq!(group["width"], "half");
        assert_eq!(group["fields"][0]["type"], "text");
        assert_eq!(group["fields"][0]["constraints"]["maxLength"], 255);
        assert_eq!(group["fields"][1]["type"], "radio");
        assert_eq!(group["fields"][1]["options"][1], "Option 2");
    }

    #[test]
    fn test_from_json_rejects_empty_options() {
        let mut value = serde_json::to_value(sample_form().serialize()).unwrap();
        value["form"]["tabs"][0]["columns"][0]["groups"][0]["fields"][1]["options"] =
            serde_json::json!([]);

        let result = FormDocument::from_json(&value.to_string());

        assert!(matches!(result, Err(FormError::Serialization(_))));
    }
}
