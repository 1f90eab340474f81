//! Validation types and logic

use std::collections::HashSet;
use uuid::Uuid;

use super::Form;

/// Validation error for a form document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Location of the problem, e.g. `tabs[0].columns[0].groups[1]`
    pub path: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl Form {
    /// Check a form, typically one read back from storage, for structural problems
    ///
    /// Option lists are non-empty by construction and are not re-checked here.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Form name is required"));
        }

        if self.tabs.is_empty() {
            errors.push(ValidationError::new("tabs", "At least one tab is required"));
        }

        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut check = |path: String, id: Uuid, errors: &mut Vec<ValidationError>| {
            if !seen.insert(id) {
                errors.push(ValidationError::new(path, format!("Duplicate identifier: {}", id)));
            }
        };

        check("id".to_string(), self.id.as_uuid(), &mut errors);
        for (t, tab) in self.tabs.iter().enumerate() {
            check(format!("tabs[{}]", t), tab.id.as_uuid(), &mut errors);
            for (c, column) in tab.columns.iter().enumerate() {
                let column_path = format!("tabs[{}].columns[{}]", t, c);
                check(column_path.clone(), column.id.as_uuid(), &mut errors);
                for (g, group) in column.groups.iter().enumerate() {
                    let group_path = format!("{}.groups[{}]", column_path, g);
                    check(group_path.clone(), group.id.as_uuid(), &mut errors);
                    for (f, field) in group.fields.iter().enumerate() {
                        check(
                            format!("{}.fields[{}]", group_path, f),
                            field.id.as_uuid(),
                            &mut errors,
                        );
                    }
                }
            }
        }

        errors
    }
}
