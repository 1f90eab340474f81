//! Search and status filtering for record lists

use formcraft_core::{Form, Status};
use formcraft_survey::Survey;

/// Records that can appear in a filtered list
pub trait Listable {
    /// Name or title
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn status(&self) -> Status;
}

impl Listable for Form {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl Listable for Survey {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> Status {
        self.status
    }
}

/// Case-insensitive text search plus an optional status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = (!text.trim().is_empty()).then_some(text);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        let status_ok = self.status.is_none_or(|s| s == item.status());
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            item.title().to_lowercase().contains(&needle)
                || item.description().to_lowercase().contains(&needle)
        });
        status_ok && search_ok
    }

    pub fn apply<'a, T: Listable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
