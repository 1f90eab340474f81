//! Copy-on-write operations over the form tree
//!
//! Every operation borrows the current snapshot and returns a new one. The
//! new snapshot starts as a shallow clone of the root (a vector of `Arc`s) and
//! only the nodes on the path to the edited node are cloned, through
//! `Arc::make_mut`. Untouched subtrees stay shared with the previous snapshot,
//! which is never modified.
//!
//! Addressing a node by an id that is not in the tree is a silent no-op.
//! Out-of-range indices are caller bugs and return
//! [`FormError::IndexOutOfRange`](crate::FormError::IndexOutOfRange).

use chrono::Utc;
use std::sync::Arc;

use crate::error::{Result, check_index};
use crate::ids::{ColumnId, FieldId, FormId, GroupId, TabId};
use crate::model::{Column, Field, FieldPatch, FieldType, Form, Group, GroupPatch, Status, Tab};


/// Position of a group inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPath {
    pub tab: usize,
    pub column: usize,
    pub group: usize,
}

/// Position of a field inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub group: GroupPath,
    pub field: usize,
}

impl Form {
    /// Find where a group lives. Group ids are unique across the whole tree.
    pub fn locate_group(&self, group_id: GroupId) -> Option<GroupPath> {
        for (t, tab) in self.tabs.iter().enumerate() {
            for (c, column) in tab.columns.iter().enumerate() {
                if let Some(g) = column.groups.iter().position(|g| g.id == group_id) {
                    return Some(GroupPath {
                        tab: t,
                        column: c,
                        group: g,
                    });
                }
            }
        }
        None
    }

    /// Find where a field lives
    pub fn locate_field(&self, field_id: FieldId) -> Option<FieldPath> {
        for (t, tab) in self.tabs.iter().enumerate() {
            for (c, column) in tab.columns.iter().enumerate() {
                for (g, group) in column.groups.iter().enumerate() {
                    if let Some(f) = group.position_of(field_id) {
                        return Some(FieldPath {
                            group: GroupPath {
                                tab: t,
                                column: c,
                                group: g,
                            },
                            field: f,
                        });
                    }
                }
            }
        }
        None
    }

    fn group_at(&self, path: GroupPath) -> &Group {
        &self.tabs[path.tab].columns[path.column].groups[path.group]
    }

    fn column_mut(&mut self, tab: usize, column: usize) -> &mut Column {
        let tab = Arc::make_mut(&mut self.tabs[tab]);
        Arc::make_mut(&mut tab.columns[column])
    }

    fn group_mut(&mut self, path: GroupPath) -> &mut Group {
        let column = self.column_mut(path.tab, path.column);
        Arc::make_mut(&mut column.groups[path.group])
    }

    fn field_mut(&mut self, path: FieldPath) -> &mut Field {
        let group = self.group_mut(path.group);
        Arc::make_mut(&mut group.fields[path.field])
    }

    /// Append a tab titled `Tab N` holding one empty column
    pub fn add_tab(&self) -> Form {
        let mut next = self.clone();
        let title = format!("Tab {}", self.tabs.len() + 1);
        next.tabs.push(Arc::new(Tab::new(title)));
        tracing::trace!(form_id = %self.id, tab_count = next.tabs.len(), "added tab");
        next
    }

    /// Append an empty full-width group to the addressed column
    pub fn add_group(&self, tab_index: usize, column_index: usize) -> Result<Form> {
        check_index("tab", tab_index, self.tabs.len())?;
        check_index("column", column_index, self.tabs[tab_index].columns.len())?;

        let mut next = self.clone();
        next.column_mut(tab_index, column_index)
            .groups
            .push(Arc::new(Group::default()));
        tracing::trace!(form_id = %self.id, tab_index, column_index, "added group");
        Ok(next)
    }

    /// Append a new field with the builder defaults for `field_type`
    pub fn add_field(&self, field_type: FieldType, group_id: GroupId) -> Form {
        self.append_field(group_id, Field::new(field_type))
    }

    /// Append a prepared field to a group.
    ///
    /// A field whose id is already in the tree is ignored.
    pub fn append_field(&self, group_id: GroupId, field: Field) -> Form {
        let Some(path) = self.locate_group(group_id) else {
            tracing::debug!(group_id = %group_id, "append_field: group not found, ignoring");
            return self.clone();
        };
        if self.locate_field(field.id).is_some() {
            tracing::debug!(field_id = %field.id, "append_field: field id already in use, ignoring");
            return self.clone();
        }

        let mut next = self.clone();
        tracing::trace!(group_id = %group_id, field_id = %field.id, "appended field");
        next.group_mut(path).fields.push(Arc::new(field));
        next
    }

    /// Merge a partial update into the field with that id
    pub fn update_field(&self, field_id: FieldId, patch: FieldPatch) -> Form {
        let Some(path) = self.locate_field(field_id) else {
            tracing::debug!(field_id = %field_id, "update_field: field not found, ignoring");
            return self.clone();
        };

        let mut next = self.clone();
        patch.apply(next.field_mut(path));
        next
    }

    /// Remove the field with that id from whichever group holds it
    pub fn delete_field(&self, field_id: FieldId) -> Form {
        let Some(path) = self.locate_field(field_id) else {
            tracing::debug!(field_id = %field_id, "delete_field: field not found, ignoring");
            return self.clone();
        };

        let mut next = self.clone();
        next.group_mut(path.group).fields.remove(path.field);
        tracing::trace!(field_id = %field_id, "deleted field");
        next
    }

    /// Move the field at `from` to `to` within one group.
    ///
    /// The element is removed first, so `to` indexes into the shortened list.
    pub fn reorder_fields(&self, group_id: GroupId, from: usize, to: usize) -> Result<Form> {
        let Some(path) = self.locate_group(group_id) else {
            tracing::debug!(group_id = %group_id, "reorder_fields: group not found, ignoring");
            return Ok(self.clone());
        };

        let len = self.group_at(path).fields.len();
        check_index("field", from, len)?;
        check_index("field", to, len)?;

        let mut next = self.clone();
        if from != to {
            let fields = &mut next.group_mut(path).fields;
            let field = fields.remove(from);
            fields.insert(to, field);
        }
        Ok(next)
    }

    /// Move a field into another group at `to_index`.
    ///
    /// A field that is not inside `from_group_id`, or an unknown group, leaves
    /// the form unchanged. Moving within one group behaves like
    /// [`Form::reorder_fields`].
    pub fn move_field(
        &self,
        field_id: FieldId,
        from_group_id: GroupId,
        to_group_id: GroupId,
        to_index: usize,
    ) -> Result<Form> {
        let (Some(field_path), Some(from), Some(to)) = (
            self.locate_field(field_id),
            self.locate_group(from_group_id),
            self.locate_group(to_group_id),
        ) else {
            tracing::debug!(field_id = %field_id, "move_field: field or group not found, ignoring");
            return Ok(self.clone());
        };

        if field_path.group != from {
            tracing::debug!(
                field_id = %field_id,
                group_id = %from_group_id,
                "move_field: field is not in source group, ignoring"
            );
            return Ok(self.clone());
        }

        if from == to {
            return self.reorder_fields(from_group_id, field_path.field, to_index);
        }

        let positions = self.group_at(to).fields.len() + 1;
        check_index("insert position", to_index, positions)?;

        let mut next = self.clone();
        let field = next.group_mut(from).fields.remove(field_path.field);
        next.group_mut(to).fields.insert(to_index, field);
        tracing::trace!(field_id = %field_id, to_group = %to_group_id, to_index, "moved field");
        Ok(next)
    }

    /// Merge a partial update into the group with that id
    pub fn update_group(&self, group_id: GroupId, patch: GroupPatch) -> Form {
        let Some(path) = self.locate_group(group_id) else {
            tracing::debug!(group_id = %group_id, "update_group: group not found, ignoring");
            return self.clone();
        };

        let mut next = self.clone();
        patch.apply(next.group_mut(path));
        next
    }

    /// Replace the title of the tab at `tab_index`
    pub fn update_tab_title(&self, tab_index: usize, title: impl Into<String>) -> Result<Form> {
        check_index("tab", tab_index, self.tabs.len())?;

        let mut next = self.clone();
        Arc::make_mut(&mut next.tabs[tab_index]).title = title.into();
        Ok(next)
    }

    pub fn rename(&self, name: impl Into<String>) -> Form {
        Form {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn describe(&self, description: impl Into<String>) -> Form {
        Form {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: Status) -> Form {
        Form {
            status,
            ..self.clone()
        }
    }

    pub fn publish(&self) -> Form {
        self.with_status(Status::Published)
    }

    pub fn close(&self) -> Form {
        self.with_status(Status::Closed)
    }

    /// Copy this form as a new draft.
    ///
    /// Every node gets a fresh identifier so the copy can be stored next to
    /// the original.
    pub fn duplicate(&self) -> Form {
        Form {
            id: FormId::new(),
            name: format!("{} (Copy)", self.name),
            description: self.description.clone(),
            status: Status::Draft,
            created_at: Utc::now(),
            tabs: self.tabs.iter().map(|tab| Arc::new(fresh_tab(tab))).collect(),
        }
    }
}

fn fresh_tab(tab: &Tab) -> Tab {
    Tab {
        id: TabId::new(),
        title: tab.title.clone(),
        columns: tab
            .columns
            .iter()
            .map(|column| {
                Arc::new(Column {
                    id: ColumnId::new(),
                    groups: column.groups.iter().map(|g| Arc::new(fresh_group(g))).collect(),
                })
            })
            .collect(),
    }
}

fn fresh_group(group: &Group) -> Group {
    Group {
        id: GroupId::new(),
        title: group.title.clone(),
        width: group.width,
        fields: group
            .fields
            .iter()
            .map(|field| {
                Arc::new(Field {
                    id: FieldId::new(),
                    ..Field::clone(field)
                })
            })
            .collect(),
    }
}
