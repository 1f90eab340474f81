//! Formcraft Core - Form tree model and row layout engine
//!
//! This crate holds the document model of the form builder and the pure
//! operations over it:
//!
//! - `Form` - Root of the tree: tabs own columns, columns own groups, groups
//!   own fields
//! - Copy-on-write operations (`Form::add_field`, `Form::reorder_fields`, ...)
//!   that return a new snapshot and share every untouched subtree
//! - `pack_rows` - Greedy packing of full and half width groups into rows
//! - `FormPreview` - Renderable projection of one tab
//! - `FormDocument` - Export format
//!
//! # Example
//!
//! ```rust,ignore
//! use formcraft_core::{FieldType, Form};
//!
//! let form = Form::new("Onboarding").add_group(0, 0)?;
//! let group_id = form.tabs[0].columns[0].groups[0].id;
//!
//! let form = form
//!     .add_field(FieldType::Text, group_id)
//!     .add_field(FieldType::Select, group_id);
//! let form = form.reorder_fields(group_id, 0, 1)?;
//!
//! println!("{}", form.serialize().to_json_pretty()?);
//! ```

mod document;
mod error;
mod ids;
pub mod layout;
mod model;
mod ops;
pub mod preview;

pub use document::{FORMAT_VERSION, FormDocument};
pub use error::{FormError, Result};
pub use ids::{ColumnId, FieldId, FormId, GroupId, TabId};
pub use layout::{ROW_CAPACITY, RowItem, pack_rows};
pub use model::*;
pub use ops::{FieldPath, GroupPath};
pub use preview::{Control, ControlKind, FormPreview, Response, Responses};
