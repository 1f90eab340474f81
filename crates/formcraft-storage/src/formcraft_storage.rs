//! Formcraft Storage - Key-value persistence for forms and surveys
//!
//! Everything is stored as whole JSON documents under a handful of keys,
//! mirroring a browser local-storage layout:
//!
//! - `forms` - JSON array of forms
//! - `surveys` - JSON array of surveys
//! - `currentUser` - The signed-in user record
//!
//! Every mutation reads the whole array, edits it and writes it back.
//!
//! # Example
//!
//! ```rust,ignore
//! use formcraft_storage::{FileStore, FormRepository};
//! use std::sync::Arc;
//!
//! let store = Arc::new(FileStore::open("/tmp/formcraft")?);
//! let forms = FormRepository::new(store);
//! forms.save(&formcraft_core::Form::new("Onboarding"))?;
//! ```

mod blob;
mod collection;
mod error;
mod filter;
mod session;

pub use blob::{BlobStore, FileStore, MemoryStore, validate_key};
pub use collection::{Collection, FORMS_KEY, FormRepository, Record, SURVEYS_KEY, SurveyRepository};
pub use error::{StorageError, StorageResult};
pub use filter::{ListFilter, Listable};
pub use session::{CURRENT_USER_KEY, Role, SessionStore, User};
