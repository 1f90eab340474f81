//! Record collections stored as whole JSON arrays

use formcraft_core::{Form, FormId};
use formcraft_survey::{Survey, SurveyId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::blob::BlobStore;
use crate::error::StorageResult;

/// Key holding the JSON array of forms
pub const FORMS_KEY: &str = "forms";

/// Key holding the JSON array of surveys
pub const SURVEYS_KEY: &str = "surveys";

/// A document kept in a [`Collection`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Display;

    /// Store key of the array holding these records
    const KEY: &'static str;

    fn id(&self) -> Self::Id;

    /// Copy under a fresh identifier
    fn duplicate(&self) -> Self;
}

impl Record for Form {
    type Id = FormId;
    const KEY: &'static str = FORMS_KEY;

    fn id(&self) -> FormId {
        self.id
    }

    fn duplicate(&self) -> Self {
        Form::duplicate(self)
    }
}

impl Record for Survey {
    type Id = SurveyId;
    const KEY: &'static str = SURVEYS_KEY;

    fn id(&self) -> SurveyId {
        self.id
    }

    fn duplicate(&self) -> Self {
        Survey::duplicate(self)
    }
}

/// All records of one kind, read and written as a single array
pub struct Collection<R: Record> {
    store: Arc<dyn BlobStore>,
    _record: PhantomData<fn() -> R>,
}

/// Stored forms
pub type FormRepository = Collection<Form>;

/// Stored surveys
pub type SurveyRepository = Collection<Survey>;

impl<R: Record> Collection<R> {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every record, in stored order. A missing key reads as empty.
    pub fn list(&self) -> StorageResult<Vec<R>> {
        let records: Vec<R> = match self.store.get(R::KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        tracing::debug!(key = R::KEY, count = records.len(), "read collection");
        Ok(records)
    }

    pub fn get(&self, id: R::Id) -> StorageResult<Option<R>> {
        Ok(self.list()?.into_iter().find(|r| r.id() == id))
    }

    /// Replace the whole array
    pub fn save_all(&self, records: &[R]) -> StorageResult<()> {
        let json = serde_json::to_string(records)?;
        self.store.set(R::KEY, &json)?;
        tracing::debug!(key = R::KEY, count = records.len(), "wrote collection");
        Ok(())
    }

    /// Insert or replace a record. A replaced record moves to the end.
    pub fn save(&self, record: &R) -> StorageResult<()> {
        let id = record.id();
        let mut records = self.list()?;
        records.retain(|r| r.id() != id);
        records.push(record.clone());
        self.save_all(&records)
    }

    /// Remove a record, returning whether it existed
    pub fn delete(&self, id: R::Id) -> StorageResult<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            tracing::debug!(key = R::KEY, %id, "delete: record not found");
            return Ok(false);
        }
        self.save_all(&records)?;
        Ok(true)
    }

    /// Store a copy of a record and return it
    pub fn duplicate(&self, id: R::Id) -> StorageResult<Option<R>> {
        let Some(original) = self.get(id)? else {
            return Ok(None);
        };
        let copy = original.duplicate();
        self.save(&copy)?;
        Ok(Some(copy))
    }
}

impl<R: Record> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self::new(self.store.clone())
    }
}
