//! Signed-in user record and role checks

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};

use crate::blob::BlobStore;
use crate::error::{StorageError, StorageResult};

/// Key holding the signed-in user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Coarse permission level
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
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    HrManager,
    Employee,
}

impl Role {
    /// Rank used for permission checks; higher ranks include lower ones
    pub fn ordinal(&self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::HrManager => 2,
            Role::Employee => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::HrManager => "HR manager",
            Role::Employee => "Employee",
        }
    }
}

/// Session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            email: email.into(),
        }
    }

    /// Whether this user ranks at least as high as `required`
    pub fn has_permission(&self, required: Role) -> bool {
        self.role.ordinal() >= required.ordinal()
    }
}

/// Access to the `currentUser` record
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn BlobStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> StorageResult<Option<User>> {
        match self.store.get(CURRENT_USER_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn sign_in(&self, user: &User) -> StorageResult<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(CURRENT_USER_KEY, &json)?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        Ok(())
    }

    /// The signed-in user, if their role ranks at least as high as `required`
    pub fn authorize(&self, required: Role) -> StorageResult<User> {
        let user = self.current()?.ok_or(StorageError::NotSignedIn)?;
        if !user.has_permission(required) {
            tracing::debug!(user_id = %user.id, role = %user.role, %required, "permission denied");
            return Err(StorageError::PermissionDenied {
                name: user.name,
                required,
                actual: user.role,
            });
        }
        Ok(user)
    }

    pub fn sign_out(&self) -> StorageResult<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        tracing::info!("signed out");
        Ok(())
    }
}
