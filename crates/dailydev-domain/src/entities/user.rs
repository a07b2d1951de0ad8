//! User account entities

use crate::value_objects::EmailAddress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
///
/// The password hash never leaves the process: it is skipped on
/// serialization so a `User` can be logged or returned without leaking it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user id assigned by the store
    pub id: String,
    /// Canonical email
    pub email: EmailAddress,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Salted one-way password hash (PHC or bcrypt format)
    #[serde(skip)]
    pub password_hash: String,
    /// When the user registered
    pub created_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// Canonical email
    pub email: EmailAddress,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Salted one-way password hash
    pub password_hash: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new user record stamped with the current time
    pub fn new(
        email: EmailAddress,
        first_name: Option<String>,
        last_name: Option<String>,
        password_hash: String,
    ) -> Self {
        Self {
            email,
            first_name,
            last_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}
