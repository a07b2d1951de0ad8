//! BSON document shapes

use chrono::{DateTime, Utc};
use dailydev_domain::entities::{DailyTodoList, NewUser, TodoItem, User};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::value_objects::{EmailAddress, TodoDate};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Document in the users collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Document id, assigned by the server on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Canonical email
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Password hash
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Registration time
    pub created_at: bson::DateTime,
}

impl From<&NewUser> for UserDocument {
    fn from(user: &NewUser) -> Self {
        Self {
            id: None,
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: bson::DateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = Error;

    fn try_from(doc: UserDocument) -> Result<Self> {
        let id = doc
            .id
            .ok_or_else(|| Error::database("User document without _id"))?;

        Ok(User {
            id: id.to_hex(),
            email: EmailAddress::parse(&doc.email)?,
            first_name: doc.first_name,
            last_name: doc.last_name,
            password_hash: doc.password_hash,
            created_at: from_bson_datetime(doc.created_at),
        })
    }
}

/// Document in the dailyTodos collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTodoDocument {
    /// Document id
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Owning user id (hex string of the user's `_id`)
    pub user_id: String,
    /// Calendar date key
    pub date: String,
    /// Embedded items (`id`, `todo`, `description`, `isChecked`)
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

impl TryFrom<DailyTodoDocument> for DailyTodoList {
    type Error = Error;

    fn try_from(doc: DailyTodoDocument) -> Result<Self> {
        Ok(DailyTodoList {
            id: Some(doc.id.to_hex()),
            user_id: doc.user_id,
            date: TodoDate::new(&doc.date)?,
            todos: doc.todos,
        })
    }
}

fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
