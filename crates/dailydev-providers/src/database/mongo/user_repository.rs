//! MongoDB user repository

use super::documents::UserDocument;
use super::is_duplicate_key;
use async_trait::async_trait;
use dailydev_domain::entities::{NewUser, User};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::repositories::UserRepository;
use dailydev_domain::value_objects::EmailAddress;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};
use tracing::debug;

/// User repository backed by the users collection
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Wrap a typed collection handle
    pub fn new(collection: Collection<UserDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let document = UserDocument::from(&user);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    Error::conflict("Email already registered")
                } else {
                    Error::database_with_source("Failed to insert user", e)
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| Error::database("Inserted user id is not an ObjectId"))?;
        debug!(user_id = %id, "User document inserted");

        Ok(user.into_user(id.to_hex()))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "email": email.as_str() })
            .await
            .map_err(|e| Error::database_with_source("Failed to query user by email", e))?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| Error::database_with_source("Failed to query user by id", e))?
            .map(User::try_from)
            .transpose()
    }
}
