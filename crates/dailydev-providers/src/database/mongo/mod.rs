//! MongoDB repositories
//!
//! Two collections back the domain: `users` (one document per account) and
//! `dailyTodos` (one document per user and calendar date, holding the todo
//! items as an embedded array).
//!
//! ## Indexes
//!
//! [`MongoStore::ensure_indexes`] creates a unique index on `users.email`
//! and a unique compound index on `dailyTodos.(userId, date)`. Registration
//! relies on the email index to turn concurrent duplicate inserts into
//! `Error::Conflict`. The compound index keeps concurrent first saves of the
//! same day from upserting two documents.

mod daily_todo_repository;
mod documents;
mod user_repository;

pub use daily_todo_repository::MongoDailyTodoRepository;
pub use documents::{DailyTodoDocument, UserDocument};
pub use user_repository::MongoUserRepository;

use crate::constants::{DAILY_TODOS_KEY_INDEX, MONGODB_DUPLICATE_KEY_CODE, USERS_EMAIL_INDEX};
use dailydev_domain::error::{Error, Result};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use tracing::info;

/// Connected MongoDB database with the collection names in use
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    users_collection: String,
    todos_collection: String,
}

impl MongoStore {
    /// Connect to MongoDB
    ///
    /// When `database_name` is `None` the database named in the URI path is
    /// used (`mongodb://host/dailydev`), falling back to `fallback_name`.
    pub async fn connect(
        uri: &str,
        database_name: Option<&str>,
        fallback_name: &str,
        users_collection: &str,
        todos_collection: &str,
    ) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::database_with_source("Failed to connect to MongoDB", e))?;

        let database = match database_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(fallback_name)),
        };
        info!(database = %database.name(), "Connected to MongoDB");

        Ok(Self {
            database,
            users_collection: users_collection.to_string(),
            todos_collection: todos_collection.to_string(),
        })
    }

    /// Create the indexes the repositories rely on (idempotent)
    pub async fn ensure_indexes(&self) -> Result<()> {
        self.database
            .collection::<UserDocument>(&self.users_collection)
            .create_index(users_email_index())
            .await
            .map_err(|e| Error::database_with_source("Failed to create users index", e))?;

        self.database
            .collection::<DailyTodoDocument>(&self.todos_collection)
            .create_index(daily_todos_key_index())
            .await
            .map_err(|e| Error::database_with_source("Failed to create dailyTodos index", e))?;

        info!("MongoDB indexes ensured");
        Ok(())
    }

    /// User repository over the users collection
    pub fn user_repository(&self) -> MongoUserRepository {
        MongoUserRepository::new(self.database.collection(&self.users_collection))
    }

    /// Todo repository over the dailyTodos collection
    pub fn daily_todo_repository(&self) -> MongoDailyTodoRepository {
        MongoDailyTodoRepository::new(self.database.collection(&self.todos_collection))
    }
}

/// Whether a driver error is a unique index violation
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == MONGODB_DUPLICATE_KEY_CODE
    )
}

fn users_email_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(USERS_EMAIL_INDEX.to_string())
                .build(),
        )
        .build()
}

fn daily_todos_key_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "userId": 1, "date": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(DAILY_TODOS_KEY_INDEX.to_string())
                .build(),
        )
        .build()
}
