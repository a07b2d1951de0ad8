//! MongoDB per-day todo repository

use super::documents::DailyTodoDocument;
use super::is_duplicate_key;
use async_trait::async_trait;
use dailydev_domain::entities::{DailyTodoList, TodoItem};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::repositories::DailyTodoRepository;
use dailydev_domain::value_objects::TodoDate;
use mongodb::Collection;
use mongodb::bson::{self, Document, doc};
use tracing::debug;

/// Todo repository backed by the dailyTodos collection
#[derive(Clone)]
pub struct MongoDailyTodoRepository {
    collection: Collection<DailyTodoDocument>,
}

impl MongoDailyTodoRepository {
    /// Wrap a typed collection handle
    pub fn new(collection: Collection<DailyTodoDocument>) -> Self {
        Self { collection }
    }
}

fn list_filter(user_id: &str, date: &TodoDate) -> Document {
    doc! { "userId": user_id, "date": date.as_str() }
}

#[async_trait]
impl DailyTodoRepository for MongoDailyTodoRepository {
    async fn find(&self, user_id: &str, date: &TodoDate) -> Result<Option<DailyTodoList>> {
        self.collection
            .find_one(list_filter(user_id, date))
            .await
            .map_err(|e| Error::database_with_source("Failed to query todos", e))?
            .map(DailyTodoList::try_from)
            .transpose()
    }

    async fn upsert(&self, user_id: &str, date: &TodoDate, todos: &[TodoItem]) -> Result<()> {
        let todos = bson::to_bson(todos)
            .map_err(|e| Error::database_with_source("Failed to encode todos", e))?;
        let update = doc! {
            "$set": {
                "userId": user_id,
                "date": date.as_str(),
                "todos": todos,
            }
        };

        let first = self
            .collection
            .update_one(list_filter(user_id, date), update.clone())
            .upsert(true)
            .await;

        match first {
            Ok(_) => Ok(()),
            // A concurrent first save won the insert; the retry matches its document
            Err(e) if is_duplicate_key(&e) => {
                debug!(user_id, date = %date, "Upsert raced, retrying as update");
                self.collection
                    .update_one(list_filter(user_id, date), update)
                    .upsert(true)
                    .await
                    .map_err(|e| Error::database_with_source("Failed to save todos", e))?;
                Ok(())
            }
            Err(e) => Err(Error::database_with_source("Failed to save todos", e)),
        }
    }

    async fn set_checked(
        &self,
        user_id: &str,
        date: &TodoDate,
        todo_id: &str,
        is_checked: bool,
    ) -> Result<bool> {
        let mut filter = list_filter(user_id, date);
        filter.insert("todos.id", todo_id);

        let result = self
            .collection
            .update_one(filter, doc! { "$set": { "todos.$.isChecked": is_checked } })
            .await
            .map_err(|e| Error::database_with_source("Failed to mark todo", e))?;

        // modified_count is 0 both for no match and for an unchanged value
        Ok(result.modified_count > 0)
    }

    async fn remove_item(&self, user_id: &str, date: &TodoDate, todo_id: &str) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                list_filter(user_id, date),
                doc! { "$pull": { "todos": { "id": todo_id } } },
            )
            .await
            .map_err(|e| Error::database_with_source("Failed to delete todo", e))?;

        Ok(result.modified_count > 0)
    }
}
