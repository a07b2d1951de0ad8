//! Todo Use Case
//!
//! Operations on the single `(user, date)` todo document. The user id always
//! comes from a verified token, never from the request body.

use dailydev_domain::entities::{DailyTodoList, TodoItem};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::repositories::DailyTodoRepository;
use dailydev_domain::value_objects::TodoDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Todo item as submitted by a client; `id` may be absent
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    /// Client-chosen id
    #[serde(default)]
    pub id: Option<String>,
    /// Title text
    #[serde(default)]
    pub todo: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Completion flag
    #[serde(default)]
    pub is_checked: bool,
}

impl From<TodoDraft> for TodoItem {
    fn from(draft: TodoDraft) -> Self {
        TodoItem::new(draft.id, draft.todo, draft.description, draft.is_checked)
    }
}

/// Todo service
pub struct TodoService {
    todos: Arc<dyn DailyTodoRepository>,
}

impl TodoService {
    /// Create a new todo service with injected repository
    pub fn new(todos: Arc<dyn DailyTodoRepository>) -> Self {
        Self { todos }
    }

    /// Replace the whole list for the date, creating it if absent
    ///
    /// Missing item ids are generated. Returns the date the list was stored
    /// under, which is today when `date` was omitted.
    pub async fn save_todos(
        &self,
        user_id: &str,
        date: Option<&str>,
        drafts: Vec<TodoDraft>,
    ) -> Result<TodoDate> {
        let date = TodoDate::or_today(date)?;
        let list = DailyTodoList::new(
            user_id,
            date,
            drafts.into_iter().map(TodoItem::from).collect(),
        );
        list.ensure_unique_ids()?;

        self.todos.upsert(user_id, &list.date, &list.todos).await?;
        debug!(user_id, date = %list.date, count = list.todos.len(), "Todos saved");
        Ok(list.date)
    }

    /// Fetch the list for the date, or an empty list when none exists
    pub async fn get_todos(&self, user_id: &str, date: Option<&str>) -> Result<DailyTodoList> {
        let date = TodoDate::or_today(date)?;
        let list = self.todos.find(user_id, &date).await?;
        Ok(list.unwrap_or_else(|| DailyTodoList::empty(user_id, date)))
    }

    /// Set the completion flag of one item
    ///
    /// Fails with `Error::NotFound` when nothing changed, which includes the
    /// case where the flag already had the requested value.
    pub async fn mark_todo(
        &self,
        user_id: &str,
        date: &str,
        todo_id: &str,
        is_checked: bool,
    ) -> Result<()> {
        let date = TodoDate::new(date)?;
        let todo_id = required_todo_id(todo_id)?;

        if !self
            .todos
            .set_checked(user_id, &date, todo_id, is_checked)
            .await?
        {
            return Err(Error::not_found("Todo not found or already updated"));
        }

        debug!(user_id, date = %date, todo_id, is_checked, "Todo marked");
        Ok(())
    }

    /// Remove one item from the list for the date
    ///
    /// The date is mandatory here; it is never defaulted to today.
    pub async fn delete_todo(&self, user_id: &str, date: Option<&str>, todo_id: &str) -> Result<()> {
        let date = TodoDate::new(date.unwrap_or_default())?;
        let todo_id = required_todo_id(todo_id)?;

        if !self.todos.remove_item(user_id, &date, todo_id).await? {
            return Err(Error::not_found("Todo not found"));
        }

        debug!(user_id, date = %date, todo_id, "Todo deleted");
        Ok(())
    }
}

fn required_todo_id(todo_id: &str) -> Result<&str> {
    let todo_id = todo_id.trim();
    if todo_id.is_empty() {
        return Err(Error::missing_field("todoId"));
    }
    Ok(todo_id)
}
