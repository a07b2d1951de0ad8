//! Per-day todo list entities

use crate::error::{Error, Result};
use crate::value_objects::TodoDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Item id, unique within its list
    pub id: String,
    /// Title text
    pub todo: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Completion flag
    #[serde(default)]
    pub is_checked: bool,
}

impl TodoItem {
    /// Build an item, generating a UUID v4 id when none was supplied
    ///
    /// Supplied ids are trimmed, matching how mark and delete read them.
    pub fn new(
        id: Option<String>,
        todo: impl Into<String>,
        description: impl Into<String>,
        is_checked: bool,
    ) -> Self {
        let id = id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Self {
            id,
            todo: todo.into(),
            description: description.into(),
            is_checked,
        }
    }
}

/// All todo items of one user for one calendar date
///
/// `(user_id, date)` is the logical key of the collection. `id` is `None`
/// for a list that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTodoList {
    /// Store-assigned document id
    pub id: Option<String>,
    /// Owning user id
    pub user_id: String,
    /// Calendar date key
    pub date: TodoDate,
    /// Items in client order
    pub todos: Vec<TodoItem>,
}

impl DailyTodoList {
    /// Unsaved list holding the given items
    pub fn new(user_id: impl Into<String>, date: TodoDate, todos: Vec<TodoItem>) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            date,
            todos,
        }
    }

    /// Placeholder returned when no list exists for the date
    pub fn empty(user_id: impl Into<String>, date: TodoDate) -> Self {
        Self::new(user_id, date, Vec::new())
    }

    /// Whether this list came from the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Find an item by id
    pub fn item(&self, todo_id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == todo_id)
    }

    /// Reject lists where two items share an id
    pub fn ensure_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.todos.len());
        for item in &self.todos {
            if !seen.insert(item.id.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "duplicate todo id: {}",
                    item.id
                )));
            }
        }
        Ok(())
    }
}
