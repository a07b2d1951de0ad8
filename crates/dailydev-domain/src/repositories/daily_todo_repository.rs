//! Daily Todo Repository Interface

use crate::entities::{DailyTodoList, TodoItem};
use crate::error::Result;
use crate::value_objects::TodoDate;
use async_trait::async_trait;

/// Repository: Per-Day Todo Lists
///
/// Documents are keyed by `(user_id, date)`. Every method is a single
/// atomic document operation.
#[async_trait]
pub trait DailyTodoRepository: Send + Sync {
    /// Fetch the list for `(user_id, date)`
    async fn find(&self, user_id: &str, date: &TodoDate) -> Result<Option<DailyTodoList>>;

    /// Replace the items of `(user_id, date)`, creating the list if absent
    async fn upsert(&self, user_id: &str, date: &TodoDate, todos: &[TodoItem]) -> Result<()>;

    /// Set the completion flag of one item
    ///
    /// Returns `true` only when the stored document changed. A missing
    /// list, a missing item, and an item whose flag already equals
    /// `is_checked` all return `false`.
    async fn set_checked(
        &self,
        user_id: &str,
        date: &TodoDate,
        todo_id: &str,
        is_checked: bool,
    ) -> Result<bool>;

    /// Remove one item by id; returns `true` when an item was removed
    async fn remove_item(&self, user_id: &str, date: &TodoDate, todo_id: &str) -> Result<bool>;
}
