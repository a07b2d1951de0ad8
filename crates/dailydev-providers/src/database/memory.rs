//! In-memory repositories
//!
//! Concurrent maps with the same semantics as the MongoDB adapters. Each
//! method touches a single map entry under its shard lock, which gives the
//! same one-document atomicity the database provides.
//!
//! ## Example
//!
//! ```ignore
//! use dailydev_providers::database::{MemoryDailyTodoRepository, MemoryUserRepository};
//! use std::sync::Arc;
//!
//! let users = Arc::new(MemoryUserRepository::new());
//! let todos = Arc::new(MemoryDailyTodoRepository::new());
//! ```

use async_trait::async_trait;
use dailydev_domain::entities::{DailyTodoList, NewUser, TodoItem, User};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::repositories::{DailyTodoRepository, UserRepository};
use dailydev_domain::value_objects::{EmailAddress, TodoDate};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// In-memory user store
#[derive(Default)]
pub struct MemoryUserRepository {
    users: DashMap<String, User>,
    email_index: DashMap<EmailAddress, String>,
}

impl MemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user is registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        match self.email_index.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(Error::conflict("Email already registered")),
            Entry::Vacant(slot) => {
                let id = generate_id();
                slot.insert(id.clone());
                let user = user.into_user(id.clone());
                self.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        let Some(id) = self.email_index.get(email).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}

/// In-memory per-day todo store keyed by `(user_id, date)`
#[derive(Default)]
pub struct MemoryDailyTodoRepository {
    lists: DashMap<(String, TodoDate), DailyTodoList>,
}

impl MemoryDailyTodoRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no list is stored
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn key(user_id: &str, date: &TodoDate) -> (String, TodoDate) {
        (user_id.to_string(), date.clone())
    }
}

#[async_trait]
impl DailyTodoRepository for MemoryDailyTodoRepository {
    async fn find(&self, user_id: &str, date: &TodoDate) -> Result<Option<DailyTodoList>> {
        Ok(self
            .lists
            .get(&Self::key(user_id, date))
            .map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, user_id: &str, date: &TodoDate, todos: &[TodoItem]) -> Result<()> {
        self.lists
            .entry(Self::key(user_id, date))
            .and_modify(|list| list.todos = todos.to_vec())
            .or_insert_with(|| {
                let mut list = DailyTodoList::new(user_id, date.clone(), todos.to_vec());
                list.id = Some(generate_id());
                list
            });
        Ok(())
    }

    async fn set_checked(
        &self,
        user_id: &str,
        date: &TodoDate,
        todo_id: &str,
        is_checked: bool,
    ) -> Result<bool> {
        let Some(mut list) = self.lists.get_mut(&Self::key(user_id, date)) else {
            return Ok(false);
        };

        match list.todos.iter_mut().find(|item| item.id == todo_id) {
            Some(item) if item.is_checked != is_checked => {
                item.is_checked = is_checked;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove_item(&self, user_id: &str, date: &TodoDate, todo_id: &str) -> Result<bool> {
        let Some(mut list) = self.lists.get_mut(&Self::key(user_id, date)) else {
            return Ok(false);
        };

        let before = list.todos.len();
        list.todos.retain(|item| item.id != todo_id);
        Ok(list.todos.len() != before)
    }
}
