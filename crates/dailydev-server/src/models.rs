//! Request and response bodies
//!
//! Request fields are optional at the serde level so a missing field is
//! reported by the use case as a 400 with the field name, instead of a
//! generic deserialization failure.

use dailydev_application::{Registration, TodoDraft};
use dailydev_domain::entities::{DailyTodoList, TodoItem, User};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `POST /register` body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

/// `POST /register` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

/// `POST /login` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `POST /login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// `GET /profile` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// `POST /todos` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveTodosRequest {
    /// Calendar date; today when absent
    pub date: Option<String>,
    /// Complete replacement list
    pub todos: Option<Vec<TodoDraft>>,
}

/// `PATCH /todos/mark` body
///
/// `completed` is accepted as an alias of `isChecked`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkTodoRequest {
    pub date: Option<String>,
    pub todo_id: Option<String>,
    #[serde(alias = "completed")]
    pub is_checked: Option<bool>,
}

/// `GET /todos` response
///
/// `_id` and `userId` are omitted when no list is stored for the date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub date: String,
    pub todos: Vec<TodoItem>,
}

impl From<DailyTodoList> for TodoListResponse {
    fn from(list: DailyTodoList) -> Self {
        let persisted = list.is_persisted();
        Self {
            id: list.id,
            user_id: persisted.then_some(list.user_id),
            date: list.date.as_str().to_string(),
            todos: list.todos,
        }
    }
}

/// `GET /health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
