//! Use cases

/// Registration, login and token verification
pub mod auth_service;
/// Per-day todo list operations
pub mod todo_service;

pub use auth_service::{AuthService, Registration};
pub use todo_service::{TodoDraft, TodoService};
