//! # Domain Layer
//!
//! Core types for the DailyDev backend: users, per-day todo lists, and the
//! repository ports the storage adapters implement.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `User`, `DailyTodoList`, `TodoItem` |
//! | [`value_objects`] | `EmailAddress`, `TodoDate` |
//! | [`repositories`] | `UserRepository`, `DailyTodoRepository` ports |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Domain-wide constants |

pub mod constants;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{DailyTodoList, NewUser, TodoItem, User};
pub use error::{Error, Result};
pub use value_objects::{EmailAddress, TodoDate};
