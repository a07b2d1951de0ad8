//! Repository Interfaces
//!
//! Ports for persisting domain entities. Each storage adapter (MongoDB,
//! in-memory) implements these with one atomic store operation per method.
//!
//! ## Repositories
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Registration and lookup of users |
//! | [`DailyTodoRepository`] | Per-(user, date) todo list documents |

/// Per-day todo repository interface
pub mod daily_todo_repository;
/// User repository interface
pub mod user_repository;

pub use daily_todo_repository::DailyTodoRepository;
pub use user_repository::UserRepository;
