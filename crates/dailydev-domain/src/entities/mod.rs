//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Registered account with its password hash |
//! | [`DailyTodoList`] | One user's todo items for one calendar date |
//! | [`TodoItem`] | Single entry owned by a `DailyTodoList` |

/// Per-day todo list entities
pub mod daily_todo;
/// User account entities
pub mod user;

pub use daily_todo::{DailyTodoList, TodoItem};
pub use user::{NewUser, User};
