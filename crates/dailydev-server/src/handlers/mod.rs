//! Route handlers

pub mod auth_handlers;
pub mod health;
pub mod todo_handlers;
