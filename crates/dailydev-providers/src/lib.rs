//! # Storage Providers
//!
//! Implementations of the domain repository ports.
//!
//! ## Available Providers
//!
//! | Provider | Feature | Description |
//! |----------|---------|-------------|
//! | [`database::memory`] | always | Concurrent in-memory maps |
//! | [`database::mongo`] | `store-mongodb` | MongoDB `users` / `dailyTodos` collections |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: in-memory store, no external service
//! - **Production**: MongoDB

pub mod constants;
pub mod database;
