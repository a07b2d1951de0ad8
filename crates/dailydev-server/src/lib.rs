//! # DailyDev Server
//!
//! HTTP API for user accounts and per-day todo lists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dailydev_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config discovery plus DAILYDEV__*, MONGO_URI, JWT_SECRET_KEY
//!     run(None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Route | Auth | Description |
//! |-------|------|-------------|
//! | `POST /register` | - | Create an account |
//! | `POST /login` | - | Exchange credentials for a bearer token |
//! | `GET /profile` | Bearer | The authenticated user |
//! | `GET /todos?date=` | Bearer | Todo list for a date (default today) |
//! | `POST /todos` | Bearer | Replace the todo list for a date |
//! | `PATCH /todos/mark` | Bearer | Set the completion flag of one item |
//! | `DELETE /todos/<id>?date=` | Bearer | Remove one item |
//! | `GET /health` | - | Liveness probe |

// Rocket route macros expand to code the 2024 compatibility lints flag
#![allow(rust_2024_compatibility)]

pub mod auth;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;
pub mod state;

pub use init::run;
pub use routes::build_rocket;
pub use state::ServerState;
