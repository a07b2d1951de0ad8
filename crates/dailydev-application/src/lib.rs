//! # Application Layer
//!
//! Use cases for the DailyDev backend. Services receive their repositories
//! and crypto adapters through their constructors; nothing here knows which
//! database or hashing algorithm is in use.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`AuthService`] | Register, login, bearer token verification |
//! | [`TodoService`] | Save, fetch, mark and delete per-day todos |

pub mod ports;
pub mod use_cases;

pub use ports::{IssuedToken, PasswordHasher, TokenService};
pub use use_cases::{AuthService, Registration, TodoDraft, TodoService};
